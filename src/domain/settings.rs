//! 서비스 설정 값(generic YAML value) 해석 규칙.

use std::borrow::Cow;

use serde_yaml::{Mapping, Value};

use crate::domain::error::ConfigError;

/// 모든 서비스에 필수인 모듈 선언 필드.
pub const SERVICE_MODULE_FIELD: &str = "service_module";

/// 값의 참/거짓 판정. null, false, 0, 빈 문자열/시퀀스/매핑은 거짓이다.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// 필드 값을 거짓 판정 없이 그대로 조회한다.
pub fn field<'a>(settings: &'a Mapping, name: &str) -> Option<&'a Value> {
    settings.get(name)
}

/// 비어 있지 않은 문자열 필드를 요구한다.
/// 없거나 거짓 값이면 `MissingField`, 문자열이 아니면 `InvalidField`.
pub fn required_str<'a>(
    service: &str,
    settings: &'a Mapping,
    name: &str,
) -> Result<&'a str, ConfigError> {
    match field(settings, name) {
        Some(value) if is_truthy(value) => value
            .as_str()
            .ok_or_else(|| ConfigError::invalid(service, name, "expected a string")),
        _ => Err(ConfigError::missing(service, name)),
    }
}

/// 선택 문자열 필드. 없거나 거짓 값이면 빈 문자열로 본다.
pub fn optional_str<'a>(
    service: &str,
    settings: &'a Mapping,
    name: &str,
) -> Result<&'a str, ConfigError> {
    match field(settings, name) {
        Some(value) if is_truthy(value) => value
            .as_str()
            .ok_or_else(|| ConfigError::invalid(service, name, "expected a string")),
        _ => Ok(""),
    }
}

/// 포트 필드는 정수 또는 10진 숫자로만 된 문자열이어야 한다.
pub fn require_port(service: &str, settings: &Mapping, name: &str) -> Result<(), ConfigError> {
    let value = match field(settings, name) {
        None | Some(Value::Null) => return Err(ConfigError::missing(service, name)),
        Some(Value::String(s)) if s.is_empty() => {
            return Err(ConfigError::missing(service, name));
        }
        Some(value) => value,
    };

    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(()),
        Value::String(s) if s.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        Value::String(s) => Err(ConfigError::invalid(
            service,
            name,
            format!("{s:?} is not a decimal port number"),
        )),
        _ => Err(ConfigError::invalid(
            service,
            name,
            "expected an integer or a digit string",
        )),
    }
}

/// 서비스의 모듈 이름을 읽는다.
/// 없거나 거짓 값이면 `MissingField`. 문자열이 아닌 참 값은 YAML 표기 그대로 이름으로 쓴다.
pub fn service_module<'a>(
    service: &str,
    settings: &'a Mapping,
) -> Result<Cow<'a, str>, ConfigError> {
    match field(settings, SERVICE_MODULE_FIELD) {
        Some(Value::String(name)) if !name.is_empty() => Ok(Cow::Borrowed(name)),
        Some(value) if is_truthy(value) => Ok(Cow::Owned(render_value(value))),
        _ => Err(ConfigError::missing(service, SERVICE_MODULE_FIELD)),
    }
}

/// 스칼라/키 값을 한 줄 YAML 표기로 바꾼다.
pub fn render_value(value: &Value) -> String {
    match serde_yaml::to_string(value) {
        Ok(rendered) => rendered.trim_end().to_string(),
        Err(_) => format!("{value:?}"),
    }
}
