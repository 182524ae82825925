//! `index` 모듈 규칙: Chroma 저장소/접속 정보와 SQLite 경로 검증.

use std::path::Path;

use serde_yaml::Value;

use super::registry::{ModuleRules, RuleContext, RuleOutcome};
use crate::domain::ConfigError;
use crate::domain::settings::{field, is_truthy, require_port, required_str};

pub const ENABLED_FIELD: &str = "enabled";
pub const CHROMA_PATH_FIELD: &str = "chroma_path";
pub const CHROMA_HOST_FIELD: &str = "chroma_host";
pub const CHROMA_PORT_FIELD: &str = "chroma_port";
pub const SQLITE_DB_PATH_FIELD: &str = "sqlite_db_path";

pub struct IndexRules;

impl ModuleRules for IndexRules {
    fn name(&self) -> &'static str {
        "index"
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<RuleOutcome, ConfigError> {
        let service = ctx.service;

        let chroma_path = required_str(service, ctx.settings, CHROMA_PATH_FIELD)?;
        if !ctx.probe.exists(Path::new(chroma_path)) {
            return Err(ConfigError::DirectoryNotFound {
                service: service.to_string(),
                field: CHROMA_PATH_FIELD.to_string(),
                path: chroma_path.into(),
            });
        }

        required_str(service, ctx.settings, CHROMA_HOST_FIELD)?;
        require_port(service, ctx.settings, CHROMA_PORT_FIELD)?;

        // DB 파일이 아니라 상위 디렉터리가 있어야 한다. 디렉터리 성분이 없으면 빈 경로가 된다.
        let sqlite_db_path = required_str(service, ctx.settings, SQLITE_DB_PATH_FIELD)?;
        let parent = Path::new(dirname(sqlite_db_path));
        if !ctx.probe.exists(parent) {
            return Err(ConfigError::DirectoryNotFound {
                service: service.to_string(),
                field: SQLITE_DB_PATH_FIELD.to_string(),
                path: parent.to_path_buf(),
            });
        }

        let mut outcome = RuleOutcome::default();
        if !field(ctx.settings, ENABLED_FIELD).is_some_and(is_truthy) {
            outcome
                .corrections
                .push((ENABLED_FIELD.to_string(), Value::Bool(true)));
        }
        Ok(outcome)
    }
}

/// 마지막 `/` 앞까지를 디렉터리 부분으로 본다. `Path::parent`와 달리
/// `a/sub/`는 `a/sub`, `/`는 `/`가 된다. 루트만 남는 경우가 아니면 끝의 `/`는 떼어 낸다.
fn dirname(path: &str) -> &str {
    let head = path.rfind('/').map_or("", |i| &path[..=i]);
    let trimmed = head.trim_end_matches('/');
    if trimmed.is_empty() { head } else { trimmed }
}
