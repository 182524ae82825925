//! 설정 로딩/검증/저장 실패 분류.

use std::path::PathBuf;

use thiserror::Error;

/// 저장 실패의 원인(직렬화 또는 쓰기 I/O).
pub type PersistCause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// 설정 파일 자체가 없다.
    #[error("config file {} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 파일 내용이 매핑으로 해석되지 않는다.
    #[error("invalid config file {}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config for {service}: expected a mapping of settings")]
    InvalidServiceConfig { service: String },

    #[error("{field} is required for {service}")]
    MissingField { service: String, field: String },

    #[error("{field} {} not found for {service}", .path.display())]
    PathNotFound {
        service: String,
        field: String,
        path: PathBuf,
    },

    /// 디렉터리(또는 상위 디렉터리)가 있어야 하는 필드의 존재 검사 실패.
    #[error("{field} directory {} not found for {service}", .path.display())]
    DirectoryNotFound {
        service: String,
        field: String,
        path: PathBuf,
    },

    #[error("invalid {field} for {service}: {reason}")]
    InvalidField {
        service: String,
        field: String,
        reason: String,
    },

    #[error("service {service} is not declared in the config document")]
    ServiceNotFound { service: String },

    #[error("failed to write config file {}", .path.display())]
    PersistError {
        path: PathBuf,
        #[source]
        source: PersistCause,
    },
}

impl ConfigError {
    pub fn missing(service: &str, field: &str) -> Self {
        Self::MissingField {
            service: service.to_string(),
            field: field.to_string(),
        }
    }

    pub fn invalid(service: &str, field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            service: service.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
