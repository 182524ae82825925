//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use crate::application::config::ConfigDocument;
use crate::domain::ConfigError;

/// 설정 문서 읽기/되쓰기를 담당하는 저장소 포트.
pub trait DocumentStore: Send + Sync {
    /// 경로의 파일을 generic 매핑 문서로 읽는다. 검증은 하지 않는다.
    fn load(&self, path: &Path) -> Result<ConfigDocument, ConfigError>;
    /// 문서 전체를 원래 경로에 덮어쓴다.
    fn persist(&self, document: &ConfigDocument) -> Result<(), ConfigError>;
}

/// 파일시스템 존재 검사 포트.
pub trait PathProbe: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
}
