//! Domain layer
//! 설정 검증 규칙에 쓰이는 값 객체/오류 분류를 외부 I/O 없이 표현한다.

pub mod error;
pub mod llm;
pub mod settings;

pub use error::ConfigError;
pub use llm::{LlmPathRole, LlmPathUpdate, LlmPaths};
