//! 설정 문서 대상 유스케이스 모음.

pub mod check_config;
pub mod inspect_config;
pub mod set_llm_paths;
