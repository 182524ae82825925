//! 설정 파일 경로 탐색과 진단 출력 모듈.
//! 실행 시 한 번 경로를 결정하고, 검증된 상태를 사람이 읽기 쉬운 JSON으로 보여준다.

mod inspection;
mod loader;

use anyhow::Result;

use crate::application::validator::ConfigValidator;

pub use inspection::{ConfigInspection, ServiceInspection};
pub use loader::{CONFIG_ENV, ResolvedConfigPath, resolve_config_path};

impl ConfigInspection {
    /// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn pretty_json(
        resolved: &ResolvedConfigPath,
        validator: &ConfigValidator<'_>,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::from_validator(
            resolved, validator,
        ))?)
    }
}
