//! 설정 파일 탐색/검증 결과를 확인하는 유스케이스.

use anyhow::Result;

use crate::application::validator::ConfigValidator;
use crate::infrastructure::config::{ConfigInspection, ResolvedConfigPath};

/// 현재 적용 중인 설정을 사람이 읽기 쉬운 JSON으로 반환한다.
pub struct InspectConfigUseCase<'a> {
    pub resolved: &'a ResolvedConfigPath,
    pub validator: &'a ConfigValidator<'a>,
}

impl<'a> InspectConfigUseCase<'a> {
    /// 설정 점검 결과 문자열을 생성한다.
    pub fn execute(&self) -> Result<String> {
        ConfigInspection::pretty_json(self.resolved, self.validator)
    }
}
