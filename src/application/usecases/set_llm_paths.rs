//! LLM 서비스 경로를 갱신하고 설정 파일에 반영하는 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::Reporter;
use crate::application::validator::ConfigValidator;
use crate::domain::LlmPathUpdate;

/// 바뀐 경로가 있을 때만 설정 파일을 되쓴다.
pub struct SetLlmPathsUseCase<'v, 'a> {
    pub validator: &'v mut ConfigValidator<'a>,
    pub reporter: &'v dyn Reporter,
}

impl<'v, 'a> SetLlmPathsUseCase<'v, 'a> {
    /// 파일을 실제로 썼는지 반환한다.
    pub fn execute(self, update: &LlmPathUpdate) -> Result<bool> {
        if update.is_empty() {
            self.reporter.status("llm", "unchanged (no paths given)");
            return Ok(false);
        }

        let written = self
            .validator
            .set_llm_service_config(update)
            .context("failed to update llm service paths")?;

        let path = self.validator.document().path().display().to_string();
        if written {
            self.reporter.status("llm", &format!("ok written to {path}"));
        } else {
            self.reporter.status("llm", "unchanged (paths already set)");
        }
        Ok(written)
    }
}
