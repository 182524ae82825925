//! `llm` 모듈 규칙: 모델/임베딩/리랭커/상태 경로 검증.

use std::path::Path;

use tracing::debug;

use super::registry::{ModuleRules, RuleContext, RuleOutcome};
use crate::domain::settings::{optional_str, required_str};
use crate::domain::{ConfigError, LlmPathRole, LlmPaths};

pub struct LlmRules;

impl ModuleRules for LlmRules {
    fn name(&self) -> &'static str {
        "llm"
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<RuleOutcome, ConfigError> {
        let mut paths = LlmPaths::default();

        for role in LlmPathRole::ALL {
            let field = role.field_name();
            // state_path는 생략 가능하지만 빈 값도 존재 검사를 거친다(빈 경로는 항상 실패).
            let value = match role {
                LlmPathRole::State => optional_str(ctx.service, ctx.settings, field)?,
                _ => required_str(ctx.service, ctx.settings, field)?,
            };

            if !ctx.probe.exists(Path::new(value)) {
                return Err(ConfigError::PathNotFound {
                    service: ctx.service.to_string(),
                    field: field.to_string(),
                    path: value.into(),
                });
            }
            paths.set(role, value.to_string());
        }

        debug!(service = ctx.service, ?paths, "llm paths resolved");
        Ok(RuleOutcome {
            corrections: Vec::new(),
            llm_paths: Some(paths),
        })
    }
}
