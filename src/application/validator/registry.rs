//! 모듈 이름 → 검증 규칙 집합 레지스트리.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

use super::index::IndexRules;
use super::llm::LlmRules;
use crate::application::ports::PathProbe;
use crate::domain::{ConfigError, LlmPaths};

/// 규칙 집합에 전달되는 검증 대상.
pub struct RuleContext<'a> {
    pub service: &'a str,
    pub settings: &'a Mapping,
    pub probe: &'a dyn PathProbe,
}

/// 규칙 집합 실행 결과. 입력 설정은 건드리지 않고 보정값만 돌려준다.
#[derive(Debug, Default, PartialEq)]
pub struct RuleOutcome {
    /// 검증 성공 시 서비스 설정에 채워 넣을 기본값(필드, 값).
    pub corrections: Vec<(String, Value)>,
    /// `llm` 규칙이 확정한 경로.
    pub llm_paths: Option<LlmPaths>,
}

/// 모듈별 검증 규칙 포트.
pub trait ModuleRules: Send + Sync {
    /// 진단 출력용 정규 이름.
    fn name(&self) -> &'static str;
    fn validate(&self, ctx: &RuleContext<'_>) -> Result<RuleOutcome, ConfigError>;
}

/// 등록되지 않은 모듈에 쓰는 규칙(항상 통과).
pub struct NoopRules;

impl ModuleRules for NoopRules {
    fn name(&self) -> &'static str {
        "none"
    }

    fn validate(&self, _ctx: &RuleContext<'_>) -> Result<RuleOutcome, ConfigError> {
        Ok(RuleOutcome::default())
    }
}

static NOOP: NoopRules = NoopRules;

/// 닫힌 규칙 레지스트리. 초기화 시 한 번 구성한다.
pub struct RuleRegistry {
    rules: HashMap<String, Box<dyn ModuleRules>>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleRegistry {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// 기본 제공 규칙(`llm`, `index`)과 배포 파일에서 쓰는 긴 별칭을 등록한다.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("llm", Box::new(LlmRules));
        registry.register("llm_service", Box::new(LlmRules));
        registry.register("index", Box::new(IndexRules));
        registry.register("index_service", Box::new(IndexRules));
        registry
    }

    /// 같은 이름이 있으면 교체한다.
    pub fn register(&mut self, module: impl Into<String>, rules: Box<dyn ModuleRules>) {
        self.rules.insert(module.into(), rules);
    }

    pub fn is_known(&self, module: &str) -> bool {
        self.rules.contains_key(module)
    }

    /// 정확히 일치하는 이름을 찾고, 없으면 no-op 규칙을 돌려준다.
    pub fn resolve(&self, module: &str) -> &dyn ModuleRules {
        match self.rules.get(module) {
            Some(rules) => rules.as_ref(),
            None => &NOOP,
        }
    }

    pub fn module_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
