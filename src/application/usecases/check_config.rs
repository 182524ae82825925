//! 검증을 통과한 설정 문서를 서비스별로 요약하는 유스케이스.

use anyhow::Result;

use crate::application::ports::Reporter;
use crate::application::validator::ConfigValidator;
use crate::domain::settings::service_module;

/// 서비스별 모듈/규칙 적용 결과를 출력한다.
pub struct CheckConfigUseCase<'a> {
    pub validator: &'a ConfigValidator<'a>,
    pub reporter: &'a dyn Reporter,
}

impl<'a> CheckConfigUseCase<'a> {
    /// 검사한 서비스 수를 반환한다.
    pub fn execute(&self) -> Result<usize> {
        let document = self.validator.document();
        self.reporter.section("Config");
        self.reporter
            .kv("path", &document.path().display().to_string());
        self.reporter.kv("services", &document.len().to_string());

        self.reporter.section("Services");
        for (key, value) in document.services() {
            let name = key.as_str().unwrap_or_default();
            let module = value
                .as_mapping()
                .and_then(|s| service_module(name, s).ok())
                .unwrap_or_default();
            let module: &str = &module;

            if self.validator.registry().is_known(module) {
                let rules = self.validator.registry().resolve(module).name();
                self.reporter.status(name, &format!("ok ({rules})"));
            } else {
                self.reporter
                    .status(name, &format!("skipped (no rules for {module})"));
            }
        }

        let paths = self.validator.llm_paths();
        if !paths.is_empty() {
            self.reporter.section("LLM paths");
            self.reporter.kv("base_model_path", &paths.base_model_path);
            self.reporter.kv("embedding_path", &paths.embedding_path);
            self.reporter.kv("reranker_path", &paths.reranker_path);
            self.reporter.kv("state_path", &paths.state_path);
        }

        Ok(document.len())
    }
}
