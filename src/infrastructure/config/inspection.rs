//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::ResolvedConfigPath;
use crate::application::validator::ConfigValidator;
use crate::domain::LlmPaths;
use crate::domain::settings::{is_truthy, service_module};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_path: String,
    pub services: Vec<ServiceInspection>,
    pub llm_service: Option<String>,
    pub llm_paths: LlmPaths,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInspection {
    pub name: String,
    pub module: String,
    /// 적용된 규칙 집합 이름(등록되지 않은 모듈은 "none").
    pub rules: String,
    pub enabled: Option<bool>,
}

impl ConfigInspection {
    pub fn from_validator(resolved: &ResolvedConfigPath, validator: &ConfigValidator<'_>) -> Self {
        let document = validator.document();
        let services = document
            .services()
            .iter()
            .filter_map(|(key, value)| {
                let name = key.as_str()?;
                let settings = value.as_mapping()?;
                let module = service_module(name, settings).ok().unwrap_or_default();
                Some(ServiceInspection {
                    name: name.to_string(),
                    module: module.to_string(),
                    rules: validator.registry().resolve(&module).name().to_string(),
                    enabled: settings.get("enabled").map(is_truthy),
                })
            })
            .collect();

        Self {
            searched_paths: resolved
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_path: document.path().display().to_string(),
            services,
            llm_service: validator.derived().llm_service.clone(),
            llm_paths: validator.llm_paths().clone(),
        }
    }
}
