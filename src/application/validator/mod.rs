//! 서비스별 설정 검증기와 LLM 경로 갱신/저장.
//!
//! 서비스마다 `service_module` 이름으로 규칙 집합을 찾아 적용하고,
//! 문서 전체가 통과했을 때만 보정값과 파생 상태를 반영한다.

mod index;
mod llm;
mod registry;

use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, info, warn};

use crate::application::config::ConfigDocument;
use crate::application::ports::{DocumentStore, PathProbe};
use crate::domain::settings::{render_value, service_module};
use crate::domain::{ConfigError, LlmPathRole, LlmPathUpdate, LlmPaths};

pub use index::IndexRules;
pub use llm::LlmRules;
pub use registry::{ModuleRules, NoopRules, RuleContext, RuleOutcome, RuleRegistry};

/// 검증 성공 후 캐시된 `llm` 경로가 없을 때 갱신 대상으로 쓰는 서비스 이름.
pub const DEFAULT_LLM_SERVICE: &str = "llm";

/// 검증기가 소유하는 파생 상태.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedState {
    pub llm: LlmPaths,
    /// 경로를 확정한 `llm` 서비스 이름.
    pub llm_service: Option<String>,
}

/// 설정 문서와 파생 상태를 소유하는 검증기.
pub struct ConfigValidator<'a> {
    document: ConfigDocument,
    registry: RuleRegistry,
    derived: DerivedState,
    store: &'a dyn DocumentStore,
    probe: &'a dyn PathProbe,
}

impl<'a> ConfigValidator<'a> {
    /// 빈 파생 상태로 검증기를 만든다. 검증은 `validate`에서 수행한다.
    pub fn new(
        document: ConfigDocument,
        registry: RuleRegistry,
        store: &'a dyn DocumentStore,
        probe: &'a dyn PathProbe,
    ) -> Self {
        Self {
            document,
            registry,
            derived: DerivedState::default(),
            store,
            probe,
        }
    }

    /// 파일을 읽고 기본 규칙으로 검증까지 마친 검증기를 반환한다.
    pub fn load(
        path: &Path,
        store: &'a dyn DocumentStore,
        probe: &'a dyn PathProbe,
    ) -> Result<Self, ConfigError> {
        let document = store.load(path)?;
        info!(path = %path.display(), services = document.len(), "config loaded");

        let mut validator = Self::new(document, RuleRegistry::builtin(), store, probe);
        validator.validate()?;
        Ok(validator)
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn derived(&self) -> &DerivedState {
        &self.derived
    }

    pub fn llm_paths(&self) -> &LlmPaths {
        &self.derived.llm
    }

    /// 문서 순서대로 모든 서비스를 검증한다.
    /// 첫 실패에서 중단하며, 실패 시 문서와 파생 상태는 바뀌지 않는다.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let mut corrections: Vec<(String, String, Value)> = Vec::new();
        let mut llm: Option<(String, LlmPaths)> = None;

        for (key, value) in self.document.services() {
            let Some(service) = key.as_str() else {
                return Err(ConfigError::InvalidServiceConfig {
                    service: render_value(key),
                });
            };
            let Some(settings) = value.as_mapping() else {
                return Err(ConfigError::InvalidServiceConfig {
                    service: service.to_string(),
                });
            };

            let module = service_module(service, settings)?;
            let module: &str = &module;
            if !self.registry.is_known(module) {
                warn!(
                    service,
                    module,
                    known = ?self.registry.module_names(),
                    "no rules registered for module, skipping"
                );
                continue;
            }

            let rules = self.registry.resolve(module);
            debug!(service, module, rules = rules.name(), "validating service");
            let outcome = rules.validate(&RuleContext {
                service,
                settings,
                probe: self.probe,
            })?;

            for (field, value) in outcome.corrections {
                corrections.push((service.to_string(), field, value));
            }
            if let Some(paths) = outcome.llm_paths {
                llm = Some((service.to_string(), paths));
            }
        }

        for (service, field, value) in corrections {
            debug!(service = %service, field = %field, "applying default");
            self.document.set_field(&service, &field, value);
        }
        if let Some((service, paths)) = llm {
            self.derived.llm = paths;
            self.derived.llm_service = Some(service);
        }
        Ok(())
    }

    /// 바뀐 경로만 캐시/문서에 반영하고, 하나라도 바뀌었으면 문서 전체를 되쓴다.
    /// 쓰기가 실패하면 메모리 상태는 이전 그대로 남는다. 반환값은 쓰기 여부.
    pub fn set_llm_service_config(&mut self, update: &LlmPathUpdate) -> Result<bool, ConfigError> {
        let mut next_paths = self.derived.llm.clone();
        let mut changed = Vec::new();

        for role in LlmPathRole::ALL {
            let Some(requested) = update.requested(role) else {
                continue;
            };
            if requested != next_paths.get(role) {
                next_paths.set(role, requested.to_string());
                changed.push(role);
            }
        }

        if changed.is_empty() {
            debug!("llm paths unchanged, skipping write");
            return Ok(false);
        }

        let service = self
            .derived
            .llm_service
            .clone()
            .unwrap_or_else(|| DEFAULT_LLM_SERVICE.to_string());
        let mut next_document = self.document.clone();
        for role in &changed {
            let value = Value::from(next_paths.get(*role));
            if !next_document.set_field(&service, role.field_name(), value) {
                return Err(ConfigError::ServiceNotFound { service });
            }
        }

        self.store.persist(&next_document)?;
        info!(
            path = %next_document.path().display(),
            service = %service,
            fields = ?changed.iter().map(|r| r.field_name()).collect::<Vec<_>>(),
            "llm paths persisted"
        );

        self.document = next_document;
        self.derived.llm = next_paths;
        Ok(true)
    }
}


#[cfg(test)]
mod tests {
    use serde_yaml::Mapping;

    use super::testing::{FakeProbe, RecordingStore};
    use super::*;

    const LLM_FILES: [&str; 5] = [
        "/m/base.gguf",
        "/m/bge",
        "/m/rerank",
        "/m/state.pth",
        "/m/base-v2.gguf",
    ];

    fn document(yaml: &str) -> ConfigDocument {
        let services: Mapping = serde_yaml::from_str(yaml).unwrap();
        ConfigDocument::new("ragq.yml", services)
    }

    const LLM: &str = "llm:\n  service_module: llm\n  base_model_path: /m/base.gguf\n  \
        embedding_path: /m/bge\n  reranker_path: /m/rerank\n  state_path: /m/state.pth\n";

    const INDEX: &str = "index:\n  service_module: index\n  chroma_path: /data/chroma\n  \
        chroma_host: localhost\n  chroma_port: 8000\n  sqlite_db_path: /data/db/index.sqlite\n";

    fn validated<'a>(
        yaml: &str,
        store: &'a RecordingStore,
        probe: &'a FakeProbe,
    ) -> ConfigValidator<'a> {
        let mut validator =
            ConfigValidator::new(document(yaml), RuleRegistry::builtin(), store, probe);
        validator.validate().unwrap();
        validator
    }

    #[test]
    fn new_validator_starts_with_empty_derived_state() {
        let store = RecordingStore::default();
        let probe = FakeProbe::default();
        let validator = ConfigValidator::new(document(LLM), RuleRegistry::builtin(), &store, &probe);
        assert!(validator.llm_paths().is_empty());
        assert_eq!(validator.derived().llm_service, None);
    }

    #[test]
    fn validate_caches_llm_paths_and_fills_index_default() {
        let store = RecordingStore::default();
        let probe = FakeProbe::with(LLM_FILES).union(["/data/chroma", "/data/db"]);
        let yaml = format!("{LLM}{INDEX}");
        let validator = validated(&yaml, &store, &probe);

        assert_eq!(validator.llm_paths().base_model_path, "/m/base.gguf");
        assert_eq!(validator.llm_paths().state_path, "/m/state.pth");
        assert_eq!(validator.derived().llm_service.as_deref(), Some("llm"));
        assert_eq!(
            validator.document().service("index").unwrap().get("enabled"),
            Some(&Value::Bool(true))
        );
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn non_mapping_entry_aborts_before_later_services_run() {
        let store = RecordingStore::default();
        let probe = FakeProbe::with(["/data/chroma", "/data/db"]);
        let yaml = format!("broken: just-a-string\n{INDEX}");
        let mut validator =
            ConfigValidator::new(document(&yaml), RuleRegistry::builtin(), &store, &probe);

        let err = validator.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidServiceConfig { ref service } if service == "broken"
        ));
        assert_eq!(validator.document().service("index").unwrap().get("enabled"), None);
    }

    #[test]
    fn failure_leaves_earlier_corrections_unapplied() {
        let store = RecordingStore::default();
        let probe = FakeProbe::with(["/data/chroma", "/data/db"]);
        let yaml = format!("{INDEX}other:\n  chroma_host: x\n");
        let mut validator =
            ConfigValidator::new(document(&yaml), RuleRegistry::builtin(), &store, &probe);

        let err = validator.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField { ref service, ref field }
                if service == "other" && field == "service_module"
        ));
        assert_eq!(validator.document().service("index").unwrap().get("enabled"), None);
    }

    #[test]
    fn empty_service_module_is_missing_even_with_valid_fields() {
        let store = RecordingStore::default();
        let probe = FakeProbe::with(LLM_FILES);
        let yaml = LLM.replace("service_module: llm", "service_module: ''");
        let mut validator =
            ConfigValidator::new(document(&yaml), RuleRegistry::builtin(), &store, &probe);
        assert!(matches!(
            validator.validate(),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn unknown_module_passes_without_checks() {
        let store = RecordingStore::default();
        let probe = FakeProbe::default();
        let validator = validated(
            "search:\n  service_module: web_search\n  anything: goes\n",
            &store,
            &probe,
        );
        assert!(validator.llm_paths().is_empty());
    }

    #[test]
    fn non_string_module_names_are_treated_as_unknown() {
        let store = RecordingStore::default();
        let probe = FakeProbe::default();
        for yaml in [
            "search:\n  service_module: 42\n",
            "search:\n  service_module: true\n",
            "search:\n  service_module: [a, b]\n",
        ] {
            let mut validator =
                ConfigValidator::new(document(yaml), RuleRegistry::builtin(), &store, &probe);
            assert!(validator.validate().is_ok(), "rejected {yaml:?}");
            assert!(validator.llm_paths().is_empty());
        }
    }

    #[test]
    fn non_string_service_key_is_invalid() {
        let store = RecordingStore::default();
        let probe = FakeProbe::default();
        let mut validator = ConfigValidator::new(
            document("42:\n  service_module: x\n"),
            RuleRegistry::builtin(),
            &store,
            &probe,
        );
        assert!(matches!(
            validator.validate(),
            Err(ConfigError::InvalidServiceConfig { ref service }) if service == "42"
        ));
    }

    #[test]
    fn set_llm_writes_once_for_repeated_identical_calls() {
        let store = RecordingStore::default();
        let probe = FakeProbe::with(LLM_FILES);
        let mut validator = validated(LLM, &store, &probe);

        let update = LlmPathUpdate {
            base_model_path: Some("/m/base-v2.gguf".into()),
            ..Default::default()
        };
        assert!(validator.set_llm_service_config(&update).unwrap());
        assert!(!validator.set_llm_service_config(&update).unwrap());
        assert_eq!(store.write_count(), 1);

        let written = store.written.lock().unwrap();
        assert_eq!(
            written[0].service("llm").unwrap().get("base_model_path"),
            Some(&Value::from("/m/base-v2.gguf"))
        );
        assert_eq!(validator.llm_paths().base_model_path, "/m/base-v2.gguf");
    }

    #[test]
    fn set_llm_with_current_values_is_a_no_op() {
        let store = RecordingStore::default();
        let probe = FakeProbe::with(LLM_FILES);
        let mut validator = validated(LLM, &store, &probe);

        let update = LlmPathUpdate {
            base_model_path: Some("/m/base.gguf".into()),
            embedding_path: Some(String::new()),
            reranker_path: None,
            state_path: Some("/m/state.pth".into()),
        };
        assert!(!validator.set_llm_service_config(&update).unwrap());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn reranker_change_alone_triggers_persist() {
        let store = RecordingStore::default();
        let probe = FakeProbe::with(LLM_FILES);
        let mut validator = validated(LLM, &store, &probe);

        let update = LlmPathUpdate {
            reranker_path: Some("/m/rerank-v2".into()),
            ..Default::default()
        };
        assert!(validator.set_llm_service_config(&update).unwrap());
        assert_eq!(store.write_count(), 1);
        assert_eq!(validator.llm_paths().reranker_path, "/m/rerank-v2");
    }

    #[test]
    fn failed_persist_keeps_previous_state() {
        let store = RecordingStore::failing();
        let probe = FakeProbe::with(LLM_FILES);
        let mut validator = validated(LLM, &store, &probe);
        let before = validator.document().clone();

        let update = LlmPathUpdate {
            state_path: Some("/m/state-v2.pth".into()),
            ..Default::default()
        };
        let err = validator.set_llm_service_config(&update).unwrap_err();
        assert!(matches!(err, ConfigError::PersistError { .. }));
        assert_eq!(validator.llm_paths().state_path, "/m/state.pth");
        assert_eq!(validator.document(), &before);
    }

    #[test]
    fn set_llm_targets_the_service_that_declared_the_llm_module() {
        let store = RecordingStore::default();
        let probe = FakeProbe::with(LLM_FILES);
        let yaml = LLM.replacen("llm:", "generator:", 1);
        let mut validator = validated(&yaml, &store, &probe);
        assert_eq!(validator.derived().llm_service.as_deref(), Some("generator"));

        let update = LlmPathUpdate {
            embedding_path: Some("/m/bge-v2".into()),
            ..Default::default()
        };
        assert!(validator.set_llm_service_config(&update).unwrap());
        assert_eq!(
            validator.document().service("generator").unwrap().get("embedding_path"),
            Some(&Value::from("/m/bge-v2"))
        );
    }

    #[test]
    fn set_llm_without_llm_service_reports_it() {
        let store = RecordingStore::default();
        let probe = FakeProbe::default();
        let mut validator = validated("search:\n  service_module: web\n", &store, &probe);

        let update = LlmPathUpdate {
            base_model_path: Some("/m/x".into()),
            ..Default::default()
        };
        assert!(matches!(
            validator.set_llm_service_config(&update),
            Err(ConfigError::ServiceNotFound { ref service }) if service == "llm"
        ));
        assert_eq!(store.write_count(), 0);
        assert!(validator.llm_paths().is_empty());
    }
}
