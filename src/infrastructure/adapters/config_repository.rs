//! 설정 문서 저장소 포트 구현 어댑터.

use std::fs;
use std::path::Path;

use serde_yaml::Mapping;
use tracing::debug;

use crate::application::config::ConfigDocument;
use crate::application::ports::DocumentStore;
use crate::domain::ConfigError;

/// YAML 파일 기반 설정 저장소 어댑터.
pub struct YamlConfigRepository;

impl DocumentStore for YamlConfigRepository {
    fn load(&self, path: &Path) -> Result<ConfigDocument, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        // 빈 파일은 서비스가 없는 문서로 본다. 최상위가 매핑이 아니면 파싱 오류.
        let services: Option<Mapping> =
            serde_yaml::from_slice(&raw).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), bytes = raw.len(), "config document parsed");
        Ok(ConfigDocument::new(path, services.unwrap_or_default()))
    }

    fn persist(&self, document: &ConfigDocument) -> Result<(), ConfigError> {
        let path = document.path();
        let rendered =
            serde_yaml::to_string(document.services()).map_err(|err| ConfigError::PersistError {
                path: path.to_path_buf(),
                source: Box::new(err),
            })?;

        // 임시 파일/rename 없이 전체를 덮어쓴다.
        fs::write(path, rendered).map_err(|err| ConfigError::PersistError {
            path: path.to_path_buf(),
            source: Box::new(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_yaml::Value;

    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = YamlConfigRepository
            .load(&dir.path().join("ragq.yml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn non_mapping_root_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragq.yml");
        fs::write(&path, "- a\n- b\n").unwrap();
        assert!(matches!(
            YamlConfigRepository.load(&path),
            Err(ConfigError::ParseError { .. })
        ));

        fs::write(&path, "llm: [unclosed\n").unwrap();
        assert!(matches!(
            YamlConfigRepository.load(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn persist_overwrites_whole_document_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragq.yml");
        fs::write(
            &path,
            "llm:\n  service_module: llm\nindex:\n  service_module: index\n",
        )
        .unwrap();

        let mut document = YamlConfigRepository.load(&path).unwrap();
        assert!(document.set_field("index", "enabled", Value::Bool(true)));
        YamlConfigRepository.persist(&document).unwrap();

        let reloaded = YamlConfigRepository.load(&path).unwrap();
        assert_eq!(reloaded, document);
        let names: Vec<&str> = reloaded
            .services()
            .iter()
            .filter_map(|(key, _)| key.as_str())
            .collect();
        assert_eq!(names, vec!["llm", "index"]);
    }

    #[test]
    fn persist_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let document = ConfigDocument::new(dir.path().join("nope/ragq.yml"), Mapping::new());
        assert!(matches!(
            YamlConfigRepository.persist(&document),
            Err(ConfigError::PersistError { .. })
        ));
    }
}
