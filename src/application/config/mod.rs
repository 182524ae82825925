//! 애플리케이션이 사용하는 설정 문서(순수 데이터).
//!
//! 주의: 파일 읽기/쓰기는 `infrastructure`의 `DocumentStore` 구현에서만 수행한다.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

/// 프로세스가 별도 경로를 받지 못했을 때 쓰는 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "ragq.yml";

/// 서비스 이름 → 설정 매핑으로 구성된 설정 문서.
/// 나중에 되쓰기할 원본 경로를 함께 소유한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    path: PathBuf,
    services: Mapping,
}

impl ConfigDocument {
    pub fn new(path: impl Into<PathBuf>, services: Mapping) -> Self {
        Self {
            path: path.into(),
            services,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 최상위 매핑(문서 순서 유지).
    pub fn services(&self) -> &Mapping {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// 서비스 설정 매핑을 조회한다. 매핑이 아니면 `None`.
    pub fn service(&self, name: &str) -> Option<&Mapping> {
        self.services.get(name).and_then(Value::as_mapping)
    }

    pub fn service_mut(&mut self, name: &str) -> Option<&mut Mapping> {
        self.services.get_mut(name).and_then(Value::as_mapping_mut)
    }

    /// 서비스 설정의 단일 필드를 덮어쓴다. 서비스가 없으면 `false`.
    pub fn set_field(&mut self, service: &str, field: &str, value: Value) -> bool {
        match self.service_mut(service) {
            Some(settings) => {
                settings.insert(Value::from(field), value);
                true
            }
            None => false,
        }
    }
}
