//! 애플리케이션 조립(composition root) 모듈.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::usecases::check_config::CheckConfigUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::set_llm_paths::SetLlmPathsUseCase;
use crate::application::validator::ConfigValidator;
use crate::infrastructure::adapters::{ConsoleReporter, FsPathProbe, YamlConfigRepository};
use crate::infrastructure::config::{ResolvedConfigPath, resolve_config_path};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
/// 프로세스 시작 시 한 번 만들고, 검증기는 이 컨테이너의 어댑터를 빌려 쓴다.
pub struct AppComposition {
    config_repo: YamlConfigRepository,
    path_probe: FsPathProbe,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: YamlConfigRepository,
            path_probe: FsPathProbe,
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    /// 사용할 설정 파일 경로를 결정한다.
    pub fn resolve_config_path(&self, explicit: Option<&Path>) -> ResolvedConfigPath {
        resolve_config_path(explicit)
    }

    /// 설정 파일을 읽고 전체 검증까지 마친 검증기를 만든다.
    pub fn load_validator(&self, resolved: &ResolvedConfigPath) -> Result<ConfigValidator<'_>> {
        ConfigValidator::load(&resolved.path, &self.config_repo, &self.path_probe)
            .with_context(|| format!("config {} rejected", resolved.path.display()))
    }

    /// 설정 검사 유스케이스를 생성한다.
    pub fn check_config_usecase<'a>(
        &'a self,
        validator: &'a ConfigValidator<'a>,
    ) -> CheckConfigUseCase<'a> {
        CheckConfigUseCase {
            validator,
            reporter: &self.reporter,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase<'a>(
        &'a self,
        resolved: &'a ResolvedConfigPath,
        validator: &'a ConfigValidator<'a>,
    ) -> InspectConfigUseCase<'a> {
        InspectConfigUseCase {
            resolved,
            validator,
        }
    }

    /// LLM 경로 갱신 유스케이스를 생성한다.
    pub fn set_llm_paths_usecase<'v, 'a>(
        &'v self,
        validator: &'v mut ConfigValidator<'a>,
    ) -> SetLlmPathsUseCase<'v, 'a> {
        SetLlmPathsUseCase {
            validator,
            reporter: &self.reporter,
        }
    }
}
