//! 설정 파일 경로 탐색.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::config::DEFAULT_CONFIG_FILE;

/// 설정 파일 경로를 지정하는 환경변수.
pub const CONFIG_ENV: &str = "RAGQ_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfigPath {
    pub path: PathBuf,
    pub searched_paths: Vec<PathBuf>,
}

/// 사용할 설정 파일 경로를 결정한다.
/// 명시 경로와 환경변수는 파일이 없어도 그대로 사용해 로딩 단계에서 `NotFound`가 나게 한다.
pub fn resolve_config_path(explicit: Option<&Path>) -> ResolvedConfigPath {
    resolve_with(explicit, env::var(CONFIG_ENV).ok(), dirs::config_dir(), |p| {
        p.exists()
    })
}

fn resolve_with(
    explicit: Option<&Path>,
    env_path: Option<String>,
    config_dir: Option<PathBuf>,
    exists: impl Fn(&Path) -> bool,
) -> ResolvedConfigPath {
    let env_path = env_path.filter(|v| !v.trim().is_empty());
    let searched_paths = candidate_paths(explicit, env_path.clone(), config_dir);

    let path = if let Some(path) = explicit {
        path.to_path_buf()
    } else if let Some(path) = env_path {
        PathBuf::from(path)
    } else {
        searched_paths
            .iter()
            .find(|p| exists(p.as_path()))
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    };

    debug!(path = %path.display(), "config path resolved");
    ResolvedConfigPath {
        path,
        searched_paths,
    }
}

/// 명시 경로 + 환경변수 + 프로젝트 로컬 + 사용자 + 시스템 순으로 후보를 구성한다.
fn candidate_paths(
    explicit: Option<&Path>,
    env_path: Option<String>,
    config_dir: Option<PathBuf>,
) -> Vec<PathBuf> {
    // 높은 우선순위 -> 낮은 우선순위 순서.
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }
    if let Some(path) = env_path.filter(|v| !v.trim().is_empty()) {
        paths.push(PathBuf::from(path));
    }

    paths.push(PathBuf::from(DEFAULT_CONFIG_FILE));
    if let Some(base) = config_dir {
        paths.push(base.join("ragq").join(DEFAULT_CONFIG_FILE));
    }
    paths.push(PathBuf::from("/etc/ragq").join(DEFAULT_CONFIG_FILE));

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
