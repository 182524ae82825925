//! ragq-config library root.
//! 다중 서비스 설정 문서의 로딩/모듈별 검증/LLM 경로 갱신 계층을 외부에 노출한다.

use std::path::Path;

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::AppComposition;

/// 설정 파일을 검증하고 서비스별 요약을 출력한다. 검사한 서비스 수를 반환한다.
pub fn check_config(path: Option<&Path>) -> Result<usize> {
    let composition = AppComposition::default();
    let resolved = composition.resolve_config_path(path);
    let validator = composition.load_validator(&resolved)?;
    let checked = composition.check_config_usecase(&validator).execute()?;
    Ok(checked)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json(path: Option<&Path>) -> Result<String> {
    let composition = AppComposition::default();
    let resolved = composition.resolve_config_path(path);
    let validator = composition.load_validator(&resolved)?;
    let json = composition
        .inspect_config_usecase(&resolved, &validator)
        .execute()?;
    Ok(json)
}
