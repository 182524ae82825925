//! 파일시스템 존재 검사 포트 구현 어댑터.

use std::path::Path;

use crate::application::ports::PathProbe;

/// 실제 파일시스템을 조회한다. 상대 경로는 현재 작업 디렉터리 기준이다.
pub struct FsPathProbe;

impl PathProbe for FsPathProbe {
    fn exists(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && path.exists()
    }
}
