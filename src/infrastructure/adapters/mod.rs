//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod path_probe;
mod reporter;

pub use config_repository::YamlConfigRepository;
pub use path_probe::FsPathProbe;
pub use reporter::ConsoleReporter;
