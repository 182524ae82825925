//! `ragq-config` 바이너리 진입점.

use ragq_config::interface::cli::{AppComposition, Cli, CliAction};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let invocation = match Cli::parse_action() {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    // 프로세스당 한 번 조립하고 검증기를 만든다.
    let composition = AppComposition::default();
    let resolved = composition.resolve_config_path(invocation.config.as_deref());
    let mut validator = match composition.load_validator(&resolved) {
        Ok(validator) => validator,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    let result = match invocation.action {
        CliAction::Check => composition
            .check_config_usecase(&validator)
            .execute()
            .map(|_| ()),
        CliAction::Inspect => composition
            .inspect_config_usecase(&resolved, &validator)
            .execute()
            .map(|json| println!("{json}")),
        CliAction::SetLlm(update) => composition
            .set_llm_paths_usecase(&mut validator)
            .execute(&update)
            .map(|_| ()),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
