//! CLI 명령 파싱 모듈.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::LlmPathUpdate;

#[derive(Debug, Parser)]
#[command(name = "ragq-config")]
#[command(about = "Validate and update the ragq service configuration")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path (defaults to $RAGQ_CONFIG, then ./ragq.yml)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate every service and print a summary (default)
    Check,
    /// Print resolved paths, services and cached llm paths as JSON
    Inspect,
    /// Update llm service paths and write the config back when anything changed
    SetLlm(SetLlmArgs),
}

#[derive(Debug, Args)]
struct SetLlmArgs {
    #[arg(long)]
    base_model_path: Option<String>,
    #[arg(long)]
    embedding_path: Option<String>,
    #[arg(long)]
    reranker_path: Option<String>,
    #[arg(long)]
    state_path: Option<String>,
}

#[derive(Debug)]
pub enum CliAction {
    Check,
    Inspect,
    SetLlm(LlmPathUpdate),
}

#[derive(Debug)]
pub struct CliInvocation {
    pub config: Option<PathBuf>,
    pub action: CliAction,
}

impl Cli {
    pub fn parse_action() -> Result<CliInvocation, String> {
        Cli::parse().into_invocation()
    }

    pub fn parse_action_from<I, T>(args: I) -> Result<CliInvocation, String>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args)
            .map_err(|err| err.to_string())?
            .into_invocation()
    }

    fn into_invocation(self) -> Result<CliInvocation, String> {
        let action = match self.command {
            None | Some(Commands::Check) => CliAction::Check,
            Some(Commands::Inspect) => CliAction::Inspect,
            Some(Commands::SetLlm(args)) => {
                let update = LlmPathUpdate {
                    base_model_path: args.base_model_path,
                    embedding_path: args.embedding_path,
                    reranker_path: args.reranker_path,
                    state_path: args.state_path,
                };
                if update.is_empty() {
                    return Err("set-llm requires at least one non-empty path".to_string());
                }
                CliAction::SetLlm(update)
            }
        };

        Ok(CliInvocation {
            config: self.config,
            action,
        })
    }
}
