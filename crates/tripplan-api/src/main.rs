//! Trip plan payload builder entry point.
//!
//! Binary name: `tripplan`
//!
//! Parses CLI arguments, resolves configuration and the sample template,
//! then dispatches to the appropriate command handler. Payloads go to
//! stdout as JSON; logs go to stderr.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        init_tracing(&cli, None);
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "tripplan", &mut std::io::stdout());
        return Ok(());
    }

    let data_dir = tripplan_infra::config::resolve_data_dir();
    let config = tripplan_infra::config::load_global_config(&data_dir).await;
    init_tracing(&cli, config.log_filter.as_deref());

    let state = AppState::init(data_dir, &config, cli.template.as_deref()).await?;

    match cli.command {
        Commands::Build(args) => {
            cli::build::build(&state, args).await?;
        }

        Commands::Purpose { objective } => {
            cli::purpose::purpose(objective.as_deref(), cli.json)?;
        }

        Commands::Template => {
            cli::template::show_template(&state, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Set up tracing on stderr.
fn init_tracing(cli: &Cli, configured: Option<&str>) {
    let filter = EnvFilter::new(log_filter(cli.verbose, cli.quiet, configured));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the filter directive. `--quiet` wins over `-v`; the configured
/// filter applies only when neither flag is given.
fn log_filter(verbose: u8, quiet: bool, configured: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match (verbose, configured) {
        (0, Some(directive)) => directive.to_string(),
        (0, None) => "warn".to_string(),
        (1, _) => "info,tripplan=debug,tripplan_core=debug,tripplan_infra=debug".to_string(),
        _ => "trace".to_string(),
    }
}
