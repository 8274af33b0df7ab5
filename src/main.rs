//! force-semicolon CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use force_semicolon::cli::Commands;
use force_semicolon::commands::{
    run_actions, run_analyze_all, run_check, run_fix, run_ignore, run_watch, CommandContext,
};
use force_semicolon::{Cli, LintConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> force_semicolon::Result<String> {
    let ctx = CommandContext::from_cli(cli.format, cli.verbose, cli.config.clone(), cli.debug);

    match &cli.command {
        Commands::Check(args) => run_check(args, &ctx),
        Commands::AnalyzeAll(args) => run_analyze_all(args, &ctx),
        Commands::Fix(args) => run_fix(args, &ctx),
        Commands::Actions(args) => run_actions(args, &ctx),
        Commands::Ignore(args) => run_ignore(args, &ctx),
        Commands::Watch(args) => run_watch(args, &ctx),
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise `--verbose`, `--debug` or
/// `debug = true` in the workspace config raise the level to debug.
fn init_tracing(cli: &Cli) {
    let debug = cli.verbose || cli.debug || config_requests_debug(cli);
    let default_level = if debug {
        "force_semicolon=debug"
    } else {
        "force_semicolon=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn config_requests_debug(cli: &Cli) -> bool {
    let Ok(cwd) = std::env::current_dir() else {
        return false;
    };
    LintConfig::discover(cli.config.as_deref(), &cwd)
        .map(|config| config.debug)
        .unwrap_or(false)
}
