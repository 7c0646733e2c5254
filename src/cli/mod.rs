pub mod types;
pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use crate::config::ConfigOverrides;
use crate::utils::error::BoxResult;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    let quiet = matches!(cli.command, Some(types::Commands::Build { quiet: true }));
    let level = if cli.debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };
    logging::init_logging(level);
    logging::configure_backtrace(cli.trace);

    let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let overrides = ConfigOverrides {
        docs_dir: cli.docs_dir.clone(),
        base_url: cli.base_url.clone(),
    };

    let result = match &cli.command {
        Some(types::Commands::Clean {}) => commands::handle_clean_command(&root, overrides),
        // Build is the default command
        Some(types::Commands::Build { .. }) | None => commands::handle_build_command(&root, overrides),
    };

    exit_code(result)
}

/// Map a command result to the process exit status, logging any error
pub fn exit_code(result: BoxResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
