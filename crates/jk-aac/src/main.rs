mod cli;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use output::output_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ansi = logging::init_color(cli.color);

    if let Err(e) = run(cli, ansi) {
        output_error(&e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli, ansi: bool) -> Result<()> {
    match &cli.command {
        Commands::Export(args) => {
            let mut config = Config::load(cli.config.clone())?;
            config.merge_with_cli(args);
            logging::init_tracing(config.verbose, ansi);
            commands::export::handle_export(&config)
        }
        Commands::Init { org, dir } => {
            logging::init_tracing(false, ansi);
            commands::init::handle_init(org, dir.as_deref())
        }
        Commands::Show { file } => {
            logging::init_tracing(false, ansi);
            commands::show::handle_show(file)
        }
        Commands::Completions { shell } => {
            Cli::generate_completions(*shell);
            Ok(())
        }
    }
}
