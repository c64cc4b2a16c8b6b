//! routerwg binary entrypoint.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use routerwg_cli::cli::{Cli, Commands};
use routerwg_cli::commands::{GenerateCommand, KeygenCommand, ValidateCommand};
use routerwg_cli::output::OutputFormat;
use routerwg_cli::CliError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::Generate(args) => {
            let settings = cli.settings()?;
            let cmd = GenerateCommand::new(&settings)?;
            cmd.execute(&mut stdout, &format, args)?;
        }
        Commands::Validate(args) => {
            let settings = cli.settings()?;
            let cmd = ValidateCommand::new(&settings);
            cmd.execute(&mut stdout, &format, args)?;
        }
        Commands::Keygen => {
            let cmd = KeygenCommand::new();
            cmd.execute(&mut stdout, &format)?;
        }
    }

    Ok(())
}
