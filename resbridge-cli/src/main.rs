use std::process::ExitCode;

use clap::Parser;
use resbridge_cli::{Arguments, ExitStatus, FileConfig, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();

    // RUST_LOG wins over -v / -q
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = args.log_level();
        EnvFilter::new(format!("resbridge={level},resbridge_cli={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let file = FileConfig::discover(args.config.as_deref(), &cwd)?;
            Settings::resolve(&args, file, &cwd)
        }) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitStatus::Usage.into();
        }
    };

    match resbridge_cli::run(&settings) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Failure.into()
        }
    }
}
