use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use termfolio_cli::{Cli, Session};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::new(&cli, io::stdout().lock());

    let outcome = match cli.command.as_deref() {
        Some(line) => session.run_once(line),
        None => session.run(io::stdin().lock()),
    };

    match outcome {
        Ok(exit) => {
            tracing::debug!(?exit, "session ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("termfolio-cli: {}", e);
            ExitCode::FAILURE
        }
    }
}
