use std::io;
use std::process::ExitCode;

use access_log_generator::config::Config;
use access_log_generator::error::{self, Error};
use access_log_generator::writer::{self, Writer};
use clap::Parser;
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries records only, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_tty())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    match generate(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            // stderr is the last resort, nothing left to do if it fails
            let _ = error::report(&mut io::stderr(), &err);
            ExitCode::FAILURE
        }
    }
}

fn generate(config: &Config) -> Result<(), Error> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let writer = Writer::open(&config.log_path)?;
    info!(
        log_path = %config.log_path.display(),
        seed = ?config.seed,
        "writing access log records, press Ctrl+C to stop"
    );

    writer::run(writer, &mut rng)
}
