use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_LOG_PATH: &str = "sampleApacheLog2.log";

#[derive(Debug, Parser)]
#[command(
    name = "access-log-generator",
    version,
    about = "Appends random Apache-style access log lines to a file until interrupted"
)]
pub struct Config {
    /// File the records are appended to
    #[arg(value_name = "LOG_PATH", default_value = DEFAULT_LOG_PATH)]
    pub log_path: PathBuf,

    /// Seed for the random source, to reproduce a run
    #[arg(long)]
    pub seed: Option<u64>,
}
