use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "log-generator")]
#[command(about = "Generate synthetic HTTP access log files", long_about = None)]
pub struct CliArgs {
    /// Number of Http-NN.log files to create
    #[arg(long, default_value_t = 10)]
    files: usize,

    /// Lines written to each file
    #[arg(long, default_value_t = 100)]
    entries: usize,

    /// Directory that owns the log files; existing Http-*.log files there are deleted
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}
