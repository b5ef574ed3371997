mod args;

use args::CliArgs;
use chrono::Utc;
use clap::Parser;
use log_generator::{log_file_name, purge_log_files, write_log_files};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let removed = purge_log_files(args.dir())?;
    info!(count = removed.len(), "purged existing log files");

    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    write_log_files(args.dir(), *args.files(), *args.entries(), &mut rng, Utc::now())?;

    println!(
        "Generated {} log files with {} entries each.",
        args.files(),
        args.entries()
    );
    let names: Vec<String> = (1..=*args.files()).map(log_file_name).collect();
    println!("Files created: {}", names.join(", "));
    Ok(())
}
