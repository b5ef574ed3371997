use std::{io::Write, path::PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use log_analyzer::{Report, count_recent_http_codes};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the Http-*.log files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Size of the trailing window, in minutes
    #[arg(long, default_value_t = 10)]
    minutes: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let now = Utc::now();

    let mut stdout = std::io::stdout().lock();
    if let OutputFormat::Text = args.format {
        writeln!(
            stdout,
            "\nAnalyzing last {} minutes of HTTP traffic...",
            args.minutes
        )?;
    }

    let counters = count_recent_http_codes(&args.dir, args.minutes, now)?;
    let report = Report::new(&counters);

    match args.format {
        OutputFormat::Text => report.write_text(&mut stdout)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
