//! seedkiln: write the embedded fixture out as SQL insert statements
//!
//! Usage:
//!   # Writes ./insert_dummy_data.sql
//!   seedkiln
//!
//!   # Same, with per-table counts on stderr
//!   seedkiln -v

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::{ArgAction, Parser};
use seedkiln::{run, EmitConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seedkiln", version)]
#[command(about = "Write the embedded seed fixture as SQL INSERT statements", long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("seedkiln={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = EmitConfig::default();
    let summary = run(&config)?;
    summary.log();

    println!(
        "SQL insert statements written to {}",
        config.output_file.display()
    );

    Ok(())
}
