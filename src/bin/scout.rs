use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sitescout::{
    config::Config,
    scout::{Scout, ScoutJob},
    telemetry,
};

/// Scrape a client site and its competitors into one content pack.
#[derive(Debug, Parser)]
#[command(name = "scout", version)]
struct Args {
    /// Path to a job_input.json file.
    job_file: PathBuf,

    /// Override the output directory for the content pack.
    #[arg(long, env = "SCOUT_OUT_DIR")]
    out_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(out_dir) = args.out_dir {
        config = config.with_out_dir(out_dir);
    }
    telemetry::init_tracing(config.log_format());

    let raw = std::fs::read_to_string(&args.job_file)
        .with_context(|| format!("job input file not readable: {}", args.job_file.display()))?;
    let job: ScoutJob = serde_json::from_str(&raw)
        .with_context(|| format!("job input is not valid JSON: {}", args.job_file.display()))?;

    let scout = Scout::from_config(&config)?;
    let outcome = scout.run(job).await?;

    let batch = &outcome.pack.batch;
    println!("Job {} completed.", outcome.pack.job_id);
    println!(
        "Client: {} ({})",
        batch.primary.source_id,
        if batch.primary.fields.title.is_empty() {
            "-"
        } else {
            batch.primary.fields.title.as_str()
        }
    );
    println!(
        "Competitors: {} processed, {} failed",
        batch.secondary.len(),
        batch.failed_secondary()
    );
    println!("Content pack written to: {}", outcome.receipt.location);

    Ok(())
}
