use batch_lemmatizer::cli::{prompt_profile, Cli};
use batch_lemmatizer::{run_batch, LemmatizerError};
use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // LEMMATIZER_LOG wins over RUST_LOG, which wins over -v
    let filter = std::env::var("LEMMATIZER_LOG")
        .ok()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = e
            .downcast_ref::<LemmatizerError>()
            .map(LemmatizerError::exit_code)
            .unwrap_or(1);
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve(prompt_profile)?;
    let report = run_batch(&config)?;

    if let Some(path) = &cli.report {
        report.write_json(path)?;
    }

    println!(
        "{} Check the output directory for processed files.",
        "Processing complete.".green().bold()
    );
    println!(
        "  {} files, {} paragraphs, {} tokens written ({}, {} thread{}) in {} ms",
        report.files.len(),
        report.total_paragraphs(),
        report.total_tokens_written(),
        config.profile,
        report.threads,
        if report.threads == 1 { "" } else { "s" },
        report.elapsed_ms
    );
    Ok(())
}
