// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so it never mixes with the report on stdout)
// 3. Find the manifests and print their paths
// 4. Check every link and print failures as they arrive
// 5. Exit with the proper code (0 = done, 1 = findings with --strict, 2 = error)
// =============================================================================

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use manifest_guardian::discover;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

// Returns:
//   Ok(0) = run completed (findings or not, unless --strict)
//   Ok(1) = something was reported and --strict is set
//   Err   = the run couldn't happen
async fn run(cli: Cli) -> Result<i32> {
    let discovery = cli.discovery();
    let manifests = discover::find_manifests(&discovery.root, &discovery.extensions)
        .with_context(|| format!("cannot scan {}", discovery.root.display()))?;

    let mut out = io::stdout();
    for path in &manifests {
        writeln!(out, "{}", path.display())?;
    }

    let summary = manifest_guardian::check(
        manifests,
        &cli.check_settings(),
        &mut out,
        cli.output_format(),
    )
    .await
    .context("link check failed")?;

    info!(
        broken_links = summary.broken_links,
        bad_manifests = summary.bad_manifests,
        "check finished"
    );

    if cli.strict && !summary.is_clean() {
        Ok(1)
    } else {
        Ok(0)
    }
}
