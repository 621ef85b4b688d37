// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There's a single command: point it at a directory and it checks every link
// in every manifest under it. Everything else is an optional flag.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - Option<T>: flags that are simply absent unless the user passes them
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tokio::sync::Semaphore;

use manifest_guardian::config::DEFAULT_ROOT;
use manifest_guardian::{CheckSettings, DiscoverySettings, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "manifest-guardian",
    version,
    about = "Scan a tree of YAML resource manifests for broken links",
    long_about = "manifest-guardian walks a directory, reads every YAML manifest it finds and \
                  sends one GET request per URL listed in them. Only failures are printed: \
                  anything that doesn't answer 200 OK, and manifests that can't be parsed."
)]
pub struct Cli {
    /// Directory to scan for manifests
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Manifest file extension to look for (repeatable)
    ///
    /// Defaults to yml and yaml.
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Give up on a request after this many seconds (default: never)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Cap on simultaneous HTTP requests (default: no cap)
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..=Semaphore::MAX_PERMITS as u64)
    )]
    pub max_concurrency: Option<u64>,

    /// Print findings as JSON lines instead of text
    #[arg(long)]
    pub json: bool,

    /// Exit with code 1 if anything was reported
    #[arg(long)]
    pub strict: bool,

    /// More diagnostics on stderr (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn discovery(&self) -> DiscoverySettings {
        let mut settings = DiscoverySettings {
            root: self.root.clone(),
            ..DiscoverySettings::default()
        };
        if !self.extensions.is_empty() {
            settings.extensions = self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }
        settings
    }

    pub fn check_settings(&self) -> CheckSettings {
        CheckSettings {
            request_timeout: self.timeout.map(Duration::from_secs),
            max_concurrency: self
                .max_concurrency
                .map(|n| usize::try_from(n).unwrap_or(Semaphore::MAX_PERMITS)),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::JsonLines
        } else {
            OutputFormat::Text
        }
    }

    // Default log filter when RUST_LOG isn't set
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
