//! Template assembler entry point.
//!
//! # Usage
//!
//! ```bash
//! # Assemble the development shell
//! vestibule-assemble
//!
//! # Assemble the production shell
//! vestibule-assemble production --root deploy/
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vestibule_assemble::{Variant, assemble};

/// Vestibule shell assembler
#[derive(Parser, Debug)]
#[command(name = "vestibule-assemble")]
#[command(about = "Assembles the deployable welcome shell from templated configuration")]
#[command(version)]
struct Args {
    /// Build variant (`prod`/`production` selects the production base
    /// document; anything else selects development)
    variant: Option<String>,

    /// Directory containing the base documents and configuration blobs
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let variant = Variant::from_arg(args.variant.as_deref());
    match variant {
        Variant::Production => tracing::info!("Building index.html for production"),
        Variant::Development => tracing::info!("Building index.html for development"),
    }

    let output = assemble(&args.root, variant)?;
    tracing::info!("Done: {}", output.display());

    Ok(())
}
