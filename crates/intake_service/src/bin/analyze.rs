//! Claim Intake - Document Analysis Binary
//!
//! Classifies, extracts and validates the given documents and prints the
//! analysis records as a JSON array on stdout.
//!
//! # Usage
//!
//! ```bash
//! analyze-document bill.txt fir.txt
//!
//! # With schema validation and JSON logs
//! INTAKE_SCHEMA_DIR=./schemas INTAKE_LOG_JSON=true analyze-document bill.txt
//! ```
//!
//! # Environment Variables
//!
//! * `INTAKE_SCHEMA_DIR` - Schema directory root (default: none, validation skipped)
//! * `INTAKE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `INTAKE_LOG_JSON` - Emit logs as JSON (default: false)
//! * `INTAKE_PREVIEW_CHARS` - Text preview length (default: 500)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};

use domain_routing::RoutingEngine;
use intake_service::telemetry::init_tracing;
use intake_service::{ClaimIntakeService, DefaultScoring, IntakeConfig, SubmittedDocument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = IntakeConfig::from_env().context("invalid INTAKE_* configuration")?;
    init_tracing(&config.log_level, config.log_json)?;

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        bail!("usage: analyze-document <file>...");
    }

    let service = ClaimIntakeService::from_config(
        &config,
        Arc::new(RoutingEngine::new()),
        Arc::new(DefaultScoring),
    );

    let mut analyses = Vec::with_capacity(paths.len());
    for path in &paths {
        let document = SubmittedDocument::read(path)?;
        analyses.push(service.analyze(&document));
    }

    tracing::info!(documents = analyses.len(), "analysis complete");

    println!("{}", serde_json::to_string_pretty(&analyses)?);
    Ok(())
}
