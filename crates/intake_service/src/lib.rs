//! Claim Intake Service
//!
//! The orchestration shell around the intake and routing domains. It is what
//! an upload handler or an administrative endpoint calls.
//!
//! # Flows
//!
//! ```text
//! submission: documents -> analyze each -> score (fallback on failure)
//!             -> resolve claim number -> route
//! admin:      rule definitions -> replace rules -> reroute stored claims
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let service = ClaimIntakeService::from_config(&config, engine, Arc::new(scoring));
//! let processed = service.process_claim(submission).await;
//! println!("{}", processed.claim.decision.team);
//! ```

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use domain_intake::{
    analyze_document, AnalysisOptions, DocumentAnalysis, ExtractionChain, NoSchemas,
    SchemaRegistry,
};
use domain_routing::{load_rules_from_file, ClaimSignals, RoutedClaim, RoutingEngine, RuleDefinition};

pub use crate::config::IntakeConfig;
pub use crate::error::IntakeError;
pub use crate::scoring::{DefaultScoring, ScoringPort};

/// Claim number used when neither the submitter nor any document supplies one
pub const UNKNOWN_CLAIM_NUMBER: &str = "unknown";

/// One uploaded file
#[derive(Debug, Clone)]
pub struct SubmittedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SubmittedDocument {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a document from disk, keeping only its file name
    pub fn read(path: &Path) -> Result<Self, IntakeError> {
        let bytes = std::fs::read(path).map_err(|source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { file_name, bytes })
    }
}

/// A claim as submitted: an optional claim number and its documents
#[derive(Debug, Clone, Default)]
pub struct ClaimSubmission {
    pub claim_number: Option<String>,
    pub documents: Vec<SubmittedDocument>,
}

/// Result of processing a submission
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedClaim {
    pub claim: RoutedClaim,
    pub documents: Vec<DocumentAnalysis>,
    /// True when the scoring service failed and default scores were used
    pub scoring_fallback: bool,
}

/// Result of replacing the rule set
#[derive(Debug, Clone, Serialize)]
pub struct RulesApplied {
    pub version: u64,
    pub claims: Vec<RoutedClaim>,
}

/// Picks the claim-level identifier.
///
/// The submitted claim number wins unless it is blank; otherwise the first
/// `claim_id` extracted from any document; otherwise `"unknown"`.
pub fn resolve_claim_number(submitted: Option<&str>, documents: &[DocumentAnalysis]) -> String {
    submitted
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .or_else(|| documents.iter().find_map(DocumentAnalysis::claim_id))
        .unwrap_or(UNKNOWN_CLAIM_NUMBER)
        .to_string()
}

/// Upload and administrative flows over a shared routing engine
pub struct ClaimIntakeService {
    extraction: ExtractionChain,
    registry: Box<dyn SchemaRegistry>,
    options: AnalysisOptions,
    scoring: Arc<dyn ScoringPort>,
    engine: Arc<RoutingEngine>,
}

impl ClaimIntakeService {
    /// Creates a service with the default extraction chain and no schemas
    pub fn new(engine: Arc<RoutingEngine>, scoring: Arc<dyn ScoringPort>) -> Self {
        Self {
            extraction: ExtractionChain::default(),
            registry: Box::new(NoSchemas),
            options: AnalysisOptions::default(),
            scoring,
            engine,
        }
    }

    pub fn from_config(
        config: &IntakeConfig,
        engine: Arc<RoutingEngine>,
        scoring: Arc<dyn ScoringPort>,
    ) -> Self {
        Self::new(engine, scoring)
            .with_registry(config.schema_registry())
            .with_options(config.analysis_options())
    }

    pub fn with_registry(mut self, registry: Box<dyn SchemaRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_extraction_chain(mut self, extraction: ExtractionChain) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn engine(&self) -> &Arc<RoutingEngine> {
        &self.engine
    }

    /// Extracts the text of one document and analyses it
    pub fn analyze(&self, document: &SubmittedDocument) -> DocumentAnalysis {
        let text = self.extraction.extract(&document.file_name, &document.bytes);
        analyze_document(&text, self.registry.as_ref(), &self.options)
    }

    /// Runs the upload flow for one claim. Never fails.
    pub async fn process_claim(&self, submission: ClaimSubmission) -> ProcessedClaim {
        let documents: Vec<DocumentAnalysis> =
            submission.documents.iter().map(|d| self.analyze(d)).collect();

        let claim_number = resolve_claim_number(submission.claim_number.as_deref(), &documents);

        let (signals, scoring_fallback) = match self.scoring.score(&claim_number, &documents).await {
            Ok(signals) => (signals, false),
            Err(error) => {
                tracing::warn!(
                    claim_number = %claim_number,
                    %error,
                    transient = error.is_transient(),
                    "scoring failed, using default scores"
                );
                (ClaimSignals::default(), true)
            }
        };

        let claim = self.engine.route_claim(claim_number, signals);

        ProcessedClaim {
            claim,
            documents,
            scoring_fallback,
        }
    }

    /// Replaces the rule set, then reroutes the stored claims under it
    pub fn apply_rules(&self, definitions: Vec<RuleDefinition>, claims: &[RoutedClaim]) -> RulesApplied {
        let version = self.engine.replace_rules(definitions);

        let signals: Vec<ClaimSignals> = claims.iter().map(|c| c.signals.clone()).collect();
        let claims = self
            .engine
            .reroute_many(&signals)
            .into_iter()
            .zip(claims)
            .map(|(rerouted, stored)| rerouted.for_claim(stored.claim_number.clone()))
            .collect();

        RulesApplied { version, claims }
    }

    /// Loads a rules file and applies it
    pub fn apply_rules_file(&self, path: &Path, claims: &[RoutedClaim]) -> Result<RulesApplied, IntakeError> {
        let definitions = load_rules_from_file(path)?;
        Ok(self.apply_rules(definitions, claims))
    }
}
