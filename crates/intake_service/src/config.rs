//! Intake configuration

use serde::Deserialize;
use std::path::PathBuf;

use domain_intake::{AnalysisOptions, DirectorySchemaRegistry, NoSchemas, SchemaRegistry};

/// Intake configuration
///
/// Every field has a default, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Root of the schema directory, laid out as `<insurance_type>/<document_type>.schema.json`
    pub schema_dir: Option<PathBuf>,
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Characters of extracted text kept in the analysis preview
    pub preview_chars: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            schema_dir: None,
            log_level: "info".to_string(),
            log_json: false,
            preview_chars: domain_intake::analysis::DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl IntakeConfig {
    /// Loads configuration from `INTAKE_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("INTAKE"))
            .build()?
            .try_deserialize()
    }

    /// The registry configured by `schema_dir`, or one with no schemas
    pub fn schema_registry(&self) -> Box<dyn SchemaRegistry> {
        match &self.schema_dir {
            Some(dir) => Box::new(DirectorySchemaRegistry::new(dir)),
            None => Box::new(NoSchemas),
        }
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            preview_chars: self.preview_chars,
        }
    }
}
