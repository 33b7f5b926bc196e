//! Intake domain errors
//!
//! These never escape the pipeline operations: they are produced by the
//! collaborator seams (extraction backends, schema registries) and folded
//! into warnings or skipped validations by the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single text extraction backend
#[derive(Debug, Error)]
pub enum TextExtractionError {
    #[error("{method} could not decode the document: {message}")]
    Decode { method: String, message: String },

    #[error("{method} failed: {message}")]
    Backend { method: String, message: String },
}

/// Failure to read a schema from a registry
#[derive(Debug, Error)]
pub enum SchemaRegistryError {
    #[error("Failed to read schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema {path} is not valid JSON: {message}")]
    Parse { path: PathBuf, message: String },
}
