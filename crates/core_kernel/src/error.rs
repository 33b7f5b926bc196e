//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown insurance type: {0}")]
    UnknownInsuranceType(String),

    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("Document type {document_type} is not valid for {insurance_type} insurance")]
    DocumentTypeMismatch {
        insurance_type: String,
        document_type: String,
    },
}

impl CoreError {
    pub fn mismatch(insurance_type: impl Into<String>, document_type: impl Into<String>) -> Self {
        CoreError::DocumentTypeMismatch {
            insurance_type: insurance_type.into(),
            document_type: document_type.into(),
        }
    }
}
