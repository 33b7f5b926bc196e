//! Document Intake Domain
//!
//! This crate turns the text of a submitted claim document into a structured
//! analysis record. It is a pure pipeline: no state is shared between calls.
//!
//! # Pipeline
//!
//! ```text
//! bytes -> ExtractionChain -> DocumentText
//!       -> classifier      -> (InsuranceType, DocumentType)
//!       -> extraction      -> EntitySet
//!       -> validation      -> ValidationResult
//!       => DocumentAnalysis
//! ```
//!
//! Nothing in the pipeline fails: unrecognised input yields `unknown`
//! classifications, an empty entity set, and a skipped validation.

pub mod analysis;
pub mod classifier;
pub mod entities;
pub mod error;
pub mod extraction;
pub mod text;
pub mod validation;

pub use analysis::{analyze_document, AnalysisOptions, DocumentAnalysis, TextSummary};
pub use classifier::{classify, classify_document_type, classify_insurance_type};
pub use entities::{EntitySet, FieldValue};
pub use error::{SchemaRegistryError, TextExtractionError};
pub use extraction::extract;
pub use text::{DocumentText, ExtractionChain, ExtractionMeta, PlainTextExtractor, TextExtractor};
pub use validation::{
    validate, DirectorySchemaRegistry, InMemorySchemaRegistry, NoSchemas, SchemaRegistry,
    ValidationResult,
};
