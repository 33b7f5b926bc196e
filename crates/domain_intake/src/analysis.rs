//! Per-document analysis records

use serde::{Deserialize, Serialize};

use core_kernel::{DocumentId, DocumentType, InsuranceType};

use crate::classifier::classify;
use crate::entities::EntitySet;
use crate::extraction::extract;
use crate::text::{DocumentText, ExtractionMeta};
use crate::validation::{validate, SchemaRegistry, ValidationResult};

/// Default number of characters kept in [`TextSummary::preview`]
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub preview_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Size and leading excerpt of the extracted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSummary {
    pub chars: usize,
    pub preview: String,
}

impl TextSummary {
    pub fn of(text: &str, preview_chars: usize) -> Self {
        Self {
            chars: text.chars().count(),
            preview: text.chars().take(preview_chars).collect(),
        }
    }
}

/// Everything learned about one uploaded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub id: DocumentId,
    pub insurance_type: InsuranceType,
    pub document_type: DocumentType,
    #[serde(rename = "extraction")]
    pub entities: EntitySet,
    pub validation: ValidationResult,
    pub text_summary: TextSummary,
    pub meta: ExtractionMeta,
}

impl DocumentAnalysis {
    /// The claim identifier printed on the document, if one was extracted
    pub fn claim_id(&self) -> Option<&str> {
        self.entities.text("claim_id")
    }
}

/// Classifies, extracts and validates one document.
pub fn analyze_document(
    document: &DocumentText,
    registry: &dyn SchemaRegistry,
    options: &AnalysisOptions,
) -> DocumentAnalysis {
    let (insurance_type, document_type) = classify(&document.text);
    let entities = extract(&document.text, insurance_type, document_type);
    let validation = validate(&entities, insurance_type, document_type, registry);

    let analysis = DocumentAnalysis {
        id: DocumentId::new_v7(),
        insurance_type,
        document_type,
        entities,
        validation,
        text_summary: TextSummary::of(&document.text, options.preview_chars),
        meta: document.meta.clone(),
    };

    tracing::info!(
        document_id = %analysis.id,
        insurance_type = %insurance_type,
        document_type = %document_type,
        fields = analysis.entities.len(),
        method = %analysis.meta.method,
        "document analysed"
    );

    analysis
}
