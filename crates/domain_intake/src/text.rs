//! Text extraction from uploaded document bytes
//!
//! Backends implement [`TextExtractor`]. An [`ExtractionChain`] tries each
//! backend that claims the file in order, records every failure as a warning,
//! and falls back to decoding the bytes as UTF-8 when nothing succeeds.

use serde::{Deserialize, Serialize};

use crate::error::TextExtractionError;

/// Method name reported when the raw-bytes fallback produced the text
pub const RAW_TEXT_METHOD: &str = "raw-text";

/// How the text of a document was obtained
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMeta {
    pub method: String,
    pub warnings: Vec<String>,
}

/// The text of one document plus extraction metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentText {
    pub text: String,
    pub meta: ExtractionMeta,
}

impl DocumentText {
    /// Wraps text that was supplied directly rather than extracted
    pub fn from_text(text: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meta: ExtractionMeta {
                method: method.into(),
                warnings: Vec::new(),
            },
        }
    }
}

/// A text extraction backend
pub trait TextExtractor: Send + Sync {
    /// Short name recorded in [`ExtractionMeta::method`]
    fn method(&self) -> &'static str;

    /// Whether this backend should be tried for the given file name
    fn supports(&self, file_name: &str) -> bool;

    fn extract(&self, bytes: &[u8]) -> Result<String, TextExtractionError>;
}

/// Reads plain-text formats as strict UTF-8
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    const EXTENSIONS: [&'static str; 4] = ["txt", "text", "csv", "md"];
}

impl TextExtractor for PlainTextExtractor {
    fn method(&self) -> &'static str {
        "plain-text"
    }

    fn supports(&self, file_name: &str) -> bool {
        std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                Self::EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, TextExtractionError> {
        String::from_utf8(bytes.to_vec()).map_err(|e| TextExtractionError::Decode {
            method: self.method().to_string(),
            message: e.to_string(),
        })
    }
}

/// Ordered list of extraction backends with a raw-text fallback
pub struct ExtractionChain {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl Default for ExtractionChain {
    fn default() -> Self {
        Self::new().with_extractor(PlainTextExtractor)
    }
}

impl ExtractionChain {
    /// Creates a chain with no backends; only the raw-text fallback applies
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    pub fn with_extractor(mut self, extractor: impl TextExtractor + 'static) -> Self {
        self.extractors.push(Box::new(extractor));
        self
    }

    /// Extracts the text of a document.
    ///
    /// Never fails. Backends that reject or fail on the document add a
    /// warning. If no backend succeeds and the bytes decode to non-blank text,
    /// that text is returned with method `raw-text`; otherwise the text is
    /// empty and the method is the last backend attempted, or `unknown`.
    pub fn extract(&self, file_name: &str, bytes: &[u8]) -> DocumentText {
        let mut warnings = Vec::new();
        let mut last_method = None;

        for extractor in self.extractors.iter().filter(|e| e.supports(file_name)) {
            last_method = Some(extractor.method());
            match extractor.extract(bytes) {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::debug!(file_name, method = extractor.method(), chars = text.chars().count(), "text extracted");
                    return DocumentText {
                        text,
                        meta: ExtractionMeta {
                            method: extractor.method().to_string(),
                            warnings,
                        },
                    };
                }
                Ok(_) => warnings.push(format!("{} produced no text", extractor.method())),
                Err(error) => {
                    tracing::warn!(file_name, %error, "extraction backend failed");
                    warnings.push(error.to_string());
                }
            }
        }

        let raw = String::from_utf8_lossy(bytes).into_owned();
        if !raw.trim().is_empty() {
            return DocumentText {
                text: raw,
                meta: ExtractionMeta {
                    method: RAW_TEXT_METHOD.to_string(),
                    warnings,
                },
            };
        }

        warnings.push("no text could be extracted".to_string());
        DocumentText {
            text: String::new(),
            meta: ExtractionMeta {
                method: last_method.unwrap_or("unknown").to_string(),
                warnings,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingOcr;

    impl TextExtractor for FailingOcr {
        fn method(&self) -> &'static str {
            "ocr"
        }

        fn supports(&self, _file_name: &str) -> bool {
            true
        }

        fn extract(&self, _bytes: &[u8]) -> Result<String, TextExtractionError> {
            Err(TextExtractionError::Backend {
                method: "ocr".into(),
                message: "engine not installed".into(),
            })
        }
    }

    #[test]
    fn test_plain_text_extensions() {
        let plain = PlainTextExtractor;
        assert!(plain.supports("claim.txt"));
        assert!(plain.supports("NOTES.MD"));
        assert!(plain.supports("data.csv"));
        assert!(!plain.supports("scan.pdf"));
        assert!(!plain.supports("no_extension"));
    }

    #[test]
    fn test_plain_text_succeeds() {
        let doc = ExtractionChain::default().extract("a.txt", b"Claim ID: CLM-1");
        assert_eq!(doc.text, "Claim ID: CLM-1");
        assert_eq!(doc.meta.method, "plain-text");
        assert!(doc.meta.warnings.is_empty());
    }

    #[test]
    fn test_failures_become_warnings_before_fallback() {
        let chain = ExtractionChain::new().with_extractor(FailingOcr);
        let doc = chain.extract("scan.png", b"Patient ID: PT-1");

        assert_eq!(doc.text, "Patient ID: PT-1");
        assert_eq!(doc.meta.method, RAW_TEXT_METHOD);
        assert_eq!(doc.meta.warnings.len(), 1);
        assert!(doc.meta.warnings[0].contains("engine not installed"));
    }

    #[test]
    fn test_backends_that_do_not_support_the_file_are_skipped_silently() {
        let doc = ExtractionChain::default().extract("scan.pdf", b"Claim ID: CLM-9");
        assert_eq!(doc.text, "Claim ID: CLM-9");
        assert_eq!(doc.meta.method, RAW_TEXT_METHOD);
        assert!(doc.meta.warnings.is_empty());
    }

    #[test]
    fn test_invalid_utf8_falls_back_lossily() {
        let doc = ExtractionChain::default().extract("a.txt", b"Claim \xff ok");
        assert_eq!(doc.meta.method, RAW_TEXT_METHOD);
        assert!(doc.text.starts_with("Claim "));
        assert_eq!(doc.meta.warnings.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let doc = ExtractionChain::new().with_extractor(FailingOcr).extract("x.bin", b"   ");
        assert!(doc.text.is_empty());
        assert_eq!(doc.meta.method, "ocr");

        let doc = ExtractionChain::new().extract("x.bin", b"");
        assert!(doc.text.is_empty());
        assert_eq!(doc.meta.method, "unknown");
        assert_eq!(doc.meta.warnings, vec!["no text could be extracted".to_string()]);
    }
}
