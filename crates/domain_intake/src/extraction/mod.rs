//! Schema-driven field extraction
//!
//! Field schemas are fixed, code-defined data (see [`schemas`]). Their regexes
//! are compiled once on first use. A strategy whose regex fails to compile is
//! dropped with a warning; the remaining strategies and fields still run.

pub mod patterns;
pub mod schemas;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use core_kernel::{DocumentType, InsuranceType};

use crate::entities::{EntitySet, FieldValue};
use patterns::{capture, to_bool, to_date, to_number};
pub use schemas::{fields_for, FieldKind, FieldSpec, SCHEMA_PAIRS};

struct CompiledField {
    name: &'static str,
    kind: FieldKind,
    matchers: Vec<Regex>,
}

impl CompiledField {
    fn compile(spec: &'static FieldSpec) -> Self {
        let matchers = spec
            .strategies
            .iter()
            .filter_map(|strategy| match Regex::new(&strategy.pattern()) {
                Ok(regex) => Some(regex),
                Err(error) => {
                    tracing::warn!(field = spec.name, %error, "dropping extraction strategy");
                    None
                }
            })
            .collect();

        Self {
            name: spec.name,
            kind: spec.kind,
            matchers,
        }
    }

    fn extract(&self, text: &str) -> Option<FieldValue> {
        let raw = self.matchers.iter().find_map(|regex| capture(regex, text))?;
        match self.kind {
            FieldKind::Text => Some(FieldValue::Text(raw)),
            FieldKind::Date => to_date(&raw).map(FieldValue::Date),
            FieldKind::Number => to_number(&raw).map(FieldValue::Number),
            FieldKind::Bool => to_bool(&raw).map(FieldValue::Bool),
        }
    }
}

static COMPILED: Lazy<HashMap<(InsuranceType, DocumentType), Vec<CompiledField>>> = Lazy::new(|| {
    SCHEMA_PAIRS
        .iter()
        .map(|&(insurance, document)| {
            let fields = fields_for(insurance, document)
                .iter()
                .map(CompiledField::compile)
                .collect();
            ((insurance, document), fields)
        })
        .collect()
});

/// Extracts the fields declared for `(insurance_type, document_type)` from `text`.
///
/// Only fields that were found and parsed are present in the result. Pairs
/// without a schema yield an empty set.
pub fn extract(text: &str, insurance_type: InsuranceType, document_type: DocumentType) -> EntitySet {
    let mut entities = EntitySet::new();

    let Some(fields) = COMPILED.get(&(insurance_type, document_type)) else {
        return entities;
    };

    for field in fields {
        match field.extract(text) {
            Some(value) => entities.insert(field.name, value),
            None => tracing::trace!(field = field.name, "field not found"),
        }
    }

    tracing::debug!(
        insurance_type = %insurance_type,
        document_type = %document_type,
        found = entities.len(),
        declared = fields.len(),
        "entities extracted"
    );

    entities
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_every_declared_pattern_compiles() {
        for &(insurance, document) in SCHEMA_PAIRS.iter() {
            let declared: usize = fields_for(insurance, document)
                .iter()
                .map(|f| f.strategies.len())
                .sum();
            let compiled: usize = COMPILED[&(insurance, document)]
                .iter()
                .map(|f| f.matchers.len())
                .sum();
            assert_eq!(declared, compiled, "{insurance}/{document}");
        }
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        for &(insurance, document) in SCHEMA_PAIRS.iter() {
            assert!(extract("", insurance, document).is_empty());
        }
        assert!(extract("", InsuranceType::Unknown, DocumentType::Unknown).is_empty());
    }

    #[test]
    fn test_pairs_without_schema_yield_empty_set() {
        let text = "Claim ID: CLM-2024-0001";
        assert!(extract(text, InsuranceType::Health, DocumentType::Prescription).is_empty());
        assert!(extract(text, InsuranceType::Unknown, DocumentType::Accord).is_empty());
        assert!(extract(text, InsuranceType::Vehicle, DocumentType::Unknown).is_empty());
    }

    #[test]
    fn test_hospital_fields() {
        let text = "Claim ID: CLM-2024-0042\n\
                    Patient ID: PT-889\n\
                    Hospital Code: HC-12\n\
                    Admission Date: 2024-03-01\n\
                    Discharge Date: 2024-03-05\n\
                    Bill Amount: 1,25,000.50\n";

        let entities = extract(text, InsuranceType::Health, DocumentType::Hospital);

        assert_eq!(entities.text("claim_id"), Some("CLM-2024-0042"));
        assert_eq!(entities.text("patient_id"), Some("PT-889"));
        assert_eq!(entities.text("hospital_code"), Some("HC-12"));
        assert_eq!(entities.date("admission_date"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(entities.date("discharge_date"), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(entities.number("bill_amount"), Some(125000.50));
        assert!(!entities.contains("prescription"));
    }

    #[test]
    fn test_claim_id_falls_back_to_bare_code() {
        let text = "Reference CLM-7788991 attached";
        let entities = extract(text, InsuranceType::Vehicle, DocumentType::Rc);
        assert_eq!(entities.text("claim_id"), Some("CLM-7788991"));
    }

    #[test]
    fn test_unparseable_values_are_absent() {
        let text = "Total Loss: perhaps\n\
                    Approved Repair Amount: ,,,\n\
                    Loss Date: 2024-02-30\n\
                    Claim Status: Open\n";
        let entities = extract(text, InsuranceType::Vehicle, DocumentType::Loss);

        assert!(!entities.contains("total_loss"));
        assert!(!entities.contains("approved_repair_amount"));
        assert!(!entities.contains("loss_date"));
        assert_eq!(entities.text("claim_status"), Some("Open"));
    }

    #[test]
    fn test_extraction_order_follows_schema() {
        let text = "Police Report No: PR-55\nReport Date: 2024-01-09\nClaim ID: CLM-ABC-123";
        let entities = extract(text, InsuranceType::Vehicle, DocumentType::Fir);
        let names: Vec<&str> = entities.names().collect();
        assert_eq!(names, vec!["police_report_no", "claim_id", "report_date"]);
    }
}
