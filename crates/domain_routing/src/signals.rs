//! Claim-level routing inputs

use serde::{Deserialize, Serialize};

use core_kernel::InsuranceType;

/// Department family of a claim
///
/// Only the exact labels `"medical"` and `"health"` denote a health claim;
/// every other value, including differently cased ones, is an accident claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClaimCategory {
    Health,
    #[default]
    Accident,
}

impl ClaimCategory {
    pub fn parse(value: &str) -> Self {
        match value {
            "medical" | "health" => ClaimCategory::Health,
            _ => ClaimCategory::Accident,
        }
    }

    pub fn department(&self) -> &'static str {
        match self {
            ClaimCategory::Health => "Health Dept",
            ClaimCategory::Accident => "Accident Dept",
        }
    }
}

/// Scores and labels a claim is routed on
///
/// Produced by the scoring service from the claim's extracted entities.
/// The default is the fallback used when scoring is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSignals {
    /// Fraud probability, nominally 0.0 to 1.0
    pub fraud_score: f64,
    /// Unbounded, typically 0.0 to 5.0
    pub complexity_score: f64,
    /// Free-form label such as "Low", "Medium" or "High"
    pub severity_level: String,
    /// Category label as supplied, e.g. "medical" or "accident"
    pub claim_category: String,
    pub insurance_type: InsuranceType,
}

impl ClaimSignals {
    /// Department family derived from the category label
    pub fn category(&self) -> ClaimCategory {
        ClaimCategory::parse(&self.claim_category)
    }
}

impl Default for ClaimSignals {
    fn default() -> Self {
        Self {
            fraud_score: 0.0,
            complexity_score: 1.0,
            severity_level: "Low".to_string(),
            claim_category: "accident".to_string(),
            insurance_type: InsuranceType::Vehicle,
        }
    }
}
