//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::InsuranceType;
use domain_routing::ClaimSignals;

/// Builder for constructing claim signals
///
/// Starts from the default scores: fraud 0.0, complexity 1.0, severity
/// "Low", an accident claim on a vehicle policy.
#[derive(Debug, Clone, Default)]
pub struct ClaimSignalsBuilder {
    signals: ClaimSignals,
}

impl ClaimSignalsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fraud(mut self, score: f64) -> Self {
        self.signals.fraud_score = score;
        self
    }

    pub fn complexity(mut self, score: f64) -> Self {
        self.signals.complexity_score = score;
        self
    }

    pub fn severity(mut self, label: impl Into<String>) -> Self {
        self.signals.severity_level = label.into();
        self
    }

    /// Marks the claim as medical, on a health policy
    pub fn medical(mut self) -> Self {
        self.signals.claim_category = "medical".to_string();
        self.signals.insurance_type = InsuranceType::Health;
        self
    }

    /// Sets the category label as the scoring service would report it
    pub fn category(mut self, label: impl Into<String>) -> Self {
        self.signals.claim_category = label.into();
        self
    }

    pub fn insurance_type(mut self, insurance_type: InsuranceType) -> Self {
        self.signals.insurance_type = insurance_type;
        self
    }

    pub fn build(self) -> ClaimSignals {
        self.signals
    }
}
