//! Routing outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::categorizer::Categories;
use crate::signals::ClaimSignals;

/// Team that receives every claim whose fraud score triggers the override
pub const FRAUD_TEAM: &str = "SIU (Fraud)";
pub const FRAUD_ADJUSTER: &str = "SIU Investigator";

/// Team and adjuster assigned to a claim, with a readable rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    #[serde(rename = "routing_team")]
    pub team: String,
    pub adjuster: String,
    #[serde(rename = "routing_reason")]
    pub rationale: String,
    /// Always true: the fixed policy covers every claim
    pub rule_applied: bool,
}

/// A claim routed on submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedClaim {
    pub claim_number: String,
    #[serde(flatten)]
    pub signals: ClaimSignals,
    #[serde(flatten)]
    pub categories: Categories,
    #[serde(flatten)]
    pub decision: RoutingDecision,
    pub rule_version: u64,
    pub routed_at: DateTime<Utc>,
}

/// A claim routed again after a rule-set replacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReroutedClaim {
    #[serde(flatten)]
    pub signals: ClaimSignals,
    #[serde(flatten)]
    pub categories: Categories,
    #[serde(flatten)]
    pub decision: RoutingDecision,
    pub rule_version: u64,
    pub rerouted_at: DateTime<Utc>,
}

impl ReroutedClaim {
    /// Attaches the claim number of the stored claim this record recomputes
    pub fn for_claim(self, claim_number: impl Into<String>) -> RoutedClaim {
        RoutedClaim {
            claim_number: claim_number.into(),
            signals: self.signals,
            categories: self.categories,
            decision: self.decision,
            rule_version: self.rule_version,
            routed_at: self.rerouted_at,
        }
    }
}
