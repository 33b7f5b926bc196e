//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for routing outcomes that give
//! more meaningful error messages than standard assertions.

use domain_routing::{ReroutedClaim, RoutingDecision};

/// Asserts that a decision assigns the given team and adjuster
///
/// # Panics
///
/// Panics with the full decision if either field differs
pub fn assert_routed_to(decision: &RoutingDecision, team: &str, adjuster: &str) {
    assert!(
        decision.team == team && decision.adjuster == adjuster,
        "Expected {} / {}, got {} / {} ({})",
        team,
        adjuster,
        decision.team,
        decision.adjuster,
        decision.rationale
    );
}

/// Asserts that a decision is the fraud override
pub fn assert_fraud_override(decision: &RoutingDecision) {
    assert_routed_to(decision, "SIU (Fraud)", "SIU Investigator");
    assert!(
        decision.rationale.starts_with("Fraud score is "),
        "Unexpected fraud rationale: {}",
        decision.rationale
    );
}

/// Asserts that every record of a reroute batch shares one rule version and timestamp
pub fn assert_batch_consistent(batch: &[ReroutedClaim]) {
    if let Some(first) = batch.first() {
        for (index, record) in batch.iter().enumerate() {
            assert_eq!(
                record.rule_version, first.rule_version,
                "Record {} was rerouted under version {}, batch started at {}",
                index, record.rule_version, first.rule_version
            );
            assert_eq!(
                record.rerouted_at, first.rerouted_at,
                "Record {} has a different rerouted_at",
                index
            );
        }
    }
}
