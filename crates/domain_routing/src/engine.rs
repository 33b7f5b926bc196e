//! Routing Engine
//!
//! The engine owns the active rule set and its version counter behind one
//! lock, so readers see either the old set with the old version or the new
//! set with the new version.
//!
//! # Versioning
//!
//! The counter starts at 0. A replacement stamps every incoming rule with the
//! counter's current value and then increments it, so after the first
//! replacement `current_version()` is 1 and the active rules carry stamp 0.

use chrono::Utc;
use parking_lot::RwLock;

use crate::categorizer::{Categories, Category};
use crate::decision::{ReroutedClaim, RoutedClaim, RoutingDecision, FRAUD_ADJUSTER, FRAUD_TEAM};
use crate::rules::{RoutingRule, RuleDefinition};
use crate::signals::ClaimSignals;

/// Fraud score from which a claim always goes to the fraud team
pub const FRAUD_OVERRIDE_THRESHOLD: f64 = 0.6;

#[derive(Debug, Default)]
struct RuleSet {
    rules: Vec<RoutingRule>,
    version: u64,
}

/// Holds the routing rules and routes claims
#[derive(Debug, Default)]
pub struct RoutingEngine {
    state: RwLock<RuleSet>,
}

impl RoutingEngine {
    /// Creates an engine with no rules at version 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole rule set and returns the new version
    pub fn replace_rules(&self, definitions: Vec<RuleDefinition>) -> u64 {
        let mut state = self.state.write();
        let stamp = state.version;
        state.rules = definitions
            .into_iter()
            .map(|definition| RoutingRule::stamp(definition, stamp))
            .collect();
        state.version += 1;

        tracing::info!(
            rules = state.rules.len(),
            version = state.version,
            "routing rules replaced"
        );

        state.version
    }

    pub fn current_version(&self) -> u64 {
        self.state.read().version
    }

    /// Copy of the active rules
    pub fn rules(&self) -> Vec<RoutingRule> {
        self.state.read().rules.clone()
    }

    /// Routes one claim. Never fails.
    pub fn route(&self, signals: &ClaimSignals) -> RoutingDecision {
        decide(signals, &Categories::of(signals))
    }

    /// Routes one claim and records the categories and rule version used
    pub fn route_claim(&self, claim_number: impl Into<String>, signals: ClaimSignals) -> RoutedClaim {
        let categories = Categories::of(&signals);
        let rule_version = {
            let state = self.state.read();
            log_matches(&state.rules, &signals, &categories);
            state.version
        };

        let claim_number = claim_number.into();
        let decision = decide(&signals, &categories);

        tracing::info!(
            claim_number = %claim_number,
            team = %decision.team,
            rule_version,
            "claim routed"
        );

        RoutedClaim {
            claim_number,
            signals,
            categories,
            decision,
            rule_version,
            routed_at: Utc::now(),
        }
    }

    /// Routes a batch of stored claims against one consistent rule set.
    ///
    /// The rule set and version are read once for the whole batch and every
    /// record carries the same `rerouted_at`. Output order follows input order.
    pub fn reroute_many(&self, claims: &[ClaimSignals]) -> Vec<ReroutedClaim> {
        let state = self.state.read();
        let rule_version = state.version;
        let rerouted_at = Utc::now();

        let rerouted: Vec<ReroutedClaim> = claims
            .iter()
            .map(|signals| {
                let categories = Categories::of(signals);
                log_matches(&state.rules, signals, &categories);
                ReroutedClaim {
                    signals: signals.clone(),
                    categories,
                    decision: decide(signals, &categories),
                    rule_version,
                    rerouted_at,
                }
            })
            .collect();
        drop(state);

        tracing::info!(claims = rerouted.len(), rule_version, "claims rerouted");

        rerouted
    }

    /// Active rules whose condition matches the claim.
    ///
    /// Matching is informational: the routing decision does not depend on it.
    pub fn matching_rules(&self, signals: &ClaimSignals) -> Vec<RoutingRule> {
        let categories = Categories::of(signals);
        self.state
            .read()
            .rules
            .iter()
            .filter(|rule| rule.matches(signals, &categories))
            .cloned()
            .collect()
    }
}

fn log_matches(rules: &[RoutingRule], signals: &ClaimSignals, categories: &Categories) {
    let matched = rules.iter().filter(|r| r.matches(signals, categories)).count();
    if matched > 0 {
        tracing::debug!(matched, "configured rules match claim");
    }
}

fn adjuster_for(tier: Category) -> &'static str {
    match tier {
        Category::High => "Senior Adjuster",
        Category::Mid => "Standard Adjuster",
        Category::Low => "Junior Adjuster",
    }
}

fn triggers_fraud_override(fraud_score: f64) -> bool {
    fraud_score.is_finite() && fraud_score >= FRAUD_OVERRIDE_THRESHOLD
}

/// The fixed routing policy.
///
/// A fraud score of 0.60 or more goes to the fraud team. Everything else goes
/// to the claim's department at the tier of the worse of severity and
/// complexity.
pub fn decide(signals: &ClaimSignals, categories: &Categories) -> RoutingDecision {
    if triggers_fraud_override(signals.fraud_score) {
        return RoutingDecision {
            team: FRAUD_TEAM.to_string(),
            adjuster: FRAUD_ADJUSTER.to_string(),
            rationale: format!(
                "Fraud score is {:.1}% so routed to this team",
                signals.fraud_score * 100.0
            ),
            rule_applied: true,
        };
    }

    let tier = categories.tier();
    RoutingDecision {
        team: format!("{} - {}", signals.category().department(), tier.title()),
        adjuster: adjuster_for(tier).to_string(),
        rationale: format!(
            "Complexity score is {:.1} and Severity score is {} so routed to this team",
            signals.complexity_score, signals.severity_level
        ),
        rule_applied: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleCondition;

    fn claim(fraud: f64, complexity: f64, severity: &str, category: &str) -> ClaimSignals {
        ClaimSignals {
            fraud_score: fraud,
            complexity_score: complexity,
            severity_level: severity.to_string(),
            claim_category: category.to_string(),
            ..ClaimSignals::default()
        }
    }

    fn fraud_rule() -> RuleDefinition {
        RuleDefinition::new(RuleCondition::Fraud {
            condition_value: Category::High,
        })
    }

    #[test]
    fn test_low_accident_claim() {
        let engine = RoutingEngine::new();
        let decision = engine.route(&claim(0.1, 1.0, "Low", "accident"));
        assert_eq!(decision.team, "Accident Dept - Low");
        assert_eq!(decision.adjuster, "Junior Adjuster");
        assert_eq!(
            decision.rationale,
            "Complexity score is 1.0 and Severity score is Low so routed to this team"
        );
        assert!(decision.rule_applied);
    }

    #[test]
    fn test_fraud_override() {
        let engine = RoutingEngine::new();
        let decision = engine.route(&claim(0.75, 4.0, "High", "medical"));
        assert_eq!(decision.team, "SIU (Fraud)");
        assert_eq!(decision.adjuster, "SIU Investigator");
        assert_eq!(decision.rationale, "Fraud score is 75.0% so routed to this team");
    }

    #[test]
    fn test_override_starts_at_threshold() {
        let engine = RoutingEngine::new();
        let at = engine.route(&claim(0.6, 1.0, "Low", "accident"));
        assert_eq!(at.team, FRAUD_TEAM);
        let below = engine.route(&claim(0.59, 1.0, "Low", "accident"));
        assert_eq!(below.team, "Accident Dept - Low");
    }

    #[test]
    fn test_nan_fraud_never_overrides() {
        let engine = RoutingEngine::new();
        let decision = engine.route(&claim(f64::NAN, 1.0, "Low", "accident"));
        assert_eq!(decision.team, "Accident Dept - Low");
    }

    #[test]
    fn test_tier_from_severity_or_complexity() {
        let engine = RoutingEngine::new();
        let mid = engine.route(&claim(0.2, 3.0, "Medium", "medical"));
        assert_eq!(mid.team, "Health Dept - Mid");
        assert_eq!(mid.adjuster, "Standard Adjuster");

        let high = engine.route(&claim(0.2, 1.0, "high", "accident"));
        assert_eq!(high.team, "Accident Dept - High");
        assert_eq!(high.adjuster, "Senior Adjuster");
    }

    #[test]
    fn test_department_label_is_case_sensitive() {
        let engine = RoutingEngine::new();
        assert_eq!(engine.route(&claim(0.1, 1.0, "Low", "medical")).team, "Health Dept - Low");
        assert_eq!(engine.route(&claim(0.1, 1.0, "Low", "health")).team, "Health Dept - Low");
        assert_eq!(engine.route(&claim(0.1, 1.0, "Low", "Medical")).team, "Accident Dept - Low");
        assert_eq!(engine.route(&claim(0.1, 1.0, "Low", " health ")).team, "Accident Dept - Low");
    }

    #[test]
    fn test_replace_rules_versions() {
        let engine = RoutingEngine::new();
        assert_eq!(engine.current_version(), 0);

        let version = engine.replace_rules(vec![fraud_rule()]);
        assert_eq!(version, 1);
        assert_eq!(engine.current_version(), 1);
        assert!(engine.rules().iter().all(|r| r.version == 0));

        engine.replace_rules(vec![fraud_rule(), fraud_rule()]);
        assert_eq!(engine.current_version(), 2);
        let rules = engine.rules();
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|r| r.version == 1));
    }

    #[test]
    fn test_replace_with_empty_set() {
        let engine = RoutingEngine::new();
        engine.replace_rules(vec![fraud_rule()]);
        engine.replace_rules(Vec::new());
        assert!(engine.rules().is_empty());
        assert_eq!(engine.current_version(), 2);
    }

    #[test]
    fn test_matching_rules_do_not_change_decision() {
        let engine = RoutingEngine::new();
        engine.replace_rules(vec![fraud_rule().assigning("Custom Team", "Custom Adjuster")]);

        let low_fraud = claim(0.1, 1.0, "Low", "accident");
        assert!(engine.matching_rules(&low_fraud).is_empty());

        let high_fraud = claim(0.9, 1.0, "Low", "accident");
        assert_eq!(engine.matching_rules(&high_fraud).len(), 1);
        assert_eq!(engine.route(&high_fraud).team, FRAUD_TEAM);
    }

    #[test]
    fn test_route_claim_records_version() {
        let engine = RoutingEngine::new();
        engine.replace_rules(vec![fraud_rule()]);

        let routed = engine.route_claim("CLM-1", claim(0.5, 2.5, "Low", "accident"));
        assert_eq!(routed.claim_number, "CLM-1");
        assert_eq!(routed.rule_version, 1);
        assert_eq!(routed.categories.fraud, Category::Mid);
        assert_eq!(routed.categories.complexity, Category::Mid);
        assert_eq!(routed.decision.team, "Accident Dept - Mid");
    }

    #[test]
    fn test_reroute_batch_shares_version_and_timestamp() {
        let engine = RoutingEngine::new();
        engine.replace_rules(vec![fraud_rule()]);

        let claims = vec![
            claim(0.1, 1.0, "Low", "accident"),
            claim(0.8, 1.0, "Low", "medical"),
            claim(0.2, 5.0, "Medium", "medical"),
        ];
        let rerouted = engine.reroute_many(&claims);

        assert_eq!(rerouted.len(), 3);
        assert!(rerouted.iter().all(|r| r.rule_version == 1));
        assert!(rerouted.iter().all(|r| r.rerouted_at == rerouted[0].rerouted_at));
        for (record, signals) in rerouted.iter().zip(&claims) {
            assert_eq!(record.decision, engine.route(signals));
        }
    }

    #[test]
    fn test_routing_releases_the_rule_set() {
        let engine = RoutingEngine::new();
        engine.replace_rules(vec![fraud_rule(), fraud_rule()]);

        let routed = engine.route_claim("CLM-2", claim(0.9, 1.0, "Low", "accident"));
        engine.reroute_many(&[routed.signals.clone()]);

        assert!(engine.state.try_write().is_some());
        assert_eq!(engine.replace_rules(Vec::new()), 2);
        assert_eq!(routed.rule_version, 1);
    }

    #[test]
    fn test_reroute_empty_batch() {
        let engine = RoutingEngine::new();
        assert!(engine.reroute_many(&[]).is_empty());
    }
}
