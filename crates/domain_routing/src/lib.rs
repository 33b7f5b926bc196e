//! Claim Routing Domain
//!
//! This crate decides which team and adjuster handle a claim.
//!
//! # Components
//!
//! - **Categorizer**: buckets fraud, severity and complexity into `low`/`mid`/`high`
//! - **Rules**: routing rule definitions loaded from JSON, stamped with a version
//! - **Engine**: owns the active rule set and produces routing decisions
//!
//! # Routing Policy
//!
//! ```text
//! fraud >= 0.60                      -> SIU (Fraud) / SIU Investigator
//! otherwise tier = max(severity, complexity)
//!   medical/health claims            -> Health Dept - {tier}
//!   everything else                  -> Accident Dept - {tier}
//! ```
//!
//! Configured rules can be matched against a claim, but they do not change
//! the decision above.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_routing::{load_rules_from_str, RoutingEngine, ClaimSignals};
//!
//! let engine = RoutingEngine::new();
//! engine.replace_rules(load_rules_from_str(rules_json)?);
//!
//! let decision = engine.route(&signals);
//! let rerouted = engine.reroute_many(&stored_signals);
//! ```

pub mod categorizer;
pub mod decision;
pub mod engine;
pub mod error;
pub mod rules;
pub mod signals;

pub use categorizer::{
    categorize_complexity, categorize_fraud, categorize_severity, Categories, Category,
};
pub use decision::{ReroutedClaim, RoutedClaim, RoutingDecision};
pub use engine::{decide, RoutingEngine};
pub use error::RuleError;
pub use rules::{
    load_rules_from_file, load_rules_from_str, ComparisonOperator, RuleCondition, RuleDefinition,
    RoutingRule,
};
pub use signals::{ClaimCategory, ClaimSignals};
