//! Routing rule definitions
//!
//! Rules are JSON objects tagged by `condition_type`:
//!
//! ```json
//! [
//!   { "name": "siu", "condition_type": "fraud", "condition_value": "high", "team": "SIU (Fraud)" },
//!   { "condition_type": "fraud_threshold", "operator": ">", "threshold": 0.5 },
//!   { "condition_type": "combined", "severity_category": "high", "complexity_category": "high" }
//! ]
//! ```
//!
//! A loaded [`RuleDefinition`] becomes a [`RoutingRule`] once the engine
//! stamps it with the rule-set version that introduced it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use core_kernel::RuleId;

use crate::categorizer::{Categories, Category};
use crate::error::RuleError;
use crate::signals::ClaimSignals;

/// Comparison used by threshold rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[default]
    #[serde(rename = ">=")]
    AtLeast,
    #[serde(rename = ">")]
    Above,
    #[serde(rename = "<=")]
    AtMost,
    #[serde(rename = "<")]
    Below,
}

impl ComparisonOperator {
    /// Applies `value <op> threshold`
    pub fn compare(&self, value: f64, threshold: f64) -> bool {
        match self {
            ComparisonOperator::AtLeast => value >= threshold,
            ComparisonOperator::Above => value > threshold,
            ComparisonOperator::AtMost => value <= threshold,
            ComparisonOperator::Below => value < threshold,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::AtLeast => ">=",
            ComparisonOperator::Above => ">",
            ComparisonOperator::AtMost => "<=",
            ComparisonOperator::Below => "<",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a rule matches on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition_type", rename_all = "snake_case")]
pub enum RuleCondition {
    Fraud {
        condition_value: Category,
    },
    Severity {
        condition_value: Category,
    },
    Complexity {
        condition_value: Category,
    },
    /// Exact match on the claim's category label
    ClaimType {
        condition_value: String,
    },
    FraudThreshold {
        #[serde(default)]
        operator: ComparisonOperator,
        #[serde(default)]
        threshold: f64,
    },
    /// Every category that is set must match; an empty combined rule matches all claims
    Combined {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fraud_category: Option<Category>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        severity_category: Option<Category>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        complexity_category: Option<Category>,
    },
}

impl RuleCondition {
    pub fn matches(&self, signals: &ClaimSignals, categories: &Categories) -> bool {
        match self {
            RuleCondition::Fraud { condition_value } => categories.fraud == *condition_value,
            RuleCondition::Severity { condition_value } => categories.severity == *condition_value,
            RuleCondition::Complexity { condition_value } => {
                categories.complexity == *condition_value
            }
            RuleCondition::ClaimType { condition_value } => {
                signals.claim_category == *condition_value
            }
            RuleCondition::FraudThreshold {
                operator,
                threshold,
            } => operator.compare(signals.fraud_score, *threshold),
            RuleCondition::Combined {
                fraud_category,
                severity_category,
                complexity_category,
            } => {
                fraud_category.map_or(true, |c| c == categories.fraud)
                    && severity_category.map_or(true, |c| c == categories.severity)
                    && complexity_category.map_or(true, |c| c == categories.complexity)
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RuleCondition::Fraud { .. } => "fraud",
            RuleCondition::Severity { .. } => "severity",
            RuleCondition::Complexity { .. } => "complexity",
            RuleCondition::ClaimType { .. } => "claim_type",
            RuleCondition::FraudThreshold { .. } => "fraud_threshold",
            RuleCondition::Combined { .. } => "combined",
        }
    }
}

/// A rule as supplied by an administrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub condition: RuleCondition,
    /// Team the rule would assign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjuster: Option<String>,
}

impl RuleDefinition {
    pub fn new(condition: RuleCondition) -> Self {
        Self {
            name: None,
            condition,
            team: None,
            adjuster: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn assigning(mut self, team: impl Into<String>, adjuster: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self.adjuster = Some(adjuster.into());
        self
    }
}

/// A rule in the active set, stamped with the version that introduced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingRule {
    pub id: RuleId,
    pub version: u64,
    #[serde(flatten)]
    pub definition: RuleDefinition,
}

impl RoutingRule {
    pub(crate) fn stamp(definition: RuleDefinition, version: u64) -> Self {
        Self {
            id: RuleId::new_v7(),
            version,
            definition,
        }
    }

    pub fn matches(&self, signals: &ClaimSignals, categories: &Categories) -> bool {
        self.definition.condition.matches(signals, categories)
    }
}

/// Parses a JSON array of rule definitions
///
/// # Example
///
/// ```rust,ignore
/// let rules = load_rules_from_str(r#"[{"condition_type": "fraud", "condition_value": "high"}]"#)?;
/// ```
pub fn load_rules_from_str(json_str: &str) -> Result<Vec<RuleDefinition>, RuleError> {
    let value: serde_json::Value =
        serde_json::from_str(json_str).map_err(|e| RuleError::Parse(e.to_string()))?;

    let items = value
        .as_array()
        .ok_or_else(|| RuleError::invalid_format("expected a JSON array of rules"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item.clone())
                .map_err(|e| RuleError::invalid_format(format!("rule {}: {}", index, e)))
        })
        .collect()
}

/// Reads and parses a rules file
pub fn load_rules_from_file(path: &Path) -> Result<Vec<RuleDefinition>, RuleError> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| RuleError::FileNotFound(path.display().to_string()))?;

    load_rules_from_str(&content)
}
