//! Score categorization
//!
//! Continuous scores and the free-form severity label are bucketed into an
//! ordinal [`Category`]. Every boundary value belongs to the lower bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::signals::ClaimSignals;

/// Upper bound (inclusive) of a low fraud score
pub const FRAUD_LOW_MAX: f64 = 0.33;
/// Upper bound (inclusive) of a mid fraud score
pub const FRAUD_MID_MAX: f64 = 0.67;
/// Upper bound (inclusive) of a low complexity score
pub const COMPLEXITY_LOW_MAX: f64 = 2.0;
/// Upper bound (inclusive) of a mid complexity score
pub const COMPLEXITY_MID_MAX: f64 = 3.5;

/// Ordinal bucket of a score or label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Low,
    Mid,
    High,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Low => "low",
            Category::Mid => "mid",
            Category::High => "high",
        }
    }

    /// Capitalised form used in team names
    pub fn title(&self) -> &'static str {
        match self {
            Category::Low => "Low",
            Category::Mid => "Mid",
            Category::High => "High",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn bucket(score: f64, low_max: f64, mid_max: f64) -> Category {
    if !score.is_finite() || score <= low_max {
        Category::Low
    } else if score <= mid_max {
        Category::Mid
    } else {
        Category::High
    }
}

/// Buckets a fraud probability. NaN and infinities are `low`.
pub fn categorize_fraud(score: f64) -> Category {
    bucket(score, FRAUD_LOW_MAX, FRAUD_MID_MAX)
}

/// Buckets a severity label, case-insensitively.
///
/// `"high"` is high, `"medium"` is mid, anything else (including an empty
/// label) is low. Surrounding whitespace is not ignored.
pub fn categorize_severity(label: &str) -> Category {
    match label.to_lowercase().as_str() {
        "high" => Category::High,
        "medium" => Category::Mid,
        _ => Category::Low,
    }
}

/// Buckets a complexity score. NaN and infinities are `low`.
pub fn categorize_complexity(score: f64) -> Category {
    bucket(score, COMPLEXITY_LOW_MAX, COMPLEXITY_MID_MAX)
}

/// The three categories of one claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(rename = "fraud_category")]
    pub fraud: Category,
    #[serde(rename = "severity_category")]
    pub severity: Category,
    #[serde(rename = "complexity_category")]
    pub complexity: Category,
}

impl Categories {
    pub fn of(signals: &ClaimSignals) -> Self {
        Self {
            fraud: categorize_fraud(signals.fraud_score),
            severity: categorize_severity(&signals.severity_level),
            complexity: categorize_complexity(signals.complexity_score),
        }
    }

    /// The worse of the severity and complexity categories
    pub fn tier(&self) -> Category {
        self.severity.max(self.complexity)
    }
}
