//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim signals, rule
//! definitions, and document texts.

use core_kernel::InsuranceType;
use domain_routing::{
    Category, ClaimSignals, ComparisonOperator, RuleCondition, RuleDefinition,
};
use proptest::prelude::*;

/// Strategy for fraud probabilities in [0, 1]
pub fn fraud_score_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=1.0f64
}

/// Strategy for complexity scores, covering every bucket
pub fn complexity_score_strategy() -> impl Strategy<Value = f64> {
    0.0f64..6.0f64
}

/// Strategy for severity labels, known and arbitrary
pub fn severity_label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Low".to_string()),
        Just("Medium".to_string()),
        Just("High".to_string()),
        Just("high".to_string()),
        Just(String::new()),
        "[A-Za-z]{1,12}",
    ]
}

/// Strategy for category labels, including near misses of the health labels
pub fn claim_category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("medical".to_string()),
        Just("health".to_string()),
        Just("accident".to_string()),
        Just("Medical".to_string()),
        "[a-z]{1,10}",
    ]
}

pub fn insurance_type_strategy() -> impl Strategy<Value = InsuranceType> {
    prop_oneof![
        Just(InsuranceType::Health),
        Just(InsuranceType::Vehicle),
        Just(InsuranceType::Unknown),
    ]
}

pub fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Low), Just(Category::Mid), Just(Category::High)]
}

/// Strategy for complete claim signals
pub fn claim_signals_strategy() -> impl Strategy<Value = ClaimSignals> {
    (
        fraud_score_strategy(),
        complexity_score_strategy(),
        severity_label_strategy(),
        claim_category_strategy(),
        insurance_type_strategy(),
    )
        .prop_map(
            |(fraud_score, complexity_score, severity_level, claim_category, insurance_type)| {
                ClaimSignals {
                    fraud_score,
                    complexity_score,
                    severity_level,
                    claim_category,
                    insurance_type,
                }
            },
        )
}

pub fn comparison_operator_strategy() -> impl Strategy<Value = ComparisonOperator> {
    prop_oneof![
        Just(ComparisonOperator::AtLeast),
        Just(ComparisonOperator::Above),
        Just(ComparisonOperator::AtMost),
        Just(ComparisonOperator::Below),
    ]
}

/// Strategy for a rule definition of any condition type
pub fn rule_definition_strategy() -> impl Strategy<Value = RuleDefinition> {
    let condition = prop_oneof![
        category_strategy().prop_map(|c| RuleCondition::Fraud { condition_value: c }),
        category_strategy().prop_map(|c| RuleCondition::Severity { condition_value: c }),
        category_strategy().prop_map(|c| RuleCondition::Complexity { condition_value: c }),
        claim_category_strategy().prop_map(|c| RuleCondition::ClaimType { condition_value: c }),
        (comparison_operator_strategy(), fraud_score_strategy()).prop_map(|(operator, threshold)| {
            RuleCondition::FraudThreshold {
                operator,
                threshold,
            }
        }),
        (
            proptest::option::of(category_strategy()),
            proptest::option::of(category_strategy()),
            proptest::option::of(category_strategy()),
        )
            .prop_map(|(fraud_category, severity_category, complexity_category)| {
                RuleCondition::Combined {
                    fraud_category,
                    severity_category,
                    complexity_category,
                }
            }),
    ];
    condition.prop_map(RuleDefinition::new)
}

/// Strategy for text made only of digits, spaces and newlines
///
/// Such text carries no classification signal.
pub fn signal_free_text_strategy() -> impl Strategy<Value = String> {
    "[0-9 \n]{0,80}"
}

/// Strategy for arbitrary printable text, including non-ASCII
pub fn arbitrary_text_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,200}"
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn fraud_scores_are_probabilities(score in fraud_score_strategy()) {
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn generated_rules_round_trip_through_json(rule in rule_definition_strategy()) {
            let json = serde_json::to_string(&vec![rule.clone()]).unwrap();
            let loaded = domain_routing::load_rules_from_str(&json).unwrap();
            prop_assert_eq!(loaded, vec![rule]);
        }

        #[test]
        fn signal_free_text_has_no_letters(text in signal_free_text_strategy()) {
            prop_assert!(!text.chars().any(|c| c.is_alphabetic()));
        }
    }
}
