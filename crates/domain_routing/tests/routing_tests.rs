//! Routing Engine Tests
//!
//! End-to-end routing scenarios, rule-set versioning, batch rerouting, and
//! property tests over the categorizer and the routing policy.

use domain_routing::{
    categorize_complexity, categorize_fraud, Category, ClaimSignals, RoutingEngine,
};

fn signals(fraud: f64, complexity: f64, severity: &str, category: &str) -> ClaimSignals {
    ClaimSignals {
        fraud_score: fraud,
        complexity_score: complexity,
        severity_level: severity.to_string(),
        claim_category: category.to_string(),
        ..ClaimSignals::default()
    }
}

// ============= SCENARIOS =============
mod scenarios {
    use super::*;

    #[test]
    fn test_routine_accident_goes_to_junior_adjuster() {
        let engine = RoutingEngine::new();
        let decision = engine.route(&signals(0.1, 1.0, "Low", "accident"));
        assert_eq!(decision.team, "Accident Dept - Low");
        assert_eq!(decision.adjuster, "Junior Adjuster");
    }

    #[test]
    fn test_fraud_override_beats_high_severity() {
        let engine = RoutingEngine::new();
        let decision = engine.route(&signals(0.75, 4.0, "High", "medical"));
        assert_eq!(decision.team, "SIU (Fraud)");
        assert_eq!(decision.adjuster, "SIU Investigator");
    }

    #[test]
    fn test_medium_medical_claim_goes_to_standard_adjuster() {
        let engine = RoutingEngine::new();
        let decision = engine.route(&signals(0.2, 3.0, "Medium", "medical"));
        assert_eq!(decision.team, "Health Dept - Mid");
        assert_eq!(decision.adjuster, "Standard Adjuster");
    }

    #[test]
    fn test_health_alias_maps_to_health_department() {
        let engine = RoutingEngine::new();
        let decision = engine.route(&signals(0.0, 5.0, "Low", "health"));
        assert_eq!(decision.team, "Health Dept - High");
        assert_eq!(decision.adjuster, "Senior Adjuster");
    }

    #[test]
    fn test_category_label_must_match_exactly() {
        let engine = RoutingEngine::new();
        let capitalised = engine.route(&signals(0.1, 1.0, "Low", "Medical"));
        assert_eq!(capitalised.team, "Accident Dept - Low");
        assert_eq!(capitalised.adjuster, "Junior Adjuster");

        let exact = engine.route(&signals(0.1, 1.0, "Low", "medical"));
        assert_eq!(exact.team, "Health Dept - Low");
        assert_eq!(exact.adjuster, "Junior Adjuster");
    }

    #[test]
    fn test_rationale_keeps_severity_label_verbatim() {
        let engine = RoutingEngine::new();
        let decision = engine.route(&signals(0.0, 2.3, "mEdIuM", "accident"));
        assert_eq!(
            decision.rationale,
            "Complexity score is 2.3 and Severity score is mEdIuM so routed to this team"
        );
    }
}

// ============= VERSIONING =============
mod versioning {
    use super::*;
    use domain_routing::{load_rules_from_str, RuleCondition, RuleDefinition};

    const RULES: &str = r#"[
        {"name": "siu", "condition_type": "fraud", "condition_value": "high"},
        {"name": "severe", "condition_type": "combined", "severity_category": "high"}
    ]"#;

    #[test]
    fn test_each_replacement_increments_once() {
        let engine = RoutingEngine::new();
        for expected in 1..=5u64 {
            let before = engine.current_version();
            let returned = engine.replace_rules(load_rules_from_str(RULES).unwrap());
            assert_eq!(returned, before + 1);
            assert_eq!(engine.current_version(), expected);
        }
    }

    #[test]
    fn test_active_rules_carry_one_stamp() {
        let engine = RoutingEngine::new();
        engine.replace_rules(load_rules_from_str(RULES).unwrap());
        engine.replace_rules(vec![RuleDefinition::new(RuleCondition::Severity {
            condition_value: Category::Mid,
        })]);

        let rules = engine.rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].version, engine.current_version() - 1);
    }

    #[test]
    fn test_reroute_after_replacement_matches_individual_routes() {
        let engine = RoutingEngine::new();
        let claims = vec![
            signals(0.1, 1.0, "Low", "accident"),
            signals(0.75, 4.0, "High", "medical"),
            signals(0.2, 3.0, "Medium", "medical"),
            signals(0.4, 3.6, "Low", "theft"),
        ];

        engine.replace_rules(load_rules_from_str(RULES).unwrap());
        let rerouted = engine.reroute_many(&claims);

        assert_eq!(rerouted.len(), claims.len());
        for (record, claim) in rerouted.iter().zip(&claims) {
            assert_eq!(record.decision, engine.route(claim));
            assert_eq!(record.signals, *claim);
            assert_eq!(record.rule_version, engine.current_version());
        }
    }

    #[test]
    fn test_reroute_order_independent() {
        let engine = RoutingEngine::new();
        let claims = vec![
            signals(0.1, 1.0, "Low", "accident"),
            signals(0.65, 2.0, "High", "medical"),
            signals(0.3, 3.4, "Medium", "accident"),
        ];
        let mut reversed = claims.clone();
        reversed.reverse();

        let forward = engine.reroute_many(&claims);
        let backward = engine.reroute_many(&reversed);

        for (f, b) in forward.iter().zip(backward.iter().rev()) {
            assert_eq!(f.decision, b.decision);
            assert_eq!(f.categories, b.categories);
        }
    }

    #[test]
    fn test_rerouted_record_keeps_claim_number() {
        let engine = RoutingEngine::new();
        let mut rerouted = engine.reroute_many(&[signals(0.1, 1.0, "Low", "accident")]);
        let routed = rerouted.remove(0).for_claim("CLM-2024-0001");
        assert_eq!(routed.claim_number, "CLM-2024-0001");
        assert_eq!(routed.decision.team, "Accident Dept - Low");
    }
}

// ============= CONCURRENCY =============
mod concurrency {
    use super::*;
    use domain_routing::{RuleCondition, RuleDefinition};
    use std::sync::Arc;
    use std::thread;

    fn rule_set(size: usize) -> Vec<RuleDefinition> {
        (0..size)
            .map(|_| {
                RuleDefinition::new(RuleCondition::Complexity {
                    condition_value: Category::High,
                })
            })
            .collect()
    }

    #[test]
    fn test_readers_never_see_mixed_versions() {
        let engine = Arc::new(RoutingEngine::new());

        let writer = {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for i in 0..200 {
                    engine.replace_rules(rule_set(1 + i % 7));
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let rules = engine.rules();
                        if let Some(first) = rules.first() {
                            assert!(rules.iter().all(|r| r.version == first.version));
                        }
                        let batch = engine.reroute_many(&[
                            signals(0.1, 4.0, "Low", "accident"),
                            signals(0.2, 1.0, "High", "medical"),
                        ]);
                        assert_eq!(batch[0].rule_version, batch[1].rule_version);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(engine.current_version(), 200);
    }
}

// ============= PROPERTIES =============
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn category_name() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("medical"),
            Just("health"),
            Just("Medical"),
            Just("accident"),
            Just("other"),
        ]
    }

    fn severity_label() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Low".to_string()),
            Just("Medium".to_string()),
            Just("High".to_string()),
            "[a-zA-Z ]{0,10}",
        ]
    }

    proptest! {
        #[test]
        fn fraud_category_is_monotonic(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(categorize_fraud(lo) <= categorize_fraud(hi));
        }

        #[test]
        fn complexity_category_is_monotonic(a in 0.0f64..10.0, b in 0.0f64..10.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(categorize_complexity(lo) <= categorize_complexity(hi));
        }

        #[test]
        fn fraud_at_or_above_threshold_always_overrides(
            fraud in 0.6f64..=1.0,
            complexity in 0.0f64..10.0,
            severity in severity_label(),
            category in category_name(),
        ) {
            let engine = RoutingEngine::new();
            let decision = engine.route(&signals(fraud, complexity, &severity, category));
            prop_assert_eq!(decision.team, "SIU (Fraud)");
            prop_assert_eq!(decision.adjuster, "SIU Investigator");
        }

        #[test]
        fn routing_is_idempotent(
            fraud in 0.0f64..1.0,
            complexity in 0.0f64..10.0,
            severity in severity_label(),
            category in category_name(),
        ) {
            let engine = RoutingEngine::new();
            let claim = signals(fraud, complexity, &severity, category);
            prop_assert_eq!(engine.route(&claim), engine.route(&claim));
        }

        #[test]
        fn non_fraud_team_names_department_and_tier(
            fraud in 0.0f64..0.6,
            complexity in 0.0f64..10.0,
            severity in severity_label(),
            category in category_name(),
        ) {
            let engine = RoutingEngine::new();
            let decision = engine.route(&signals(fraud, complexity, &severity, category));
            prop_assert!(
                decision.team.starts_with("Health Dept - ")
                    || decision.team.starts_with("Accident Dept - ")
            );
            prop_assert!(decision.rule_applied);
        }
    }
}
