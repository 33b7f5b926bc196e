//! Document classification
//!
//! Classification is keyword scoring over the lowercased text. Each signal is
//! a group of phrases; if any phrase of the group occurs as a substring, the
//! signal's weight is added to its candidate's score once. Separate weight
//! tables exist for the insurance line and for the form type under each line.

use core_kernel::{DocumentType, InsuranceType};

/// A weighted group of alternative phrases
struct Signal {
    any_of: &'static [&'static str],
    weight: u32,
}

const fn signal(any_of: &'static [&'static str], weight: u32) -> Signal {
    Signal { any_of, weight }
}

impl Signal {
    fn matches(&self, lowered: &str) -> bool {
        self.any_of.iter().any(|phrase| lowered.contains(phrase))
    }
}

fn score(lowered: &str, signals: &[Signal]) -> u32 {
    signals
        .iter()
        .filter(|s| s.matches(lowered))
        .map(|s| s.weight)
        .sum()
}

const HEALTH_LINE: &[Signal] = &[
    signal(&["hospital"], 1),
    signal(&["patient"], 1),
    signal(&["diagnosis"], 1),
    signal(&["prescription"], 1),
    signal(&["medicine"], 1),
    signal(&["medical"], 1),
    signal(&["treatment"], 1),
    signal(&["health"], 2),
];

const VEHICLE_LINE: &[Signal] = &[
    signal(&["vehicle"], 1),
    signal(&["registration"], 1),
    signal(&[" rc "], 1),
    signal(&[" dl "], 1),
    signal(&["driver"], 1),
    signal(&["license"], 1),
    signal(&["chassis"], 1),
    signal(&["engine"], 1),
    signal(&["fir"], 1),
    signal(&["police"], 1),
    signal(&["motor", "vehicle"], 1),
];

// Form tables are listed in tie-break order.

const HEALTH_FORMS: &[(DocumentType, &[Signal])] = &[
    (
        DocumentType::Accord,
        &[
            signal(&["policy number"], 2),
            signal(&["insurance start date"], 2),
            signal(&["insurance expiry date"], 2),
            signal(&["incident type", "incident date"], 2),
            signal(&["patient id", "hospital code"], 1),
            signal(&["diagnosis"], 1),
        ],
    ),
    (
        DocumentType::Hospital,
        &[
            signal(&["admission date"], 2),
            signal(&["discharge date"], 2),
            signal(&["bill amount"], 2),
            signal(&["hospital code", "patient id"], 1),
            signal(&["prescription"], 1),
        ],
    ),
    (
        DocumentType::Loss,
        &[
            signal(&["inspection date"], 2),
            signal(&["loss date"], 2),
            signal(&["inspection location"], 1),
            signal(&["approved repair amount"], 1),
            signal(&["medical notes"], 1),
            signal(&["claim status"], 1),
        ],
    ),
    (
        DocumentType::Prescription,
        &[signal(&["prescription", "rx"], 1)],
    ),
];

const VEHICLE_FORMS: &[(DocumentType, &[Signal])] = &[
    (
        DocumentType::Accord,
        &[
            signal(&["policy number"], 2),
            signal(&["insurance start date"], 2),
            signal(&["insurance expiry date"], 2),
            signal(&["incident type"], 1),
            signal(&["incident date"], 1),
            signal(&["police report filed"], 1),
        ],
    ),
    (
        DocumentType::Loss,
        &[
            signal(&["loss date"], 2),
            signal(&["inspection date"], 2),
            signal(&["approved repair amount"], 1),
            signal(&["total loss"], 1),
            signal(&["claim status"], 1),
        ],
    ),
    (
        DocumentType::Fir,
        &[
            signal(&["police report no"], 2),
            signal(&["report date"], 2),
            signal(&["first information report"], 2),
            signal(&["police report"], 1),
        ],
    ),
    (
        DocumentType::Rc,
        &[
            signal(&["rc no"], 2),
            signal(&["owner"], 1),
            signal(&["vehicle model"], 1),
            signal(&["manufacture year"], 1),
            signal(&["fuel type"], 1),
            signal(&["color"], 1),
        ],
    ),
    (
        DocumentType::Dl,
        &[
            signal(&["dl no"], 2),
            signal(&["valid from"], 1),
            signal(&["valid to"], 1),
            signal(&["issuing authority"], 1),
            signal(&["dob"], 1),
            signal(&["address"], 1),
            signal(&["name"], 1),
        ],
    ),
];

fn form_table(insurance_type: InsuranceType) -> &'static [(DocumentType, &'static [Signal])] {
    match insurance_type {
        InsuranceType::Health => HEALTH_FORMS,
        InsuranceType::Vehicle | InsuranceType::Unknown => VEHICLE_FORMS,
    }
}

/// Determines the insurance line of a document.
///
/// The line with the strictly higher score wins. On a tie, health is chosen
/// when any signal fired at all, otherwise the line is unknown.
pub fn classify_insurance_type(text: &str) -> InsuranceType {
    let lowered = text.to_lowercase();
    let health = score(&lowered, HEALTH_LINE);
    let vehicle = score(&lowered, VEHICLE_LINE);

    tracing::debug!(health, vehicle, "insurance line scores");

    if health > vehicle {
        InsuranceType::Health
    } else if vehicle > health {
        InsuranceType::Vehicle
    } else if health > 0 {
        InsuranceType::Health
    } else {
        InsuranceType::Unknown
    }
}

/// Scores every candidate form type for the given line, in tie-break order.
pub fn document_type_scores(text: &str, insurance_type: InsuranceType) -> Vec<(DocumentType, u32)> {
    let lowered = text.to_lowercase();
    form_table(insurance_type)
        .iter()
        .map(|(doc, signals)| (*doc, score(&lowered, signals)))
        .collect()
}

/// Determines the form type of a document under the given insurance line.
///
/// The highest score wins; ties go to the earliest candidate in the table.
/// A best score of zero yields `DocumentType::Unknown`.
pub fn classify_document_type(text: &str, insurance_type: InsuranceType) -> DocumentType {
    let scores = document_type_scores(text, insurance_type);

    let mut best = (DocumentType::Unknown, 0u32);
    for (doc, points) in &scores {
        if *points > best.1 {
            best = (*doc, *points);
        }
    }

    tracing::debug!(
        insurance_type = %insurance_type,
        document_type = %best.0,
        score = best.1,
        "document type resolved"
    );

    best.0
}

/// Classifies both the insurance line and the form type.
pub fn classify(text: &str) -> (InsuranceType, DocumentType) {
    let insurance_type = classify_insurance_type(text);
    (insurance_type, classify_document_type(text, insurance_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_wins_on_keywords() {
        let text = "Patient admitted to City Hospital for treatment";
        assert_eq!(classify_insurance_type(text), InsuranceType::Health);
    }

    #[test]
    fn test_vehicle_wins_on_keywords() {
        let text = "Vehicle registration and chassis number, driver license attached";
        assert_eq!(classify_insurance_type(text), InsuranceType::Vehicle);
    }

    #[test]
    fn test_tie_prefers_health() {
        // "hospital" for health, "police" for vehicle
        let text = "hospital police";
        assert_eq!(classify_insurance_type(text), InsuranceType::Health);
    }

    #[test]
    fn test_no_signals_is_unknown() {
        assert_eq!(classify_insurance_type(""), InsuranceType::Unknown);
        assert_eq!(classify_insurance_type("12345 67"), InsuranceType::Unknown);
    }

    #[test]
    fn test_health_keyword_weighs_two() {
        // health +2 against vehicle + motor/vehicle group = 2: tie, health preferred
        let text = "health vehicle";
        assert_eq!(classify_insurance_type(text), InsuranceType::Health);
        // an extra vehicle signal breaks the tie
        let text = "health vehicle engine";
        assert_eq!(classify_insurance_type(text), InsuranceType::Vehicle);
    }

    #[test]
    fn test_hospital_report_detected() {
        let text = "Admission Date: 2024-01-02\nDischarge Date: 2024-01-05\nBill Amount: 12,000";
        assert_eq!(
            classify_document_type(text, InsuranceType::Health),
            DocumentType::Hospital
        );
    }

    #[test]
    fn test_document_tie_goes_to_first_declared() {
        // "loss date" scores loss 2; "policy number" scores accord 2
        let text = "Policy Number: P-1\nLoss Date: 2024-01-01";
        assert_eq!(
            classify_document_type(text, InsuranceType::Vehicle),
            DocumentType::Accord
        );
        // "rx" alone scores prescription 1, nothing else
        assert_eq!(
            classify_document_type("rx", InsuranceType::Health),
            DocumentType::Prescription
        );
    }

    #[test]
    fn test_zero_score_is_unknown() {
        assert_eq!(
            classify_document_type("nothing to see", InsuranceType::Vehicle),
            DocumentType::Unknown
        );
    }

    #[test]
    fn test_scores_follow_declared_order() {
        let scores = document_type_scores("DL No: DL-1234", InsuranceType::Vehicle);
        let order: Vec<DocumentType> = scores.iter().map(|(d, _)| *d).collect();
        assert_eq!(order, DocumentType::candidates(InsuranceType::Vehicle).to_vec());
        assert_eq!(scores[4], (DocumentType::Dl, 2));
    }
}
