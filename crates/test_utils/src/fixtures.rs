//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the intake pipeline: document texts
//! that classify to a known form, the reference routing scenarios, and a
//! sample rule set.

use domain_routing::ClaimSignals;

/// Fixture for document texts as they come out of text extraction
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// Health / hospital bill
    pub fn hospital_bill() -> &'static str {
        "City Care Hospital - Final Bill\n\
         Claim ID: CLM-2024-0042\n\
         Patient ID: PT-889\n\
         Hospital Code: HC-12\n\
         Diagnosis: Fractured radius\n\
         Admission Date: 2024-03-01\n\
         Discharge Date: 2024-03-05\n\
         Prescription: Calcium supplements\n\
         Bill Amount: 1,25,000.50\n"
    }

    /// Vehicle / first information report
    pub fn police_report() -> &'static str {
        "First Information Report\n\
         Police Station: Shivaji Nagar\n\
         Police Report No: PR-2024-551\n\
         Report Date: 2024-01-09\n\
         Incident Date: 2024-01-08\n\
         Location: FC Road, Pune\n\
         Vehicle Number: MH12AB1234\n\
         Claim ID: CLM-2024-0101\n"
    }

    /// Vehicle / registration certificate
    pub fn registration_certificate() -> &'static str {
        "Vehicle RC Copy\n\
         RC No: RC-MH12-4455\n\
         Registration: MH 12 AB 1234\n\
         Owner: Priya Sharma\n\
         Vehicle Model: Swift VXI\n\
         Manufacture Year: 2019\n\
         Fuel Type: Petrol\n\
         Color: White\n\
         Claim ID: CLM-2024-0077\n"
    }

    /// Vehicle / loss assessment
    pub fn loss_assessment() -> &'static str {
        "Loss Assessment Report - Motor\n\
         Claim ID: CLM-2024-0205\n\
         Inspection Date: 2024-02-12\n\
         Loss Date: 2024-02-10\n\
         Inspection Location: Authorised Garage, Baner\n\
         Vehicle Number: MH14CD5678\n\
         Estimated Damage Cost: 85,000\n\
         Approved Repair Amount: 72,500\n\
         Total Loss: No\n\
         Claim Status: Approved\n"
    }

    /// Vehicle / driving licence, without a claim number
    pub fn driving_licence() -> &'static str {
        "Motor Vehicle Department\n\
         DL No: DL-1420110012345\n\
         Name: Rahul Verma\n\
         DOB: 1990-06-15\n\
         Address: 12 MG Road, Pune\n\
         Valid From: 2015-06-20\n\
         Valid To: 2035-06-19\n\
         Issuing Authority: RTO Pune\n"
    }

    /// Vehicle / ACORD loss notice with every field filled in
    pub fn vehicle_acord() -> &'static str {
        "ACORD Automobile Loss Notice\n\
         Claim ID: CLM-2024-0311\n\
         Policy Number: POL-88213\n\
         Insurance Start Date: 2024-01-01\n\
         Insurance Expiry Date: 2024-12-31\n\
         Incident Type: Rear-end collision\n\
         Incident Date: 2024-03-14\n\
         Vehicle No: MH14CD5678\n\
         Accident Location: Baner Road, Pune\n\
         RC No: RC-MH14-2020-7781\n\
         DL No: DL-1420110099887\n\
         Injuries Reported: No\n\
         Estimated Damage Cost: 42,500\n\
         Police Report Filed: Yes\n\
         Police Report No: PR-2024-612\n"
    }

    /// Health / ACORD notice, no police report number
    pub fn health_acord() -> &'static str {
        "ACORD Health Notice\n\
         Claim ID: CLM-2024-0420\n\
         Policy Number: HP-55102\n\
         Insurance Start Date: 2023-04-01\n\
         Insurance Expiry Date: 2025-03-31\n\
         Incident Type: Fall at home\n\
         Incident Date: 2024-05-02\n\
         Treatment Location: Andheri, Mumbai\n\
         Patient ID: PT-7781\n\
         Hospital: City Care Hospital\n\
         Hospital Code: HC-9\n\
         Injuries Reported: Yes\n\
         Estimated Cost: 1,25,000.50\n\
         Police Report Filed: No\n\
         Diagnosis: Fractured wrist\n"
    }

    /// Health / loss assessment
    pub fn health_loss() -> &'static str {
        "Health Loss Assessment\n\
         Claim ID: CLM-2024-0533\n\
         Inspection Date: 2024-06-10\n\
         Loss Date: 2024-06-01\n\
         Inspection Location: Ruby Hall Clinic, Pune\n\
         Injuries Reported: Y\n\
         Estimated Damage Cost: 60,000\n\
         Approved Repair Amount: 48,250.75\n\
         Total Loss: 0\n\
         Claim Status: Under Review\n\
         Medical Notes: Follow-up physiotherapy advised\n"
    }

    /// Text with no classification signal at all
    pub fn unrecognisable() -> &'static str {
        "0000 1111 2222"
    }
}

/// Fixture for the reference routing scenarios
pub struct SignalFixtures;

impl SignalFixtures {
    /// Routes to "Accident Dept - Low" / "Junior Adjuster"
    pub fn routine_accident() -> ClaimSignals {
        ClaimSignals {
            fraud_score: 0.1,
            complexity_score: 1.0,
            severity_level: "Low".to_string(),
            claim_category: "accident".to_string(),
            ..ClaimSignals::default()
        }
    }

    /// Routes to "SIU (Fraud)" despite high severity
    pub fn suspicious_medical() -> ClaimSignals {
        ClaimSignals {
            fraud_score: 0.75,
            complexity_score: 4.0,
            severity_level: "High".to_string(),
            claim_category: "medical".to_string(),
            insurance_type: core_kernel::InsuranceType::Health,
        }
    }

    /// Routes to "Health Dept - Mid" / "Standard Adjuster"
    pub fn moderate_medical() -> ClaimSignals {
        ClaimSignals {
            fraud_score: 0.2,
            complexity_score: 3.0,
            severity_level: "Medium".to_string(),
            claim_category: "medical".to_string(),
            insurance_type: core_kernel::InsuranceType::Health,
        }
    }
}

/// Fixture for routing rule sets
pub struct RuleFixtures;

impl RuleFixtures {
    /// One rule of every condition type
    pub fn all_condition_types_json() -> &'static str {
        r#"[
            {"name": "high-fraud", "condition_type": "fraud", "condition_value": "high",
             "team": "SIU (Fraud)", "adjuster": "SIU Investigator"},
            {"name": "severe", "condition_type": "severity", "condition_value": "high"},
            {"name": "complex", "condition_type": "complexity", "condition_value": "mid"},
            {"name": "medical", "condition_type": "claim_type", "condition_value": "medical"},
            {"name": "watchlist", "condition_type": "fraud_threshold", "operator": ">", "threshold": 0.5},
            {"name": "severe-and-complex", "condition_type": "combined",
             "severity_category": "high", "complexity_category": "high"}
        ]"#
    }
}
