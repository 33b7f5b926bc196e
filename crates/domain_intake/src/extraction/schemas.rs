//! Per-form field schemas
//!
//! Each `(InsuranceType, DocumentType)` pair owns an ordered list of fields.
//! A field's strategies are tried in order and the first non-empty capture wins.

use core_kernel::{DocumentType, InsuranceType};

use super::patterns::{Strategy, ValuePattern};

/// How a captured string is turned into a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Number,
    Bool,
}

#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub strategies: &'static [Strategy],
}

macro_rules! lbl {
    ($labels:expr, $value:expr) => {
        Strategy::Labeled {
            labels: &$labels,
            value: $value,
        }
    };
}

macro_rules! eol {
    ($labels:expr) => {
        Strategy::Labeled {
            labels: &$labels,
            value: ValuePattern::Line,
        }
    };
}

const fn field(name: &'static str, kind: FieldKind, strategies: &'static [Strategy]) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        strategies,
    }
}

use FieldKind::{Bool, Date, Number, Text};
use ValuePattern::{Amount, Code, IsoDate, Plate, PrefixedCode, Year};

// Shared fields

const CLAIM_ID: FieldSpec = field(
    "claim_id",
    Text,
    &[
        lbl!(["Claim ID", "Claim"], PrefixedCode),
        Strategy::Bare(r"\b(CL[Ml]-[A-Za-z0-9-]{6,})\b"),
    ],
);

const RC_NO: FieldSpec = field(
    "rc_no",
    Text,
    &[
        lbl!(["RC No", "RC Number", "Registration Certificate"], Code),
        Strategy::Bare(r"\bRC-?[A-Za-z0-9-]+\b"),
    ],
);

const DL_NO: FieldSpec = field(
    "dl_no",
    Text,
    &[
        lbl!(["DL No", "Driving License", "Driver Licence"], Code),
        Strategy::Bare(r"\bDL-?[A-Za-z0-9-]+\b"),
    ],
);

const REGISTRATION: FieldSpec = field(
    "registration",
    Text,
    &[
        lbl!(["Registration", "Vehicle No", "Vehicle Number"], Plate),
        Strategy::Bare(r"\b[A-Z]{2}\s?\d{1,2}\s?[A-Z]{1,3}\s?\d{3,5}\b"),
    ],
);

const POLICY_NUMBER: FieldSpec = field("policy_number", Text, &[lbl!(["Policy Number", "Policy No"], Code)]);
const INSURANCE_START: FieldSpec = field(
    "insurance_start_date",
    Date,
    &[lbl!(["Insurance Start Date", "Policy Start"], IsoDate)],
);
const INSURANCE_EXPIRY: FieldSpec = field(
    "insurance_expiry_date",
    Date,
    &[lbl!(["Insurance Expiry Date", "Policy End"], IsoDate)],
);
const POLICE_REPORT_FILED: FieldSpec = field("police_report_filed", Bool, &[eol!(["Police Report Filed"])]);
const POLICE_REPORT_NO: FieldSpec = field(
    "police_report_no",
    Text,
    &[lbl!(["Police Report No", "PR No"], Code)],
);
const INSPECTION_DATE: FieldSpec = field("inspection_date", Date, &[lbl!(["Inspection Date"], IsoDate)]);
const LOSS_DATE: FieldSpec = field("loss_date", Date, &[lbl!(["Loss Date"], IsoDate)]);
const APPROVED_REPAIR: FieldSpec = field(
    "approved_repair_amount",
    Number,
    &[lbl!(["Approved Repair Amount", "Approved Amount"], Amount)],
);
const TOTAL_LOSS: FieldSpec = field("total_loss", Bool, &[eol!(["Total Loss"])]);
const CLAIM_STATUS: FieldSpec = field("claim_status", Text, &[eol!(["Claim Status", "Status"])]);
const PATIENT_ID: FieldSpec = field("patient_id", Text, &[lbl!(["Patient ID"], Code)]);
const HOSPITAL_CODE: FieldSpec = field("hospital_code", Text, &[lbl!(["Hospital Code"], Code)]);
const ESTIMATED_COST: FieldSpec = field(
    "estimated_damage_cost",
    Number,
    &[lbl!(["Estimated Damage Cost", "Estimated Cost"], Amount)],
);
const INJURIES_REPORTED: FieldSpec = field("injuries_reported", Bool, &[eol!(["Injuries Reported"])]);

// Vehicle forms

const VEHICLE_ACCORD: &[FieldSpec] = &[
    CLAIM_ID,
    POLICY_NUMBER,
    INSURANCE_START,
    INSURANCE_EXPIRY,
    field("incident_type", Text, &[eol!(["Incident Type", "Accident Type"])]),
    field(
        "incident_date",
        Date,
        &[lbl!(["Incident Date", "Accident Date"], IsoDate)],
    ),
    REGISTRATION,
    field("location", Text, &[eol!(["Location", "Accident Location"])]),
    RC_NO,
    DL_NO,
    field("injuries_reported", Bool, &[eol!(["Injuries Reported", "Injuries"])]),
    field(
        "estimated_damage_cost",
        Number,
        &[lbl!(
            ["Estimated Damage Cost", "Damage Cost", "Estimated Damage"],
            Amount
        )],
    ),
    POLICE_REPORT_FILED,
    POLICE_REPORT_NO,
];

const VEHICLE_DL: &[FieldSpec] = &[
    CLAIM_ID,
    DL_NO,
    field("name", Text, &[eol!(["Name"])]),
    field("dob", Date, &[lbl!(["DOB", "Date of Birth"], IsoDate)]),
    field("address", Text, &[eol!(["Address"])]),
    field("valid_from", Date, &[lbl!(["Valid From", "Issue Date"], IsoDate)]),
    field("valid_to", Date, &[lbl!(["Valid To", "Expiry Date"], IsoDate)]),
    field("issuing_authority", Text, &[eol!(["Issuing Authority", "RTO"])]),
    field("remarks", Text, &[eol!(["Remarks", "Notes"])]),
];

const VEHICLE_LOSS: &[FieldSpec] = &[
    CLAIM_ID,
    INSPECTION_DATE,
    LOSS_DATE,
    field(
        "inspection_location",
        Text,
        &[eol!(["Inspection Location", "Assessment Site"])],
    ),
    REGISTRATION,
    RC_NO,
    DL_NO,
    INJURIES_REPORTED,
    ESTIMATED_COST,
    APPROVED_REPAIR,
    TOTAL_LOSS,
    CLAIM_STATUS,
];

const VEHICLE_FIR: &[FieldSpec] = &[
    POLICE_REPORT_NO,
    CLAIM_ID,
    field("report_date", Date, &[lbl!(["Report Date"], IsoDate)]),
    field("incident_date", Date, &[lbl!(["Incident Date"], IsoDate)]),
    field("location", Text, &[eol!(["Location"])]),
    REGISTRATION,
    RC_NO,
    DL_NO,
    INJURIES_REPORTED,
    field(
        "estimated_damage_cost",
        Number,
        &[lbl!(["Estimated Damage Cost", "Damage Cost"], Amount)],
    ),
];

const VEHICLE_RC: &[FieldSpec] = &[
    CLAIM_ID,
    RC_NO,
    REGISTRATION,
    field("owner", Text, &[eol!(["Owner", "Owner Name"])]),
    field(
        "vehicle_model",
        Text,
        &[eol!(["Vehicle Model", "Model", "Make and Model"])],
    ),
    field(
        "manufacture_year",
        Text,
        &[lbl!(["Manufacture Year", "Year of Manufacture"], Year)],
    ),
    field("fuel_type", Text, &[eol!(["Fuel Type", "Fuel"])]),
    field("color", Text, &[eol!(["Color", "Colour"])]),
    field("notes", Text, &[eol!(["Notes", "Remarks"])]),
];

// Health forms

const HEALTH_ACCORD: &[FieldSpec] = &[
    CLAIM_ID,
    POLICY_NUMBER,
    INSURANCE_START,
    INSURANCE_EXPIRY,
    field("incident_type", Text, &[eol!(["Incident Type"])]),
    field("incident_date", Date, &[lbl!(["Incident Date"], IsoDate)]),
    field("location", Text, &[eol!(["Location", "Treatment Location"])]),
    PATIENT_ID,
    HOSPITAL_CODE,
    field("injuries_reported", Bool, &[eol!(["Injuries Reported", "Injuries"])]),
    ESTIMATED_COST,
    POLICE_REPORT_FILED,
    POLICE_REPORT_NO,
    field("diagnosis", Text, &[eol!(["Diagnosis"])]),
    field("hospital", Text, &[eol!(["Hospital"])]),
];

const HEALTH_HOSPITAL: &[FieldSpec] = &[
    CLAIM_ID,
    PATIENT_ID,
    HOSPITAL_CODE,
    field("prescription", Text, &[eol!(["Prescription"])]),
    field("admission_date", Date, &[lbl!(["Admission Date"], IsoDate)]),
    field("discharge_date", Date, &[lbl!(["Discharge Date"], IsoDate)]),
    field("bill_amount", Number, &[lbl!(["Bill Amount", "Bill"], Amount)]),
];

const HEALTH_LOSS: &[FieldSpec] = &[
    CLAIM_ID,
    INSPECTION_DATE,
    LOSS_DATE,
    field("inspection_location", Text, &[eol!(["Inspection Location"])]),
    INJURIES_REPORTED,
    ESTIMATED_COST,
    APPROVED_REPAIR,
    TOTAL_LOSS,
    CLAIM_STATUS,
    field("medical_notes", Text, &[eol!(["Medical Notes", "Notes"])]),
];

/// Returns the field schema for a form, or an empty list when the pair has none
pub fn fields_for(insurance_type: InsuranceType, document_type: DocumentType) -> &'static [FieldSpec] {
    use DocumentType as D;
    use InsuranceType as I;

    match (insurance_type, document_type) {
        (I::Vehicle, D::Accord) => VEHICLE_ACCORD,
        (I::Vehicle, D::Dl) => VEHICLE_DL,
        (I::Vehicle, D::Loss) => VEHICLE_LOSS,
        (I::Vehicle, D::Fir) => VEHICLE_FIR,
        (I::Vehicle, D::Rc) => VEHICLE_RC,
        (I::Health, D::Accord) => HEALTH_ACCORD,
        (I::Health, D::Hospital) => HEALTH_HOSPITAL,
        (I::Health, D::Loss) => HEALTH_LOSS,
        _ => &[],
    }
}

/// Every pair that owns a non-empty schema
pub const SCHEMA_PAIRS: [(InsuranceType, DocumentType); 8] = [
    (InsuranceType::Vehicle, DocumentType::Accord),
    (InsuranceType::Vehicle, DocumentType::Dl),
    (InsuranceType::Vehicle, DocumentType::Loss),
    (InsuranceType::Vehicle, DocumentType::Fir),
    (InsuranceType::Vehicle, DocumentType::Rc),
    (InsuranceType::Health, DocumentType::Accord),
    (InsuranceType::Health, DocumentType::Hospital),
    (InsuranceType::Health, DocumentType::Loss),
];
