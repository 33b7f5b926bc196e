//! Document classification vocabulary
//!
//! Every analysed document is labelled with an insurance line and a form type.
//! The set of form types that can be assigned depends on the insurance line,
//! and the declared order of each candidate list is significant: it is the
//! tie-break order used by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Line of insurance a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceType {
    Health,
    Vehicle,
    #[default]
    Unknown,
}

impl InsuranceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::Health => "health",
            InsuranceType::Vehicle => "vehicle",
            InsuranceType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsuranceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "health" => Ok(InsuranceType::Health),
            "vehicle" => Ok(InsuranceType::Vehicle),
            "unknown" => Ok(InsuranceType::Unknown),
            other => Err(CoreError::UnknownInsuranceType(other.to_string())),
        }
    }
}

/// Form type of a submitted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// ACORD first notice of loss form
    Accord,
    /// Hospital report or bill
    Hospital,
    /// Loss assessment report
    Loss,
    /// Prescription
    Prescription,
    /// First information report filed with the police
    Fir,
    /// Vehicle registration certificate
    Rc,
    /// Driving licence
    Dl,
    #[default]
    Unknown,
}

const HEALTH_CANDIDATES: [DocumentType; 4] = [
    DocumentType::Accord,
    DocumentType::Hospital,
    DocumentType::Loss,
    DocumentType::Prescription,
];

const VEHICLE_CANDIDATES: [DocumentType; 5] = [
    DocumentType::Accord,
    DocumentType::Loss,
    DocumentType::Fir,
    DocumentType::Rc,
    DocumentType::Dl,
];

impl DocumentType {
    /// Candidate form types for an insurance line, in tie-break order.
    ///
    /// Documents whose insurance line could not be determined are scored
    /// against the vehicle forms.
    pub fn candidates(insurance_type: InsuranceType) -> &'static [DocumentType] {
        match insurance_type {
            InsuranceType::Health => &HEALTH_CANDIDATES,
            InsuranceType::Vehicle | InsuranceType::Unknown => &VEHICLE_CANDIDATES,
        }
    }

    /// Returns true if this form type can be assigned under the given line.
    /// `Unknown` is valid everywhere.
    pub fn is_valid_for(&self, insurance_type: InsuranceType) -> bool {
        *self == DocumentType::Unknown || Self::candidates(insurance_type).contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Accord => "accord",
            DocumentType::Hospital => "hospital",
            DocumentType::Loss => "loss",
            DocumentType::Prescription => "prescription",
            DocumentType::Fir => "fir",
            DocumentType::Rc => "rc",
            DocumentType::Dl => "dl",
            DocumentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accord" => Ok(DocumentType::Accord),
            "hospital" => Ok(DocumentType::Hospital),
            "loss" => Ok(DocumentType::Loss),
            "prescription" => Ok(DocumentType::Prescription),
            "fir" => Ok(DocumentType::Fir),
            "rc" => Ok(DocumentType::Rc),
            "dl" => Ok(DocumentType::Dl),
            "unknown" => Ok(DocumentType::Unknown),
            other => Err(CoreError::UnknownDocumentType(other.to_string())),
        }
    }
}

/// Parses a `(insurance_type, document_type)` pair, rejecting form types
/// that do not belong to the given line.
pub fn parse_pair(insurance_type: &str, document_type: &str) -> Result<(InsuranceType, DocumentType), CoreError> {
    let insurance: InsuranceType = insurance_type.parse()?;
    let document: DocumentType = document_type.parse()?;
    if !document.is_valid_for(insurance) {
        return Err(CoreError::mismatch(insurance.as_str(), document.as_str()));
    }
    Ok((insurance, document))
}
