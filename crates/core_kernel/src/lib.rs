//! Core Kernel - Foundational types for the claim intake pipeline
//!
//! This crate provides the building blocks shared by the intake and routing domains:
//! - The document classification vocabulary (`InsuranceType`, `DocumentType`)
//! - Strongly-typed identifiers
//! - Error types for the kernel and for collaborator ports

pub mod document;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use document::{InsuranceType, DocumentType, parse_pair};
pub use identifiers::{DocumentId, RuleId};
pub use error::CoreError;
pub use ports::PortError;
