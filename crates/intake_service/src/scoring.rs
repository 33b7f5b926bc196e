//! Scoring service port
//!
//! Fraud, complexity and severity are computed by an external model. The
//! intake shell only consumes its output.

use async_trait::async_trait;

use core_kernel::ports::DomainPort;
use core_kernel::PortError;
use domain_intake::DocumentAnalysis;
use domain_routing::ClaimSignals;

/// Port for the external scoring service
#[async_trait]
pub trait ScoringPort: DomainPort {
    /// Scores a claim from the analyses of its documents
    async fn score(
        &self,
        claim_number: &str,
        documents: &[DocumentAnalysis],
    ) -> Result<ClaimSignals, PortError>;
}

/// Scoring adapter that always returns the default signals
///
/// Useful where no scoring service is deployed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScoring;

impl DomainPort for DefaultScoring {}

#[async_trait]
impl ScoringPort for DefaultScoring {
    async fn score(
        &self,
        _claim_number: &str,
        _documents: &[DocumentAnalysis],
    ) -> Result<ClaimSignals, PortError> {
        Ok(ClaimSignals::default())
    }
}
