use crate::core::models::candidate::VerifiedCandidate;
use crate::core::models::request::{ConstraintViolation, DesignConstraints};
use crate::core::properties::SequenceError;

/// A proposal that did not make it through validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedProposal {
    /// Position of the proposal in the collaborator's batch.
    pub index: usize,
    pub name: String,
    pub sequence: String,
    pub reason: SequenceError,
}

/// Outcome of one verification pass.
///
/// `accepted` is exactly what the silent-filtering pipeline returns; `rejected` additionally
/// records why the missing proposals were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationReport {
    pub accepted: Vec<VerifiedCandidate>,
    pub rejected: Vec<RejectedProposal>,
}

impl VerificationReport {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Fraction of proposals that passed validation; `None` for an empty batch.
    pub fn acceptance_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.accepted.len() as f64 / total as f64),
        }
    }

    /// Pairs each accepted candidate with the constraints it misses. Candidates that satisfy
    /// every constraint are omitted. Nothing is removed from the report.
    pub fn constraint_violations<'a>(
        &'a self,
        constraints: &DesignConstraints,
    ) -> Vec<(&'a VerifiedCandidate, Vec<ConstraintViolation>)> {
        self.accepted
            .iter()
            .filter_map(|candidate| {
                let violations = constraints.violations(candidate);
                (!violations.is_empty()).then_some((candidate, violations))
            })
            .collect()
    }

    pub fn into_accepted(self) -> Vec<VerifiedCandidate> {
        self.accepted
    }
}
