use super::candidate::VerifiedCandidate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the caller asked the generative collaborator for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    pub target_name: String,
    pub desired_function: String,
    pub constraints: DesignConstraints,
}

/// Design targets passed to the collaborator as guidance.
///
/// The verification pipeline does not filter on these. Whether results that miss them should be
/// dropped is an open product decision, so [`DesignConstraints::violations`] only reports them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConstraints {
    /// Minimum stability score, 0-100.
    pub min_stability: f64,
    /// Maximum molecular weight in kDa.
    pub max_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintViolation {
    StabilityBelowMinimum { minimum: f64, actual: f64 },
    WeightAboveMaximum { maximum: f64, actual: f64 },
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::StabilityBelowMinimum { minimum, actual } => {
                write!(f, "stability {:.1} below minimum {:.1}", actual, minimum)
            }
            ConstraintViolation::WeightAboveMaximum { maximum, actual } => {
                write!(f, "weight {:.2} kDa above maximum {:.2} kDa", actual, maximum)
            }
        }
    }
}

impl DesignConstraints {
    /// Lists the constraints that the candidate's engine-computed values miss.
    pub fn violations(&self, candidate: &VerifiedCandidate) -> Vec<ConstraintViolation> {
        let mut violations = Vec::new();
        if candidate.stability_score() < self.min_stability {
            violations.push(ConstraintViolation::StabilityBelowMinimum {
                minimum: self.min_stability,
                actual: candidate.stability_score(),
            });
        }
        if candidate.molecular_weight() > self.max_weight {
            violations.push(ConstraintViolation::WeightAboveMaximum {
                maximum: self.max_weight,
                actual: candidate.molecular_weight(),
            });
        }
        violations
    }
}
