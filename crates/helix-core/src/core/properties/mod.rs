//! Pure sequence property calculators.
//!
//! - [`validation`] - Membership test against the 20-letter residue alphabet
//! - [`mass`] - Average molecular weight in kilodaltons
//! - [`stability`] - Hydropathy-derived 0-100 stability heuristic
//! - [`composition`] - Residue and polarity-class counts
//!
//! The calculators are defensive: they accept any string and never fail. Unknown characters
//! contribute nothing, and an empty sequence yields zero. Use [`validation::ValidSequence`] when
//! a caller needs to know that a sequence is well formed.

pub mod composition;
pub mod mass;
pub mod stability;
pub mod validation;

pub use composition::Composition;
pub use mass::{WATER_MASS_DALTONS, molecular_weight, molecular_weight_daltons};
pub use stability::{mean_hydropathy, stability_score};
pub use validation::{SequenceError, ValidSequence, validate};

/// Every property the engine derives from a raw sequence, computed in one pass over the API.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceProfile {
    pub length: usize,
    pub validity: Result<(), SequenceError>,
    pub molecular_weight: f64,
    pub stability_score: f64,
    pub mean_hydropathy: Option<f64>,
    pub composition: Composition,
}

impl SequenceProfile {
    pub fn of(sequence: &str) -> Self {
        Self {
            length: sequence.chars().count(),
            validity: ValidSequence::parse(sequence).map(|_| ()),
            molecular_weight: molecular_weight(sequence),
            stability_score: stability_score(sequence),
            mean_hydropathy: mean_hydropathy(sequence),
            composition: Composition::of(sequence),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_ok()
    }
}
