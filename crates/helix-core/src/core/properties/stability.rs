//! Hydropathy-derived stability heuristic.
//!
//! The score is a simplified proxy: the mean Kyte-Doolittle hydropathy of the sequence mapped
//! through `50 + mean * 10` and clamped to `[0, 100]`. A neutral sequence sits at 50. It is NOT
//! the dipeptide-based instability index of Guruprasad et al. (1990) and must not be read as a
//! thermodynamic quantity.

use crate::core::residues::lookup;
use crate::core::utils::rounding::round_to;

const NEUTRAL_SCORE: f64 = 50.0;
const HYDROPATHY_SCALE: f64 = 10.0;
const MIN_SCORE: f64 = 0.0;
const MAX_SCORE: f64 = 100.0;

/// Mean hydropathy over every character of the sequence, or `None` when it is empty.
///
/// Characters outside the residue table contribute zero but still count toward the length.
pub fn mean_hydropathy(sequence: &str) -> Option<f64> {
    let (total, count) = sequence.chars().fold((0.0, 0usize), |(total, count), c| {
        let value = lookup(c).map_or(0.0, |props| props.hydropathy);
        (total + value, count + 1)
    });
    if count == 0 {
        None
    } else {
        Some(total / count as f64)
    }
}

/// Stability score in `[0, 100]` rounded to one decimal. An empty sequence scores 0.
pub fn stability_score(sequence: &str) -> f64 {
    let Some(mean) = mean_hydropathy(sequence) else {
        return 0.0;
    };
    let score = round_to(NEUTRAL_SCORE + mean * HYDROPATHY_SCALE, 1);
    score.clamp(MIN_SCORE, MAX_SCORE)
}
