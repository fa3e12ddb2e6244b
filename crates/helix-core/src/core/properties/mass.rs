use crate::core::residues::lookup;
use crate::core::utils::rounding::round_to;

/// Mass of the water added back for the terminal H and OH of a free chain, in daltons.
pub const WATER_MASS_DALTONS: f64 = 18.01524;

/// Unrounded average mass of a chain in daltons.
///
/// Residue codes are looked up case-insensitively. Characters outside the residue table add no
/// mass. An empty sequence has no chain and therefore no terminal water.
pub fn molecular_weight_daltons(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let residues: f64 = sequence
        .chars()
        .filter_map(lookup)
        .map(|props| props.mass)
        .sum();
    residues + WATER_MASS_DALTONS
}

/// Average molecular weight in kilodaltons, rounded to two decimals.
pub fn molecular_weight(sequence: &str) -> f64 {
    round_to(molecular_weight_daltons(sequence) / 1000.0, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_sequence_weighs_nothing() {
        assert_eq!(molecular_weight(""), 0.0);
        assert_eq!(molecular_weight_daltons(""), 0.0);
    }

    #[test]
    fn single_glycine_includes_terminal_water() {
        assert!((molecular_weight_daltons("G") - (57.0519 + 18.01524)).abs() < EPS);
        assert_eq!(molecular_weight("G"), 0.08);
    }

    #[test]
    fn tetra_alanine_rounds_to_three_tenths() {
        assert!((molecular_weight_daltons("AAAA") - 302.33524).abs() < EPS);
        assert_eq!(molecular_weight("AAAA"), 0.30);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(molecular_weight("ACD"), molecular_weight("acd"));
        assert_eq!(
            molecular_weight_daltons("ACD"),
            molecular_weight_daltons("aCd")
        );
    }

    #[test]
    fn unknown_characters_contribute_zero_mass() {
        assert!(
            (molecular_weight_daltons("AXA") - molecular_weight_daltons("AA")).abs() < EPS
        );
        assert!((molecular_weight_daltons("??") - WATER_MASS_DALTONS).abs() < EPS);
    }

    #[test]
    fn hundred_residue_chain_lands_in_expected_range() {
        let seq = "MKTAYIAKQRQISFVKSHFSRQ".repeat(5);
        let kda = molecular_weight(&seq);
        assert!(kda > 12.0 && kda < 14.0, "got {}", kda);
    }
}
