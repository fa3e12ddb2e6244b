use crate::core::residues::{AminoAcid, ResidueClass, lookup};
use std::collections::BTreeMap;

/// Residue counts of a sequence, split by polarity class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    pub polar: usize,
    pub nonpolar: usize,
    pub unknown: usize,
    counts: BTreeMap<char, usize>,
}

impl Composition {
    pub fn of(sequence: &str) -> Self {
        let mut composition = Self::default();
        for c in sequence.chars() {
            match lookup(c) {
                Some(props) => {
                    match props.amino_acid.class() {
                        ResidueClass::Polar => composition.polar += 1,
                        ResidueClass::Nonpolar => composition.nonpolar += 1,
                    }
                    *composition
                        .counts
                        .entry(props.amino_acid.code())
                        .or_default() += 1;
                }
                None => composition.unknown += 1,
            }
        }
        composition
    }

    pub fn count(&self, amino_acid: AminoAcid) -> usize {
        self.counts.get(&amino_acid.code()).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.polar + self.nonpolar + self.unknown
    }

    /// Residue codes present in the sequence with their counts, in alphabetical order.
    pub fn counts(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}
