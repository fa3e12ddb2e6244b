use crate::core::residues::{AminoAcid, lookup};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,

    #[error("Non-standard residue symbol {symbol:?} at position {position}")]
    InvalidResidue { symbol: char, position: usize },
}

/// A sequence that contains only the 20 standard one-letter residue codes.
///
/// The only way to obtain one is [`ValidSequence::parse`], so holding a `ValidSequence` is proof
/// that validation happened. The original spelling (including case) is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidSequence(String);

impl ValidSequence {
    /// Validates `sequence` and reports the first offending character, if any.
    ///
    /// Positions are zero-based character indices, not byte offsets.
    pub fn parse(sequence: &str) -> Result<Self, SequenceError> {
        if sequence.is_empty() {
            return Err(SequenceError::Empty);
        }
        if let Some((position, symbol)) = sequence
            .chars()
            .enumerate()
            .find(|(_, c)| lookup(*c).is_none())
        {
            return Err(SequenceError::InvalidResidue { symbol, position });
        }
        Ok(Self(sequence.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn residues(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.0.chars().filter_map(AminoAcid::from_code)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns `true` when `sequence` is non-empty and made only of the 20 standard residue codes,
/// in any case.
pub fn validate(sequence: &str) -> bool {
    ValidSequence::parse(sequence).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::residues::STANDARD_RESIDUE_CODES;

    #[test]
    fn full_alphabet_is_valid_in_any_case() {
        let upper: String = STANDARD_RESIDUE_CODES.iter().collect();
        let lower = upper.to_lowercase();
        let mixed: String = upper
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_lowercase() } else { c })
            .collect();
        assert!(validate(&upper));
        assert!(validate(&lower));
        assert!(validate(&mixed));
    }

    #[test]
    fn empty_sequence_is_invalid() {
        assert!(!validate(""));
        assert_eq!(ValidSequence::parse(""), Err(SequenceError::Empty));
    }

    #[test]
    fn single_foreign_character_invalidates_whole_sequence() {
        for bad in ["MKTX", "MKT1", "MK T", "MKT\n", "BMKT", "MZKT", "MKUT", "MK-T", "MKT*"] {
            assert!(!validate(bad), "{:?} should be invalid", bad);
        }
    }

    #[test]
    fn parse_reports_first_offending_character_and_position() {
        assert_eq!(
            ValidSequence::parse("ACDX1"),
            Err(SequenceError::InvalidResidue {
                symbol: 'X',
                position: 3
            })
        );
    }

    #[test]
    fn case_folding_is_ascii_only() {
        // Unicode uppercasing would turn these into "MKI" and "MKSS".
        assert!(!validate("MKı"));
        assert!(!validate("MKß"));
        assert_eq!(
            ValidSequence::parse("MKı"),
            Err(SequenceError::InvalidResidue {
                symbol: 'ı',
                position: 2
            })
        );
    }

    #[test]
    fn position_counts_characters_not_bytes() {
        assert_eq!(
            ValidSequence::parse("Aé!"),
            Err(SequenceError::InvalidResidue {
                symbol: 'é',
                position: 1
            })
        );
    }

    #[test]
    fn valid_sequence_keeps_original_spelling() {
        let seq = ValidSequence::parse("mKtA").unwrap();
        assert_eq!(seq.as_str(), "mKtA");
        assert_eq!(seq.len(), 4);
        let residues: Vec<_> = seq.residues().collect();
        assert_eq!(
            residues,
            vec![
                AminoAcid::Methionine,
                AminoAcid::Lysine,
                AminoAcid::Threonine,
                AminoAcid::Alanine
            ]
        );
    }
}
