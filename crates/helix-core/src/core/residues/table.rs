use phf::{Map, phf_map};
use std::fmt;

/// Average residue mass and hydropathy of a single standard amino acid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidueProperties {
    pub amino_acid: AminoAcid,
    /// Average isotopic mass of the residue (-NH-CH(R)-CO-) in daltons.
    pub mass: f64,
    /// Kyte-Doolittle hydropathy index.
    pub hydropathy: f64,
}

static RESIDUE_TABLE: Map<char, ResidueProperties> = phf_map! {
    'A' => ResidueProperties { amino_acid: AminoAcid::Alanine, mass: 71.0788, hydropathy: 1.8 },
    'R' => ResidueProperties { amino_acid: AminoAcid::Arginine, mass: 156.1875, hydropathy: -4.5 },
    'N' => ResidueProperties { amino_acid: AminoAcid::Asparagine, mass: 114.1038, hydropathy: -3.5 },
    'D' => ResidueProperties { amino_acid: AminoAcid::AsparticAcid, mass: 115.0886, hydropathy: -3.5 },
    'C' => ResidueProperties { amino_acid: AminoAcid::Cysteine, mass: 103.1388, hydropathy: 2.5 },
    'E' => ResidueProperties { amino_acid: AminoAcid::GlutamicAcid, mass: 129.1155, hydropathy: -3.5 },
    'Q' => ResidueProperties { amino_acid: AminoAcid::Glutamine, mass: 128.1307, hydropathy: -3.5 },
    'G' => ResidueProperties { amino_acid: AminoAcid::Glycine, mass: 57.0519, hydropathy: -0.4 },
    'H' => ResidueProperties { amino_acid: AminoAcid::Histidine, mass: 137.1411, hydropathy: -3.2 },
    'I' => ResidueProperties { amino_acid: AminoAcid::Isoleucine, mass: 113.1594, hydropathy: 4.5 },
    'L' => ResidueProperties { amino_acid: AminoAcid::Leucine, mass: 113.1594, hydropathy: 3.8 },
    'K' => ResidueProperties { amino_acid: AminoAcid::Lysine, mass: 128.1741, hydropathy: -3.9 },
    'M' => ResidueProperties { amino_acid: AminoAcid::Methionine, mass: 131.1926, hydropathy: 1.9 },
    'F' => ResidueProperties { amino_acid: AminoAcid::Phenylalanine, mass: 147.1766, hydropathy: 2.8 },
    'P' => ResidueProperties { amino_acid: AminoAcid::Proline, mass: 97.1167, hydropathy: -1.6 },
    'S' => ResidueProperties { amino_acid: AminoAcid::Serine, mass: 87.0782, hydropathy: -0.8 },
    'T' => ResidueProperties { amino_acid: AminoAcid::Threonine, mass: 101.1051, hydropathy: -0.7 },
    'W' => ResidueProperties { amino_acid: AminoAcid::Tryptophan, mass: 186.2132, hydropathy: -0.9 },
    'Y' => ResidueProperties { amino_acid: AminoAcid::Tyrosine, mass: 163.1760, hydropathy: -1.3 },
    'V' => ResidueProperties { amino_acid: AminoAcid::Valine, mass: 99.1326, hydropathy: 4.2 },
};

/// The one-letter alphabet accepted by the validator, in table order.
pub const STANDARD_RESIDUE_CODES: [char; 20] = [
    'A', 'R', 'N', 'D', 'C', 'E', 'Q', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T', 'W',
    'Y', 'V',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,
    Glycine,
    Isoleucine,
    Leucine,
    Proline,
    Valine,

    // --- Aromatic ---
    Phenylalanine,
    Tryptophan,
    Tyrosine,

    // --- Polar, Uncharged ---
    Asparagine,
    Cysteine,
    Glutamine,
    Serine,
    Threonine,
    Methionine,

    // --- Positively Charged (Basic) ---
    Arginine,
    Histidine,
    Lysine,

    // --- Negatively Charged (Acidic) ---
    AsparticAcid,
    GlutamicAcid,
}

/// Coarse polarity split used when summarizing a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueClass {
    Polar,
    Nonpolar,
}

impl AminoAcid {
    /// Looks up a residue by its one-letter code, ignoring case.
    pub fn from_code(code: char) -> Option<Self> {
        lookup(code).map(|p| p.amino_acid)
    }

    pub fn code(&self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Arginine => 'R',
            AminoAcid::Asparagine => 'N',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::Cysteine => 'C',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Lysine => 'K',
            AminoAcid::Methionine => 'M',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Proline => 'P',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Valine => 'V',
        }
    }

    pub fn three_letter_code(&self) -> &'static str {
        match self {
            AminoAcid::Alanine => "ALA",
            AminoAcid::Arginine => "ARG",
            AminoAcid::Asparagine => "ASN",
            AminoAcid::AsparticAcid => "ASP",
            AminoAcid::Cysteine => "CYS",
            AminoAcid::GlutamicAcid => "GLU",
            AminoAcid::Glutamine => "GLN",
            AminoAcid::Glycine => "GLY",
            AminoAcid::Histidine => "HIS",
            AminoAcid::Isoleucine => "ILE",
            AminoAcid::Leucine => "LEU",
            AminoAcid::Lysine => "LYS",
            AminoAcid::Methionine => "MET",
            AminoAcid::Phenylalanine => "PHE",
            AminoAcid::Proline => "PRO",
            AminoAcid::Serine => "SER",
            AminoAcid::Threonine => "THR",
            AminoAcid::Tryptophan => "TRP",
            AminoAcid::Tyrosine => "TYR",
            AminoAcid::Valine => "VAL",
        }
    }

    /// Glycine and cysteine count as polar here, matching the residue coloring of the design
    /// dashboard rather than a strict side-chain chemistry classification.
    pub fn class(&self) -> ResidueClass {
        match self {
            AminoAcid::Alanine
            | AminoAcid::Phenylalanine
            | AminoAcid::Isoleucine
            | AminoAcid::Leucine
            | AminoAcid::Methionine
            | AminoAcid::Proline
            | AminoAcid::Valine
            | AminoAcid::Tryptophan => ResidueClass::Nonpolar,
            _ => ResidueClass::Polar,
        }
    }

    pub fn properties(&self) -> &'static ResidueProperties {
        // Every variant has an entry; the table and `code` are kept in lockstep by the tests.
        &RESIDUE_TABLE[&self.code()]
    }

    pub fn mass(&self) -> f64 {
        self.properties().mass
    }

    pub fn hydropathy(&self) -> f64 {
        self.properties().hydropathy
    }

    /// All 20 standard residues in table order.
    pub fn all() -> impl Iterator<Item = AminoAcid> {
        STANDARD_RESIDUE_CODES
            .iter()
            .filter_map(|&code| AminoAcid::from_code(code))
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.three_letter_code())
    }
}

/// Case-insensitive lookup of a one-letter code in the residue table.
pub fn lookup(code: char) -> Option<&'static ResidueProperties> {
    RESIDUE_TABLE.get(&code.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_contains_exactly_the_standard_alphabet() {
        assert_eq!(RESIDUE_TABLE.len(), 20);
        for code in STANDARD_RESIDUE_CODES {
            assert!(RESIDUE_TABLE.contains_key(&code), "missing {}", code);
        }
    }

    #[test]
    fn code_round_trips_through_table_for_every_residue() {
        for code in STANDARD_RESIDUE_CODES {
            let aa = AminoAcid::from_code(code).unwrap();
            assert_eq!(aa.code(), code);
            assert_eq!(aa.properties().amino_acid, aa);
        }
        assert_eq!(AminoAcid::all().count(), 20);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup('g'), lookup('G'));
        assert_eq!(AminoAcid::from_code('w'), Some(AminoAcid::Tryptophan));
    }

    #[test]
    fn lookup_rejects_ambiguity_codes_and_non_letters() {
        for code in ['X', 'B', 'Z', 'U', 'O', 'J', '1', ' ', '*', '-', 'é'] {
            assert!(lookup(code).is_none(), "unexpected entry for {:?}", code);
        }
    }

    #[test]
    fn hydropathy_extremes_are_isoleucine_and_arginine() {
        let max = AminoAcid::all()
            .max_by(|a, b| a.hydropathy().total_cmp(&b.hydropathy()))
            .unwrap();
        let min = AminoAcid::all()
            .min_by(|a, b| a.hydropathy().total_cmp(&b.hydropathy()))
            .unwrap();
        assert_eq!(max, AminoAcid::Isoleucine);
        assert_eq!(min, AminoAcid::Arginine);
        assert_eq!(max.hydropathy(), 4.5);
        assert_eq!(min.hydropathy(), -4.5);
    }

    #[test]
    fn glycine_has_smallest_mass_and_tryptophan_largest() {
        assert_eq!(AminoAcid::Glycine.mass(), 57.0519);
        assert_eq!(AminoAcid::Tryptophan.mass(), 186.2132);
        for aa in AminoAcid::all() {
            assert!(aa.mass() >= 57.0519 && aa.mass() <= 186.2132);
        }
    }

    #[test]
    fn residue_classes_split_twelve_polar_eight_nonpolar() {
        let polar = AminoAcid::all()
            .filter(|aa| aa.class() == ResidueClass::Polar)
            .count();
        assert_eq!(polar, 12);
        assert_eq!(AminoAcid::Glycine.class(), ResidueClass::Polar);
        assert_eq!(AminoAcid::Tryptophan.class(), ResidueClass::Nonpolar);
    }

    #[test]
    fn display_uses_three_letter_code() {
        assert_eq!(AminoAcid::AsparticAcid.to_string(), "ASP");
    }
}
