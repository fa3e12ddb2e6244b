//! Static knowledge about the 20 standard amino acids.
//!
//! The residue table is built at compile time as a perfect-hash map keyed by the uppercase
//! one-letter code, so it is fully populated before first use and can never be mutated.

pub mod table;

pub use table::{AminoAcid, ResidueClass, ResidueProperties, STANDARD_RESIDUE_CODES, lookup};
