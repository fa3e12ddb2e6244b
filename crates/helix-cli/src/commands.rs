pub mod analyze;
pub mod residues;
pub mod verify;
