//! # Core Module
//!
//! Stateless building blocks of the property engine.
//!
//! - **Residue Knowledge** ([`residues`]) - The static table of the 20 standard amino acids with
//!   their average residue masses and Kyte-Doolittle hydropathy values
//! - **Sequence Properties** ([`properties`]) - Validation, molecular weight, stability scoring
//!   and composition analysis of one-letter sequences
//! - **Data Models** ([`models`]) - Candidate proposals, verified candidates, design requests and
//!   candidate identifiers
//! - **File I/O** ([`io`]) - Reading collaborator proposals and writing verified candidates
//!
//! Nothing in this module holds mutable state; every operation reads only its arguments and the
//! residue table.

pub mod io;
pub mod models;
pub mod properties;
pub mod residues;
pub(crate) mod utils;
