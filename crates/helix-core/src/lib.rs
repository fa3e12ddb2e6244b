//! # HelixGen Core Library
//!
//! A deterministic biophysical property engine that checks protein candidates proposed by an
//! external generative model. Proposed sequences are validated against the 20 standard amino
//! acids, and the proposed molecular weight and stability values are replaced with values
//! computed from the sequence itself.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** The fixed residue table, pure sequence property calculators
//!   (validation, molecular weight, hydropathy-derived stability), the candidate and request data
//!   models, and JSON I/O for candidate records.
//!
//! - **[`engine`]: The Logic Core.** The verification pipeline that filters proposals with
//!   invalid sequences and rebuilds the survivors as verified candidates, together with its
//!   configuration, progress reporting, and the seam to the generative collaborator.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures that obtain proposals from a
//!   [`engine::source::CandidateSource`] and run them through the pipeline.
//!
//! Every calculator in [`core`] is a pure function of its input and the static residue table,
//! so all of them can be called concurrently without synchronization.

pub mod core;
pub mod engine;
pub mod workflows;
