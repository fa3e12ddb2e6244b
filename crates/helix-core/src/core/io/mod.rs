//! Reading collaborator proposals and writing verified candidates.
//!
//! [`traits::CandidateFile`] is the common interface; [`json::JsonCandidateFile`] implements it
//! for the JSON array format the generative collaborator emits.

pub mod json;
pub mod traits;
