//! Data records exchanged with the generative collaborator and the presentation layer.
//!
//! - [`candidate`] - Untrusted proposals and the verified candidates built from them
//! - [`request`] - The design request and its (unenforced) constraints
//! - [`ids`] - Candidate identifiers and the batch stamp generator

pub mod candidate;
pub mod ids;
pub mod request;
