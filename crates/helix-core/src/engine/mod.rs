//! # Engine Module
//!
//! The verification engine that turns untrusted collaborator proposals into verified
//! candidates.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Identifier prefix and parallelism settings
//! - **Pipeline** ([`pipeline`]) - The filter-then-map verification pass
//! - **Reporting** ([`report`]) - Accepted candidates and the reasons proposals were rejected
//! - **Collaborator Seam** ([`source`]) - The trait through which proposals are obtained
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-level error type
//!
//! The pipeline itself cannot fail: invalid sequences are rejected, not raised. Only obtaining
//! proposals from a [`source::CandidateSource`] or building a configuration can return an error.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod report;
pub mod source;
