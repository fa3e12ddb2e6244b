//! # Workflows Module
//!
//! Top-level entry points that tie a proposal source to the verification engine.
//!
//! - **Verification Workflow** ([`verify`]) - Obtain a batch from the generative collaborator,
//!   verify it, and flag (without removing) candidates that miss the request's constraints.

pub mod verify;
