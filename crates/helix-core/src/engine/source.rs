use crate::core::io::json::{JsonCandidateFile, ProposalIoError};
use crate::core::io::traits::CandidateFile;
use crate::core::models::candidate::CandidateProposal;
use crate::core::models::request::DesignRequest;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// A failure of the generative collaborator as a whole.
///
/// It is never attributed to an individual sequence: either the batch arrived or it did not.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Generative collaborator failed: {0}")]
    Unavailable(String),

    #[error("Collaborator output could not be read: {0}")]
    Output(#[from] ProposalIoError),
}

/// The seam to the external generative collaborator.
///
/// Implementations turn a design request into a batch of untrusted proposals. Nothing they
/// return is trusted; every proposal goes through the verification pipeline.
pub trait CandidateSource {
    fn generate(&self, request: &DesignRequest) -> Result<Vec<CandidateProposal>, SourceError>;
}

impl<S: CandidateSource + ?Sized> CandidateSource for &S {
    fn generate(&self, request: &DesignRequest) -> Result<Vec<CandidateProposal>, SourceError> {
        (**self).generate(request)
    }
}

/// Returns the same fixed batch for every request.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    proposals: Vec<CandidateProposal>,
}

impl StaticSource {
    pub fn new(proposals: Vec<CandidateProposal>) -> Self {
        Self { proposals }
    }
}

impl CandidateSource for StaticSource {
    fn generate(&self, _request: &DesignRequest) -> Result<Vec<CandidateProposal>, SourceError> {
        Ok(self.proposals.clone())
    }
}

/// Reads a batch previously captured from the collaborator as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CandidateSource for JsonFileSource {
    fn generate(&self, request: &DesignRequest) -> Result<Vec<CandidateProposal>, SourceError> {
        debug!(
            "Reading proposals for target '{}' from {:?}",
            request.target_name, self.path
        );
        Ok(JsonCandidateFile::read_proposals_from_path(&self.path)?)
    }
}
