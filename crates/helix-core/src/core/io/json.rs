use super::traits::CandidateFile;
use crate::core::models::candidate::{CandidateProposal, VerifiedCandidate};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProposalIoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed candidate JSON at line {line}, column {column}: {source}")]
    Json {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for ProposalIoError {
    fn from(source: serde_json::Error) -> Self {
        if source.is_io() {
            return ProposalIoError::Io(source.into());
        }
        ProposalIoError::Json {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    Pretty,
    Compact,
}

/// The collaborator's response format: a single JSON array of camelCase records.
pub struct JsonCandidateFile;

impl JsonCandidateFile {
    pub fn write_candidates_styled(
        candidates: &[VerifiedCandidate],
        writer: &mut impl Write,
        style: JsonStyle,
    ) -> Result<(), ProposalIoError> {
        match style {
            JsonStyle::Pretty => serde_json::to_writer_pretty(&mut *writer, candidates)?,
            JsonStyle::Compact => serde_json::to_writer(&mut *writer, candidates)?,
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Parses proposals from an in-memory response body.
    ///
    /// A blank body is treated as an empty array, which is what the collaborator returns when it
    /// produced no text at all.
    pub fn parse_proposals(body: &str) -> Result<Vec<CandidateProposal>, ProposalIoError> {
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(body)?)
    }
}

impl CandidateFile for JsonCandidateFile {
    type Error = ProposalIoError;

    fn read_proposals(reader: &mut impl BufRead) -> Result<Vec<CandidateProposal>, Self::Error> {
        let mut body = String::new();
        reader.read_to_string(&mut body)?;
        Self::parse_proposals(&body)
    }

    fn write_candidates(
        candidates: &[VerifiedCandidate],
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        Self::write_candidates_styled(candidates, writer, JsonStyle::Pretty)
    }
}
