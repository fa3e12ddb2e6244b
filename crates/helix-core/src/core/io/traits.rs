use crate::core::models::candidate::{CandidateProposal, VerifiedCandidate};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for candidate record file formats.
///
/// Proposals flow in from the generative collaborator; verified candidates flow out to whatever
/// presents them. Implementors handle format-specific parsing and serialization.
pub trait CandidateFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads every proposal from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not in the expected format or any record is missing a
    /// required field. Records are never patched or skipped.
    fn read_proposals(reader: &mut impl BufRead) -> Result<Vec<CandidateProposal>, Self::Error>;

    /// Writes verified candidates, preserving their order.
    fn write_candidates(
        candidates: &[VerifiedCandidate],
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    fn read_proposals_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<CandidateProposal>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_proposals(&mut reader)
    }

    fn write_candidates_to_path<P: AsRef<Path>>(
        candidates: &[VerifiedCandidate],
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_candidates(candidates, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
