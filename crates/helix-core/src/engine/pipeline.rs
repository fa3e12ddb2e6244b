use super::config::VerificationConfig;
use super::progress::{Progress, ProgressReporter};
use super::report::{RejectedProposal, VerificationReport};
use crate::core::models::candidate::{CandidateProposal, VerifiedCandidate};
use crate::core::models::ids::{CandidateId, next_batch_stamp};
use crate::core::properties::ValidSequence;
use rayon::prelude::*;
use tracing::{debug, info};

struct Survivor {
    index: usize,
    sequence: ValidSequence,
    proposal: CandidateProposal,
}

/// Verifies a batch and returns only the accepted candidates.
///
/// Proposals with invalid sequences are dropped silently. The result may therefore be shorter
/// than the input; its order follows the surviving inputs.
pub fn verify(
    proposals: Vec<CandidateProposal>,
    config: &VerificationConfig,
    reporter: &ProgressReporter,
) -> Vec<VerifiedCandidate> {
    verify_with_report(proposals, config, reporter).into_accepted()
}

/// Verifies a batch and keeps a record of every rejected proposal.
///
/// 1. Each proposal's sequence is validated; failures become [`RejectedProposal`]s.
/// 2. Each survivor is rebuilt as a [`VerifiedCandidate`] with engine-computed weight and
///    stability and an id of the form `<prefix>-<stamp>-<index>`, where `index` is the
///    proposal's position in the input batch.
///
/// `accepted[i]` always corresponds to the i-th surviving proposal, also when the map step runs
/// on the rayon pool.
pub fn verify_with_report(
    proposals: Vec<CandidateProposal>,
    config: &VerificationConfig,
    reporter: &ProgressReporter,
) -> VerificationReport {
    let batch_size = proposals.len();
    let (survivors, rejected) = screen(proposals, reporter);
    debug!(
        "Screened {} proposal(s): {} valid, {} rejected.",
        batch_size,
        survivors.len(),
        rejected.len()
    );

    let stamp = next_batch_stamp();
    reporter.report(Progress::TaskStart {
        total_steps: survivors.len() as u64,
    });
    let build = |survivor: Survivor| {
        let id = CandidateId::new(&config.id_prefix, stamp, survivor.index);
        let candidate = VerifiedCandidate::new(id, survivor.sequence, survivor.proposal);
        reporter.report(Progress::TaskIncrement);
        candidate
    };
    let accepted: Vec<VerifiedCandidate> = if config.parallel {
        survivors.into_par_iter().map(build).collect()
    } else {
        survivors.into_iter().map(build).collect()
    };
    reporter.report(Progress::TaskFinish);

    info!(
        "Verified {} of {} proposal(s).",
        accepted.len(),
        batch_size
    );
    VerificationReport { accepted, rejected }
}

fn screen(
    proposals: Vec<CandidateProposal>,
    reporter: &ProgressReporter,
) -> (Vec<Survivor>, Vec<RejectedProposal>) {
    let mut survivors = Vec::with_capacity(proposals.len());
    let mut rejected = Vec::new();
    for (index, proposal) in proposals.into_iter().enumerate() {
        match ValidSequence::parse(&proposal.sequence) {
            Ok(sequence) => survivors.push(Survivor {
                index,
                sequence,
                proposal,
            }),
            Err(reason) => {
                debug!(
                    "Rejecting proposal #{} '{}': {}",
                    index, proposal.name, reason
                );
                reporter.report(Progress::ProposalRejected {
                    index,
                    name: proposal.name.clone(),
                });
                rejected.push(RejectedProposal {
                    index,
                    name: proposal.name,
                    sequence: proposal.sequence,
                    reason,
                });
            }
        }
    }
    (survivors, rejected)
}
