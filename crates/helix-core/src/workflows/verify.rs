use crate::core::models::candidate::{CandidateProposal, VerifiedCandidate};
use crate::core::models::request::DesignRequest;
use crate::engine::config::VerificationConfig;
use crate::engine::error::EngineError;
use crate::engine::pipeline;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::report::VerificationReport;
use crate::engine::source::CandidateSource;
use tracing::{info, instrument, warn};

/// Runs the full design round: ask `source` for proposals, then verify them.
///
/// A collaborator failure aborts the round with a single [`EngineError::Source`]. Candidates
/// that miss the request's constraints are logged but kept in the report.
#[instrument(skip_all, name = "verification_workflow", fields(target_name = %request.target_name))]
pub fn run(
    request: &DesignRequest,
    source: &impl CandidateSource,
    config: &VerificationConfig,
    reporter: &ProgressReporter,
) -> Result<VerificationReport, EngineError> {
    // === Phase 1: Obtain proposals from the collaborator ===
    reporter.report(Progress::PhaseStart { name: "Generation" });
    info!(
        "Requesting proposals for '{}' (min stability {}, max weight {} kDa).",
        request.target_name, request.constraints.min_stability, request.constraints.max_weight
    );
    let proposals = source.generate(request)?;
    reporter.report(Progress::PhaseFinish);
    info!("Collaborator returned {} proposal(s).", proposals.len());

    // === Phase 2: Verify ===
    let report = verify_batch(request, proposals, config, reporter);

    if let Some(rate) = report.acceptance_rate() {
        info!("Acceptance rate: {:.0}%.", rate * 100.0);
    }
    if report.accepted.is_empty() && report.total() > 0 {
        warn!("None of the {} proposal(s) passed validation.", report.total());
    }
    Ok(report)
}

/// Verifies a batch that has already been obtained.
///
/// The request's constraints are not used to filter; see [`VerificationReport::constraint_violations`].
pub fn verify_batch(
    request: &DesignRequest,
    proposals: Vec<CandidateProposal>,
    config: &VerificationConfig,
    reporter: &ProgressReporter,
) -> VerificationReport {
    reporter.report(Progress::PhaseStart {
        name: "Verification",
    });
    let report = pipeline::verify_with_report(proposals, config, reporter);
    reporter.report(Progress::PhaseFinish);

    for (candidate, violations) in report.constraint_violations(&request.constraints) {
        for violation in violations {
            warn!("Candidate {} ('{}'): {}", candidate.id(), candidate.name(), violation);
        }
    }
    report
}

/// The plain filter-then-map pass with default settings: invalid proposals vanish without a
/// trace and the request's constraints are ignored.
pub fn verify_candidates(
    request: &DesignRequest,
    proposals: Vec<CandidateProposal>,
) -> Vec<VerifiedCandidate> {
    verify_batch(
        request,
        proposals,
        &VerificationConfig::default(),
        &ProgressReporter::new(),
    )
    .into_accepted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::candidate::tests::proposal;
    use crate::core::models::request::DesignConstraints;
    use crate::engine::source::{SourceError, StaticSource};

    struct FailingSource;

    impl CandidateSource for FailingSource {
        fn generate(
            &self,
            _request: &DesignRequest,
        ) -> Result<Vec<CandidateProposal>, SourceError> {
            Err(SourceError::Unavailable("quota exhausted".to_string()))
        }
    }

    fn request(min_stability: f64, max_weight: f64) -> DesignRequest {
        DesignRequest {
            target_name: "EGFR".to_string(),
            desired_function: "Allosteric inhibition".to_string(),
            constraints: DesignConstraints {
                min_stability,
                max_weight,
            },
        }
    }

    fn five_proposals() -> Vec<CandidateProposal> {
        vec![
            proposal("a", "MKTAYIAKQRQISFVKSHFSRQ"),
            proposal("b", "MKTAYXAK"),
            proposal("c", "LLLLVVVVIIII"),
            proposal("d", "DEDEDE1"),
            proposal("e", "ACDEFGHIKLMNPQRSTVWY"),
        ]
    }

    #[test]
    fn run_filters_invalid_proposals_from_source() {
        let source = StaticSource::new(five_proposals());
        let report = run(
            &request(0.0, 100.0),
            &source,
            &VerificationConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        let names: Vec<_> = report.accepted.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "c", "e"]);
        assert_eq!(report.rejected.len(), 2);
    }

    #[test]
    fn collaborator_failure_surfaces_as_single_error() {
        let result = run(
            &request(70.0, 25.0),
            &FailingSource,
            &VerificationConfig::default(),
            &ProgressReporter::new(),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, EngineError::Source { .. }));
        assert!(err.to_string().contains("quota exhausted"));
    }

    #[test]
    fn constraints_are_not_enforced() {
        // Every candidate misses both constraints, none is removed.
        let verified = verify_candidates(&request(99.0, 0.01), five_proposals());
        assert_eq!(verified.len(), 3);
    }

    #[test]
    fn verify_candidates_matches_accepted_part_of_report() {
        let req = request(70.0, 25.0);
        let plain = verify_candidates(&req, five_proposals());
        let report = verify_batch(
            &req,
            five_proposals(),
            &VerificationConfig::default(),
            &ProgressReporter::new(),
        );
        assert_eq!(plain.len(), report.accepted.len());
        for (a, b) in plain.iter().zip(&report.accepted) {
            assert_eq!(a.sequence(), b.sequence());
            assert_eq!(a.molecular_weight(), b.molecular_weight());
            assert_eq!(a.stability_score(), b.stability_score());
        }
    }
}
