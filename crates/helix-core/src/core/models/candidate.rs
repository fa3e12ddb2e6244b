use super::ids::CandidateId;
use crate::core::properties::{SequenceError, ValidSequence, molecular_weight, stability_score};
use serde::{Deserialize, Serialize};

/// An untrusted candidate as emitted by the generative collaborator.
///
/// Every numeric field is a guess. `molecular_weight` and `stability_score` are discarded during
/// verification; the remaining fields are carried over unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProposal {
    pub name: String,
    pub sequence: String,
    /// Proposed weight in kDa.
    pub molecular_weight: f64,
    /// Predicted dissociation constant (Kd) in nM; lower binds tighter.
    pub affinity_score: f64,
    /// Proposed stability, nominally 0-100.
    pub stability_score: f64,
    /// pLDDT-like folding confidence, 0-100.
    pub folding_confidence: f64,
    pub description: String,
    pub target_mechanism: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Weight and stability were recomputed from the sequence by the engine.
    Calculated,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Calculated => "CALCULATED",
        }
    }
}

/// A proposal whose sequence passed validation and whose weight and stability were recomputed.
///
/// Fields are read-only once built. Construction requires a [`ValidSequence`], so every verified
/// candidate is guaranteed to hold a sequence of standard residues only. Reading one back from
/// JSON goes through the same path: the sequence is validated again and the stored weight,
/// stability and status are recomputed rather than trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredCandidate")]
pub struct VerifiedCandidate {
    id: CandidateId,
    name: String,
    sequence: String,
    molecular_weight: f64,
    affinity_score: f64,
    stability_score: f64,
    folding_confidence: f64,
    description: String,
    target_mechanism: String,
    verification_status: VerificationStatus,
}

impl VerifiedCandidate {
    /// Builds a verified candidate from a proposal and its validated sequence.
    ///
    /// The proposal's own `sequence`, `molecular_weight` and `stability_score` are ignored; the
    /// sequence comes from `sequence` and the two numbers are computed from it.
    pub fn new(id: CandidateId, sequence: ValidSequence, proposal: CandidateProposal) -> Self {
        let molecular_weight = molecular_weight(sequence.as_str());
        let stability_score = stability_score(sequence.as_str());
        Self {
            id,
            name: proposal.name,
            sequence: sequence.into_inner(),
            molecular_weight,
            affinity_score: proposal.affinity_score,
            stability_score,
            folding_confidence: proposal.folding_confidence,
            description: proposal.description,
            target_mechanism: proposal.target_mechanism,
            verification_status: VerificationStatus::Calculated,
        }
    }

    pub fn id(&self) -> &CandidateId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Engine-computed weight in kDa, two decimals.
    pub fn molecular_weight(&self) -> f64 {
        self.molecular_weight
    }

    pub fn affinity_score(&self) -> f64 {
        self.affinity_score
    }

    /// Engine-computed stability score, one decimal.
    pub fn stability_score(&self) -> f64 {
        self.stability_score
    }

    pub fn folding_confidence(&self) -> f64 {
        self.folding_confidence
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn target_mechanism(&self) -> &str {
        &self.target_mechanism
    }

    pub fn verification_status(&self) -> VerificationStatus {
        self.verification_status
    }
}

/// The fields of a serialized [`VerifiedCandidate`] that are carried over on re-reading.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCandidate {
    id: CandidateId,
    name: String,
    sequence: String,
    affinity_score: f64,
    folding_confidence: f64,
    description: String,
    target_mechanism: String,
}

impl TryFrom<StoredCandidate> for VerifiedCandidate {
    type Error = SequenceError;

    fn try_from(stored: StoredCandidate) -> Result<Self, Self::Error> {
        let sequence = ValidSequence::parse(&stored.sequence)?;
        let proposal = CandidateProposal {
            name: stored.name,
            sequence: stored.sequence,
            molecular_weight: 0.0,
            affinity_score: stored.affinity_score,
            stability_score: 0.0,
            folding_confidence: stored.folding_confidence,
            description: stored.description,
            target_mechanism: stored.target_mechanism,
        };
        Ok(Self::new(stored.id, sequence, proposal))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn proposal(name: &str, sequence: &str) -> CandidateProposal {
        CandidateProposal {
            name: name.to_string(),
            sequence: sequence.to_string(),
            molecular_weight: 999.0,
            affinity_score: 12.5,
            stability_score: 999.0,
            folding_confidence: 88.0,
            description: format!("{} binds the allosteric pocket", name),
            target_mechanism: "Allosteric inhibition".to_string(),
        }
    }

    #[test]
    fn new_overwrites_weight_and_stability_with_computed_values() {
        let p = proposal("Test", "AAAA");
        let seq = ValidSequence::parse(&p.sequence).unwrap();
        let candidate = VerifiedCandidate::new(CandidateId::new("cand", 1, 0), seq, p);
        assert_eq!(candidate.molecular_weight(), 0.30);
        assert_eq!(candidate.stability_score(), 68.0);
        assert_eq!(
            candidate.verification_status(),
            VerificationStatus::Calculated
        );
    }

    #[test]
    fn new_passes_through_collaborator_fields() {
        let p = proposal("Helix-7", "MKTAYIAK");
        let seq = ValidSequence::parse(&p.sequence).unwrap();
        let candidate = VerifiedCandidate::new(CandidateId::new("cand", 1, 2), seq, p.clone());
        assert_eq!(candidate.id().as_str(), "cand-1-2");
        assert_eq!(candidate.name(), p.name);
        assert_eq!(candidate.sequence(), p.sequence);
        assert_eq!(candidate.affinity_score(), p.affinity_score);
        assert_eq!(candidate.folding_confidence(), p.folding_confidence);
        assert_eq!(candidate.description(), p.description);
        assert_eq!(candidate.target_mechanism(), p.target_mechanism);
    }

    #[test]
    fn proposal_deserializes_from_camel_case_json() {
        let json = r#"{
            "name": "Test",
            "sequence": "AAAA",
            "molecularWeight": 999,
            "affinityScore": 4.2,
            "stabilityScore": 999,
            "foldingConfidence": 91,
            "description": "d",
            "targetMechanism": "m"
        }"#;
        let p: CandidateProposal = serde_json::from_str(json).unwrap();
        assert_eq!(p.molecular_weight, 999.0);
        assert_eq!(p.affinity_score, 4.2);
        assert_eq!(p.target_mechanism, "m");
    }

    #[test]
    fn proposal_missing_a_field_is_rejected() {
        let json = r#"{"name": "Test", "sequence": "AAAA"}"#;
        assert!(serde_json::from_str::<CandidateProposal>(json).is_err());
    }

    #[test]
    fn verified_candidate_serializes_with_calculated_marker() {
        let p = proposal("Test", "AAAA");
        let seq = ValidSequence::parse(&p.sequence).unwrap();
        let candidate = VerifiedCandidate::new(CandidateId::new("cand", 7, 0), seq, p);
        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["id"], "cand-7-0");
        assert_eq!(value["verificationStatus"], "CALCULATED");
        assert_eq!(value["molecularWeight"], 0.30);
        assert_eq!(value["stabilityScore"], 68.0);
        assert_eq!(value["targetMechanism"], "Allosteric inhibition");
    }

    fn stored_record(sequence: &str) -> String {
        format!(
            r#"{{"id":"cand-7-0","name":"Test","sequence":"{}","molecularWeight":999,
                "affinityScore":4.2,"stabilityScore":999,"foldingConfidence":91,
                "description":"d","targetMechanism":"m","verificationStatus":"CALCULATED"}}"#,
            sequence
        )
    }

    #[test]
    fn reading_back_an_invalid_sequence_fails() {
        let err = serde_json::from_str::<VerifiedCandidate>(&stored_record("XXX 123")).unwrap_err();
        assert!(err.to_string().contains("Non-standard residue"), "{}", err);
    }

    #[test]
    fn reading_back_recomputes_weight_and_stability() {
        let candidate: VerifiedCandidate = serde_json::from_str(&stored_record("AAAA")).unwrap();
        assert_eq!(candidate.id().as_str(), "cand-7-0");
        assert_eq!(candidate.molecular_weight(), 0.30);
        assert_eq!(candidate.stability_score(), 68.0);
        assert_eq!(candidate.affinity_score(), 4.2);
    }
}
