//! Candidate classification

use crate::types::{CandidatePair, Conflict, ConflictSignal, Severity};

/// Turns candidate pairs into confirmed conflicts
///
/// The production implementation in the surrounding application consults a
/// language model; implementations here must be deterministic for a given
/// candidate list.
pub trait ConflictClassifier {
    /// Error type for classification
    type Error;

    /// Classify the candidate pairs, in order
    fn classify(&self, candidates: &[CandidatePair]) -> Result<Vec<Conflict>, Self::Error>;
}

/// Deterministic classifier that needs no external service
///
/// Confirms every screened candidate, grading severity from the selection
/// signal: negation language over high overlap reads as a direct
/// contradiction, shared-resource contention as a softer flag. Useful as
/// the default when no model-backed classifier is wired in; expect more
/// false positives than a semantic classifier would produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl ConflictClassifier for HeuristicClassifier {
    type Error = std::convert::Infallible;

    fn classify(&self, candidates: &[CandidatePair]) -> Result<Vec<Conflict>, Self::Error> {
        let conflicts = candidates
            .iter()
            .enumerate()
            .map(|(index, pair)| {
                let severity = match pair.signal {
                    ConflictSignal::NegationOverlap if pair.overlap > 0.5 => Severity::High,
                    ConflictSignal::NegationOverlap => Severity::Medium,
                    ConflictSignal::SharedResource => Severity::Low,
                };
                let description = match pair.signal {
                    ConflictSignal::NegationOverlap => format!(
                        "{} and {} make opposing statements about the same subject",
                        pair.first.id, pair.second.id
                    ),
                    ConflictSignal::SharedResource => format!(
                        "{} ({}) and {} ({}) contend over the same resource",
                        pair.first.id,
                        pair.first.section.as_str(),
                        pair.second.id,
                        pair.second.section.as_str()
                    ),
                };
                Conflict {
                    id: format!("CONF-{}", index + 1),
                    severity,
                    first_id: pair.first.id.clone(),
                    second_id: pair.second.id.clone(),
                    description,
                    recommendation: format!(
                        "Review {} and {} together and record which one stands",
                        pair.first.id, pair.second.id
                    ),
                }
            })
            .collect();
        Ok(conflicts)
    }
}
