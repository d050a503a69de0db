use tracing::info;

use crate::models::{FifaStage, MatchRecord, Roster};

use super::normalize::Normalizer;
use super::phase::classify_stage;

/// Walk the knockout-stage export, producing the knockout match list.
///
/// Knockout matches never carry a group label, and the roster fed during
/// normalization is private to this run and discarded; the team feed comes
/// from the group-stage pipeline alone. Groups nested inside a knockout
/// stage are ignored.
pub fn run_knockout(stages: &[FifaStage], normalizer: &Normalizer) -> Vec<MatchRecord> {
    let mut roster = Roster::new();
    let mut matches = Vec::new();

    for stage in stages {
        let stage_name = normalizer.resolver.resolve(stage.names());
        let phase = classify_stage(stage_name.as_deref());

        info!(
            "Processing stage: {} -> {}",
            stage_name.as_deref().unwrap_or("(unnamed)"),
            phase.as_str()
        );

        for raw in &stage.matches {
            if let Some(record) = normalizer.normalize(raw, phase, None, &mut roster) {
                matches.push(record);
            }
        }
    }

    matches.sort_by(|a, b| a.date.cmp(&b.date));
    matches
}
