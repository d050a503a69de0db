use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::models::{
    FifaGroup, FifaMatch, GroupStageExport, LocalizedText, MatchRecord, Roster, Team,
};

use super::normalize::Normalizer;
use super::phase::classify_stage;

/// Output of a group-stage pipeline run
#[derive(Debug, Default)]
pub struct GroupStageOutput {
    /// Deduplicated roster, sorted by name
    pub teams: Vec<Team>,
    /// Flattened matches, sorted by date
    pub matches: Vec<MatchRecord>,
}

/// Walk a group-stage export, producing the team roster and match list.
///
/// The export comes in two shapes: a stage object directly carrying
/// `Groups`, or a wrapper whose `KnockoutStages` array holds such stages.
/// Key presence selects the shape, with `Groups` winning when both appear.
/// A document with neither key yields empty outputs and a warning rather
/// than an error.
pub fn run_group_stage(export: &GroupStageExport, normalizer: &Normalizer) -> GroupStageOutput {
    let mut roster = Roster::new();
    let mut matches = Vec::new();

    if let Some(groups) = &export.groups {
        process_stage(
            export.names(),
            groups,
            &export.matches,
            normalizer,
            &mut roster,
            &mut matches,
        );
    } else if let Some(stages) = &export.knockout_stages {
        for stage in stages {
            process_stage(
                stage.names(),
                &stage.groups,
                &stage.matches,
                normalizer,
                &mut roster,
                &mut matches,
            );
        }
    } else {
        warn!("Export has neither Groups nor KnockoutStages, nothing to process");
    }

    matches.sort_by(|a, b| a.date.cmp(&b.date));

    GroupStageOutput {
        teams: roster.into_sorted_teams(),
        matches,
    }
}

/// Process one stage worth of groups plus its stage-direct matches.
///
/// The phase is stage-scoped: every match in the stage inherits the phase
/// classified from the stage name. Matches inside a group carry that group's
/// letter; matches hanging directly off the stage carry none.
fn process_stage(
    stage_names: &[LocalizedText],
    groups: &[FifaGroup],
    stage_matches: &[FifaMatch],
    normalizer: &Normalizer,
    roster: &mut Roster,
    matches: &mut Vec<MatchRecord>,
) {
    let stage_name = normalizer.resolver.resolve(stage_names);
    let phase = classify_stage(stage_name.as_deref());

    for group in groups {
        let group_name = normalizer.resolver.resolve(group.names());
        let group_letter = group_name.as_deref().and_then(extract_group_letter);

        for raw in &group.matches {
            if let Some(record) =
                normalizer.normalize(raw, phase, group_letter.as_deref(), roster)
            {
                matches.push(record);
            }
        }
    }

    for raw in stage_matches {
        if let Some(record) = normalizer.normalize(raw, phase, None, roster) {
            matches.push(record);
        }
    }
}

/// Extract the group letter from a resolved group name ("Grupo A" -> "A")
fn extract_group_letter(group_name: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)Grupo\s+([A-L])").unwrap());

    let caps = re.captures(group_name)?;
    Some(caps.get(1)?.as_str().to_uppercase())
}
