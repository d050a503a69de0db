use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Tournament phase of a match, as consumed by the prode backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Group,
    // serde's rename rule would emit ROUND_OF32 for these two
    #[serde(rename = "ROUND_OF_32")]
    RoundOf32,
    #[serde(rename = "ROUND_OF_16")]
    RoundOf16,
    QuarterFinal,
    SemiFinal,
    ThirdPlace,
    Final,
}

impl Phase {
    /// Wire name, exactly as emitted in the feed JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Group => "GROUP",
            Phase::RoundOf32 => "ROUND_OF_32",
            Phase::RoundOf16 => "ROUND_OF_16",
            Phase::QuarterFinal => "QUARTER_FINAL",
            Phase::SemiFinal => "SEMI_FINAL",
            Phase::ThirdPlace => "THIRD_PLACE",
            Phase::Final => "FINAL",
        }
    }
}

/// A roster entry in the team feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(rename = "flagUrl")]
    pub flag_url: String,
}

/// One flattened match in the output feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Kick-off timestamp, ISO-8601 pass-through from the export
    pub date: String,
    pub city: String,
    pub stadium: String,
    pub phase: Phase,
    pub home_team: String,
    pub away_team: String,
    /// None until the match has been played; serialized as an explicit null
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// Group letter, attached to group-stage matches only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Insertion-ordered team accumulator deduplicating on (name, country code).
///
/// The emitted entry keeps only name and flag URL; the country code lives
/// solely in the dedup key, so equal names under different codes produce
/// separate roster rows that differ only in flagUrl.
#[derive(Debug, Default)]
pub struct Roster {
    teams: Vec<Team>,
    seen: HashSet<(String, String)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a team unless its (name, country code) key was already seen
    pub fn record(&mut self, name: &str, country_code: &str, flag_url: String) {
        let key = (name.to_string(), country_code.to_string());
        if self.seen.insert(key) {
            self.teams.push(Team {
                name: name.to_string(),
                flag_url,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Consume the accumulator, returning teams sorted by name ascending
    pub fn into_sorted_teams(mut self) -> Vec<Team> {
        self.teams.sort_by(|a, b| a.name.cmp(&b.name));
        self.teams
    }
}
