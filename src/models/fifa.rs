use serde::{Deserialize, Serialize};

/// One localized name variant from a FIFA export
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalizedText {
    /// Locale tag (e.g. "es-ES")
    #[serde(rename = "Locale", default)]
    pub locale: Option<String>,
    /// Display text in that locale
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl LocalizedText {
    /// Display text, treating missing and empty descriptions as absent
    pub fn text(&self) -> Option<String> {
        self.description
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }
}

/// A team reference inside a match; the exports carry null here for
/// placeholder fixtures whose team is not yet decided
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FifaTeam {
    /// Country code used for the flag image, may be empty or null
    #[serde(rename = "IdCountry", default)]
    pub country_code: Option<String>,
    /// Localized team name variants
    #[serde(rename = "TeamName", default)]
    pub team_name: Option<Vec<LocalizedText>>,
}

impl FifaTeam {
    /// Name variants, empty when the export carries none
    pub fn names(&self) -> &[LocalizedText] {
        self.team_name.as_deref().unwrap_or(&[])
    }

    /// Country code, empty string when missing
    pub fn country(&self) -> &str {
        self.country_code.as_deref().unwrap_or("")
    }
}

/// Stadium block carried by a match
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FifaStadium {
    #[serde(rename = "Name", default)]
    pub name: Option<Vec<LocalizedText>>,
    #[serde(rename = "CityName", default)]
    pub city_name: Option<Vec<LocalizedText>>,
}

/// A single raw match record. The exports carry many more keys
/// (IdMatch, MatchNumber, PlaceHolderA/B, ...) which are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FifaMatch {
    /// Kick-off timestamp, ISO-8601, passed through to the feed untouched
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "HomeTeam", default)]
    pub home_team: Option<FifaTeam>,
    #[serde(rename = "AwayTeam", default)]
    pub away_team: Option<FifaTeam>,
    /// Goals scored, null until the match has been played
    #[serde(rename = "HomeTeamScore", default)]
    pub home_score: Option<u32>,
    #[serde(rename = "AwayTeamScore", default)]
    pub away_score: Option<u32>,
    #[serde(rename = "Stadium", default)]
    pub stadium: Option<FifaStadium>,
}

impl FifaMatch {
    /// Localized stadium name variants, tolerating a missing stadium block
    pub fn stadium_names(&self) -> &[LocalizedText] {
        self.stadium
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or(&[])
    }

    /// Localized city name variants, tolerating a missing stadium block
    pub fn city_names(&self) -> &[LocalizedText] {
        self.stadium
            .as_ref()
            .and_then(|s| s.city_name.as_deref())
            .unwrap_or(&[])
    }
}

/// A group within a stage ("Grupo A" .. "Grupo L")
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FifaGroup {
    #[serde(rename = "Name", default)]
    pub name: Option<Vec<LocalizedText>>,
    #[serde(rename = "Matches", default)]
    pub matches: Vec<FifaMatch>,
}

impl FifaGroup {
    pub fn names(&self) -> &[LocalizedText] {
        self.name.as_deref().unwrap_or(&[])
    }
}

/// One tournament stage: groups plus matches hanging directly off the stage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FifaStage {
    #[serde(rename = "Name", default)]
    pub name: Option<Vec<LocalizedText>>,
    #[serde(rename = "Groups", default)]
    pub groups: Vec<FifaGroup>,
    #[serde(rename = "Matches", default)]
    pub matches: Vec<FifaMatch>,
}

impl FifaStage {
    pub fn names(&self) -> &[LocalizedText] {
        self.name.as_deref().unwrap_or(&[])
    }
}

/// Root of a group-stage export. Two shapes exist in the wild: a stage
/// object directly carrying `Groups`, or a wrapper holding `KnockoutStages`.
/// Key presence (not emptiness) distinguishes them, so both list fields stay
/// Option rather than defaulting to empty.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupStageExport {
    #[serde(rename = "Name", default)]
    pub name: Option<Vec<LocalizedText>>,
    #[serde(rename = "Groups", default)]
    pub groups: Option<Vec<FifaGroup>>,
    /// Matches not belonging to any group
    #[serde(rename = "Matches", default)]
    pub matches: Vec<FifaMatch>,
    #[serde(rename = "KnockoutStages", default)]
    pub knockout_stages: Option<Vec<FifaStage>>,
}

impl GroupStageExport {
    pub fn names(&self) -> &[LocalizedText] {
        self.name.as_deref().unwrap_or(&[])
    }
}
