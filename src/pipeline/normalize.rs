use crate::models::{FifaMatch, MatchRecord, Phase, Roster};

use super::locale::LocaleResolver;

/// Placeholder shown for a side whose team is not yet decided
pub const TEAM_TBD: &str = "Por definir";
/// Fallback when the export has no usable stadium name
pub const STADIUM_UNSPECIFIED: &str = "Estadio no especificado";
/// Fallback when the export has no usable city name
pub const CITY_UNSPECIFIED: &str = "Ciudad no especificada";

/// Flag image URL template, keyed by country code.
///
/// Kept configurable so tests and provider changes never touch the
/// normalization logic.
#[derive(Debug, Clone)]
pub struct FlagUrlConfig {
    /// Provider base URL, no trailing slash
    pub base: String,
    /// Image style path segment
    pub style: String,
    /// Image size in pixels
    pub size: u32,
    /// Code substituted when a team has no country code
    pub fallback_code: String,
}

impl Default for FlagUrlConfig {
    fn default() -> Self {
        Self {
            base: "https://flagsapi.com".to_string(),
            style: "flat".to_string(),
            size: 64,
            fallback_code: "XX".to_string(),
        }
    }
}

impl FlagUrlConfig {
    /// Build the flag URL for a country code; empty codes map to the sentinel
    pub fn url_for(&self, country_code: &str) -> String {
        let code = if country_code.is_empty() {
            self.fallback_code.as_str()
        } else {
            country_code
        };
        format!("{}/{}/{}/{}.png", self.base, code, self.style, self.size)
    }
}

/// Match-normalization context shared by both pipelines
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    pub resolver: LocaleResolver,
    pub flags: FlagUrlConfig,
}

impl Normalizer {
    pub fn new(resolver: LocaleResolver, flags: FlagUrlConfig) -> Self {
        Self { resolver, flags }
    }

    /// Flatten one raw match into the feed shape, recording any newly seen
    /// team into `roster`.
    ///
    /// Returns None for records the feed drops: placeholder-vs-placeholder
    /// fixtures, matches where neither side's name resolves, and matches
    /// without a kick-off date. Such drops are normal data, never errors.
    /// Teams are recorded before the date check, so a dateless match still
    /// contributes its sides to the roster.
    pub fn normalize(
        &self,
        raw: &FifaMatch,
        phase: Phase,
        group_label: Option<&str>,
        roster: &mut Roster,
    ) -> Option<MatchRecord> {
        let home = raw.home_team.as_ref();
        let away = raw.away_team.as_ref();
        if home.is_none() && away.is_none() {
            return None;
        }

        let home_name = home.and_then(|t| self.resolver.resolve(t.names()));
        let away_name = away.and_then(|t| self.resolver.resolve(t.names()));
        if home_name.is_none() && away_name.is_none() {
            return None;
        }

        if let (Some(team), Some(name)) = (home, home_name.as_deref()) {
            roster.record(name, team.country(), self.flags.url_for(team.country()));
        }
        if let (Some(team), Some(name)) = (away, away_name.as_deref()) {
            roster.record(name, team.country(), self.flags.url_for(team.country()));
        }

        let stadium = self
            .resolver
            .resolve(raw.stadium_names())
            .unwrap_or_else(|| STADIUM_UNSPECIFIED.to_string());
        let city = self
            .resolver
            .resolve(raw.city_names())
            .unwrap_or_else(|| CITY_UNSPECIFIED.to_string());

        let date = raw.date.as_deref().filter(|d| !d.is_empty())?;

        Some(MatchRecord {
            date: date.to_string(),
            city,
            stadium,
            phase,
            home_team: home_name.unwrap_or_else(|| TEAM_TBD.to_string()),
            away_team: away_name.unwrap_or_else(|| TEAM_TBD.to_string()),
            home_score: raw.home_score,
            away_score: raw.away_score,
            group: group_label.map(|g| g.to_string()),
        })
    }
}
