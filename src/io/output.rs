use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{MatchRecord, Team};

/// Roster feed written by the group-stage pipeline
pub const TEAMS_FILE: &str = "team.json";
/// Match feed written by the group-stage pipeline
pub const GROUP_MATCHES_FILE: &str = "matches_2026.json";
/// Match feed written by the knockout pipeline
pub const KNOCKOUT_MATCHES_FILE: &str = "knockout_2026.json";

/// Write a feed value as pretty-printed JSON.
///
/// serde_json indents with two spaces and leaves non-ASCII characters
/// literal, which is the format the downstream app already consumes.
pub fn write_feed_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, value).context("Failed to write JSON")?;
    Ok(())
}

/// Write the team roster feed, returning the written path
pub fn write_teams(output_dir: &Path, teams: &[Team]) -> Result<PathBuf> {
    let path = output_dir.join(TEAMS_FILE);
    write_feed_json(&path, teams)?;
    Ok(path)
}

/// Write the group-stage match feed, returning the written path
pub fn write_group_matches(output_dir: &Path, matches: &[MatchRecord]) -> Result<PathBuf> {
    let path = output_dir.join(GROUP_MATCHES_FILE);
    write_feed_json(&path, matches)?;
    Ok(path)
}

/// Write the knockout match feed, returning the written path
pub fn write_knockout_matches(output_dir: &Path, matches: &[MatchRecord]) -> Result<PathBuf> {
    let path = output_dir.join(KNOCKOUT_MATCHES_FILE);
    write_feed_json(&path, matches)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;

    #[test]
    fn test_teams_written_with_literal_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let teams = vec![Team {
            name: "México".to_string(),
            flag_url: "https://flagsapi.com/MEX/flat/64.png".to_string(),
        }];

        let path = write_teams(dir.path(), &teams).unwrap();
        assert_eq!(path.file_name().unwrap(), TEAMS_FILE);

        let content = std::fs::read_to_string(&path).unwrap();
        // Accented characters stay literal, never \u-escaped
        assert!(content.contains("México"));
        assert!(!content.contains("\\u"));
        assert!(content.contains("\"flagUrl\": \"https://flagsapi.com/MEX/flat/64.png\""));
    }

    #[test]
    fn test_match_feed_keeps_null_scores_and_drops_group() {
        let dir = tempfile::tempdir().unwrap();
        let matches = vec![MatchRecord {
            date: "2026-07-19T17:00:00Z".to_string(),
            city: "Nueva York".to_string(),
            stadium: "MetLife Stadium".to_string(),
            phase: Phase::Final,
            home_team: "Por definir".to_string(),
            away_team: "Por definir".to_string(),
            home_score: None,
            away_score: None,
            group: None,
        }];

        let path = write_knockout_matches(dir.path(), &matches).unwrap();
        assert_eq!(path.file_name().unwrap(), KNOCKOUT_MATCHES_FILE);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"homeScore\": null"));
        assert!(content.contains("\"awayScore\": null"));
        assert!(content.contains("\"phase\": \"FINAL\""));
        assert!(!content.contains("\"group\""));
    }

    #[test]
    fn test_group_matches_carry_the_label() {
        let dir = tempfile::tempdir().unwrap();
        let matches = vec![MatchRecord {
            date: "2026-06-12T18:00:00Z".to_string(),
            city: "Ciudad de México".to_string(),
            stadium: "Estadio Azteca".to_string(),
            phase: Phase::Group,
            home_team: "México".to_string(),
            away_team: "Sudáfrica".to_string(),
            home_score: Some(2),
            away_score: Some(0),
            group: Some("A".to_string()),
        }];

        let path = write_group_matches(dir.path(), &matches).unwrap();
        assert_eq!(path.file_name().unwrap(), GROUP_MATCHES_FILE);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"group\": \"A\""));
        assert!(content.contains("\"homeScore\": 2"));
    }
}
