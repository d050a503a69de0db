use crate::models::Phase;

/// Map a stage's display name onto the phase enum.
///
/// Case-insensitive substring matching over keyword groups, first hit wins.
/// The order is load-bearing: "Semifinal 1" contains "final", so the
/// semifinal arm must run before the final arm, and the final arm excludes
/// semifinal and third-place wording outright. Keywords cover the Spanish
/// stage names the exports use plus the English round labels.
pub fn classify_stage(stage_name: Option<&str>) -> Phase {
    let name = match stage_name {
        Some(n) if !n.is_empty() => n.to_lowercase(),
        _ => return Phase::Group,
    };

    if name.contains("dieciseisavo")
        || name.contains("treintaidosavo")
        || name.contains("round of 32")
    {
        Phase::RoundOf32
    } else if name.contains("octavo") || name.contains("round of 16") {
        Phase::RoundOf16
    } else if name.contains("cuarto") || name.contains("quarter") {
        Phase::QuarterFinal
    } else if name.contains("semifinal") || name.contains("semi") {
        Phase::SemiFinal
    } else if name.contains("tercer") || name.contains("third") {
        Phase::ThirdPlace
    } else if name.contains("final")
        && !name.contains("semifinal")
        && !name.contains("tercer")
        && !name.contains("third")
    {
        Phase::Final
    } else {
        Phase::Group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty_defaults_to_group() {
        assert_eq!(classify_stage(None), Phase::Group);
        assert_eq!(classify_stage(Some("")), Phase::Group);
        assert_eq!(classify_stage(Some("Fase de grupos")), Phase::Group);
    }

    #[test]
    fn test_round_of_32_keywords() {
        assert_eq!(
            classify_stage(Some("Dieciseisavos de final")),
            Phase::RoundOf32
        );
        assert_eq!(
            classify_stage(Some("Treintaidosavos de final")),
            Phase::RoundOf32
        );
        assert_eq!(classify_stage(Some("Round of 32")), Phase::RoundOf32);
    }

    #[test]
    fn test_round_of_16_keywords() {
        assert_eq!(classify_stage(Some("Octavos de final")), Phase::RoundOf16);
        assert_eq!(classify_stage(Some("ROUND OF 16")), Phase::RoundOf16);
    }

    #[test]
    fn test_quarters_match_before_final() {
        assert_eq!(
            classify_stage(Some("Cuartos de final")),
            Phase::QuarterFinal
        );
        assert_eq!(classify_stage(Some("Quarter-finals")), Phase::QuarterFinal);
    }

    #[test]
    fn test_semifinal_is_not_final() {
        assert_eq!(classify_stage(Some("Semifinal 1")), Phase::SemiFinal);
        assert_eq!(classify_stage(Some("Semifinales")), Phase::SemiFinal);
        assert_eq!(classify_stage(Some("SEMI")), Phase::SemiFinal);
    }

    #[test]
    fn test_third_place_keywords() {
        assert_eq!(
            classify_stage(Some("Partido por el tercer lugar")),
            Phase::ThirdPlace
        );
        assert_eq!(classify_stage(Some("Third place play-off")), Phase::ThirdPlace);
    }

    #[test]
    fn test_final_only_when_nothing_else_matches() {
        assert_eq!(classify_stage(Some("Final")), Phase::Final);
        assert_eq!(classify_stage(Some("Gran Final")), Phase::Final);
    }

    #[test]
    fn test_unrelated_names_default_to_group() {
        assert_eq!(classify_stage(Some("First stage")), Phase::Group);
        assert_eq!(classify_stage(Some("Repechaje")), Phase::Group);
    }
}
