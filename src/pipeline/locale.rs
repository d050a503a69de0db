use crate::models::LocalizedText;

/// Picks the best display string from a list of localized name variants.
///
/// The exports carry every name in several locales; the feed wants the
/// preferred one and falls back to whatever locale comes first.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    /// Locale tag whose entries win over the fallback
    pub preferred: String,
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self {
            preferred: "es-ES".to_string(),
        }
    }
}

impl LocaleResolver {
    pub fn new(preferred: impl Into<String>) -> Self {
        Self {
            preferred: preferred.into(),
        }
    }

    /// Resolve a localized name list to a display string.
    ///
    /// The first entry tagged with the preferred locale decides the outcome
    /// even when its description is missing or empty; otherwise the first
    /// entry's description is used. An empty list resolves to None, which is
    /// an expected result, not an error.
    pub fn resolve(&self, names: &[LocalizedText]) -> Option<String> {
        if names.is_empty() {
            return None;
        }
        for entry in names {
            if entry.locale.as_deref() == Some(self.preferred.as_str()) {
                return entry.text();
            }
        }
        names.first().and_then(LocalizedText::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(locale: &str, text: &str) -> LocalizedText {
        LocalizedText {
            locale: Some(locale.to_string()),
            description: Some(text.to_string()),
        }
    }

    #[test]
    fn test_preferred_locale_wins_regardless_of_position() {
        let resolver = LocaleResolver::default();
        let names = vec![
            entry("en-GB", "Mexico"),
            entry("fr-FR", "Mexique"),
            entry("es-ES", "México"),
        ];
        assert_eq!(resolver.resolve(&names).as_deref(), Some("México"));
    }

    #[test]
    fn test_falls_back_to_first_entry() {
        let resolver = LocaleResolver::default();
        let names = vec![entry("en-GB", "Mexico"), entry("fr-FR", "Mexique")];
        assert_eq!(resolver.resolve(&names).as_deref(), Some("Mexico"));
    }

    #[test]
    fn test_empty_list_is_absent() {
        let resolver = LocaleResolver::default();
        assert_eq!(resolver.resolve(&[]), None);
    }

    #[test]
    fn test_preferred_hit_with_empty_text_does_not_fall_back() {
        let resolver = LocaleResolver::default();
        let names = vec![entry("en-GB", "Mexico"), entry("es-ES", "")];
        assert_eq!(resolver.resolve(&names), None);
    }

    #[test]
    fn test_entries_without_locale_only_match_as_fallback() {
        let resolver = LocaleResolver::default();
        let names = vec![LocalizedText {
            locale: None,
            description: Some("Anónimo".to_string()),
        }];
        assert_eq!(resolver.resolve(&names).as_deref(), Some("Anónimo"));
    }

    #[test]
    fn test_custom_preferred_locale() {
        let resolver = LocaleResolver::new("en-GB");
        let names = vec![entry("es-ES", "México"), entry("en-GB", "Mexico")];
        assert_eq!(resolver.resolve(&names).as_deref(), Some("Mexico"));
    }
}
