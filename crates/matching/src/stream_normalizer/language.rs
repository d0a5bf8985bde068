//! Audio language detection from free-text track labels.

/// A case-insensitive substring and the label reported when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePattern {
    pub needle: &'static str,
    pub label: &'static str,
}

const fn pattern(needle: &'static str, label: &'static str) -> LanguagePattern {
    LanguagePattern { needle, label }
}

/// Patterns checked against the audio track labels, in order. The first match wins, so longer
/// names that contain shorter ones (`malayalam` / `malay`) must come first.
pub const AUDIO_LANGUAGE_PATTERNS: [LanguagePattern; 40] = [
    pattern("hindi", "Hindi"),
    pattern("english", "English"),
    pattern("tamil", "Tamil"),
    pattern("telugu", "Telugu"),
    pattern("malayalam", "Malayalam"),
    pattern("kannada", "Kannada"),
    pattern("bengali", "Bengali"),
    pattern("punjabi", "Punjabi"),
    pattern("gujarati", "Gujarati"),
    pattern("marathi", "Marathi"),
    pattern("odia", "Odia"),
    pattern("assamese", "Assamese"),
    pattern("bhojpuri", "Bhojpuri"),
    pattern("urdu", "Urdu"),
    pattern("nepali", "Nepali"),
    pattern("spanish", "Spanish"),
    pattern("french", "French"),
    pattern("german", "German"),
    pattern("japanese", "Japanese"),
    pattern("korean", "Korean"),
    pattern("chinese", "Chinese"),
    pattern("arabic", "Arabic"),
    pattern("portuguese", "Portuguese"),
    pattern("russian", "Russian"),
    pattern("italian", "Italian"),
    pattern("dutch", "Dutch"),
    pattern("thai", "Thai"),
    pattern("vietnamese", "Vietnamese"),
    pattern("indonesian", "Indonesian"),
    pattern("malay", "Malay"),
    pattern("filipino", "Filipino"),
    pattern("turkish", "Turkish"),
    pattern("polish", "Polish"),
    pattern("swedish", "Swedish"),
    pattern("norwegian", "Norwegian"),
    pattern("danish", "Danish"),
    pattern("finnish", "Finnish"),
    pattern("greek", "Greek"),
    pattern("hebrew", "Hebrew"),
    pattern("persian", "Persian"),
];

/// Patterns checked against the candidate title when no audio track matched.
pub const TITLE_LANGUAGE_PATTERNS: [LanguagePattern; 2] =
    [pattern("hindi", "Hindi"), pattern("english", "English")];

/// First pattern of `patterns` found in `text`.
pub fn first_match(patterns: &[LanguagePattern], text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    patterns
        .iter()
        .find(|p| text.contains(p.needle))
        .map(|p| p.label)
}

/// The language of a stream, judged from its audio tracks and then from the title it belongs to.
pub fn detect_language(audio_tracks: &[String], candidate_title: &str) -> Option<&'static str> {
    first_match(&AUDIO_LANGUAGE_PATTERNS, &audio_tracks.join(" "))
        .or_else(|| first_match(&TITLE_LANGUAGE_PATTERNS, candidate_title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| String::from(*l)).collect()
    }

    #[test]
    fn detect_language_matches_audio_track_case_insensitively() {
        assert_eq!(Some("Hindi"), detect_language(&tracks(&["HINDI 5.1"]), ""));
    }

    #[test]
    fn detect_language_uses_table_order_not_track_order() {
        // Both match; Hindi comes first in the table.
        let actual = detect_language(&tracks(&["English", "Hindi"]), "");

        assert_eq!(Some("Hindi"), actual);
    }

    #[test]
    fn detect_language_prefers_malayalam_over_malay() {
        assert_eq!(Some("Malayalam"), detect_language(&tracks(&["Malayalam"]), ""));
        assert_eq!(Some("Malay"), detect_language(&tracks(&["Bahasa Malay"]), ""));
    }

    #[test]
    fn detect_language_falls_back_to_candidate_title() {
        let actual = detect_language(&tracks(&["Track 1"]), "Jawan [Hindi Dubbed]");

        assert_eq!(Some("Hindi"), actual);
    }

    #[test]
    fn detect_language_title_fallback_only_knows_hindi_and_english() {
        assert_eq!(None, detect_language(&[], "Parasite (Korean)"));
        assert_eq!(Some("English"), detect_language(&[], "Dune English Version"));
    }

    #[test]
    fn detect_language_returns_none_given_no_hints() {
        assert_eq!(None, detect_language(&[], "Inception"));
    }
}
