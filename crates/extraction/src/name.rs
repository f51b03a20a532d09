//! Name extraction from transcript text.

use std::sync::OnceLock;

use regex::Regex;

/// Name cue patterns in priority order.
///
/// The capture class allows only letters, spaces, apostrophes and hyphens,
/// so a capture ends at the first punctuation mark or newline after the cue.
const NAME_PATTERNS: [&str; 2] = [
    r"(?i)(?:my name is|i'm|i am)\s+([a-zA-Z][a-zA-Z' -]*)",
    r"(?i)(?:this is|call me)\s+([a-zA-Z][a-zA-Z' -]*)",
];

/// Filler words that end a capture when the speaker keeps talking past
/// their name without punctuation ("I'm John and I wanted to ask...").
const CAPTURE_STOP_WORDS: [&str; 5] = ["and", "but", "so", "because", "thanks"];

/// Get the compiled name patterns (cached).
fn name_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        NAME_PATTERNS
            .iter()
            // Hardcoded patterns - should always compile
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect()
    })
}

/// Extract a person name from transcript text.
///
/// Patterns are tried in priority order against the whole transcript; the
/// first pattern that matches anywhere wins, and within that pattern the
/// earliest match by position governs. Returns `None` when no cue appears
/// or the transcript is empty.
pub fn extract_name(transcript: &str) -> Option<String> {
    if transcript.is_empty() {
        return None;
    }

    for pattern in name_patterns() {
        let Some(captures) = pattern.captures(transcript) else {
            continue;
        };
        if let Some(raw) = captures.get(1) {
            let name = trim_capture(raw.as_str());
            if !name.is_empty() {
                return Some(name);
            }
        }
    }

    None
}

/// Truncate a raw capture at the first connective filler word and trim
/// surrounding whitespace.
fn trim_capture(raw: &str) -> String {
    let mut words = Vec::new();
    for word in raw.split_whitespace() {
        if CAPTURE_STOP_WORDS.contains(&word.to_ascii_lowercase().as_str()) {
            break;
        }
        words.push(word);
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introductory_cue() {
        assert_eq!(
            extract_name("Hi, my name is John Smith. My email is john@example.com").as_deref(),
            Some("John Smith")
        );
        assert_eq!(extract_name("I'm Ada").as_deref(), Some("Ada"));
        assert_eq!(extract_name("well I am Grace Hopper").as_deref(), Some("Grace Hopper"));
    }

    #[test]
    fn test_alternate_cue() {
        assert_eq!(extract_name("Hello, this is Alan Turing.").as_deref(), Some("Alan Turing"));
        assert_eq!(extract_name("call me Ishmael.").as_deref(), Some("Ishmael"));
    }

    #[test]
    fn test_mid_sentence_cue_captures_to_line_end() {
        // Without punctuation or a filler word the capture runs to the end
        // of the line. This is the documented boundary rule, not a bug.
        assert_eq!(
            extract_name("this is Alan Turing speaking").as_deref(),
            Some("Alan Turing speaking")
        );
    }

    #[test]
    fn test_pattern_priority() {
        // The introductory cue wins even when an alternate cue appears earlier.
        let transcript = "this is Support. my name is Maria";
        assert_eq!(extract_name(transcript).as_deref(), Some("Maria"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let transcript = "my name is Anna\nmy name is Bella";
        assert_eq!(extract_name(transcript).as_deref(), Some("Anna"));
    }

    #[test]
    fn test_capture_stops_at_punctuation() {
        assert_eq!(extract_name("my name is John, nice to meet you").as_deref(), Some("John"));
    }

    #[test]
    fn test_capture_stops_at_filler_word() {
        assert_eq!(
            extract_name("I'm John and I wanted to ask about pricing").as_deref(),
            Some("John")
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_name("MY NAME IS JANE DOE").as_deref(), Some("JANE DOE"));
    }

    #[test]
    fn test_no_cue() {
        assert_eq!(extract_name("I would like to know your opening hours"), None);
    }

    #[test]
    fn test_empty_transcript() {
        assert_eq!(extract_name(""), None);
    }

    #[test]
    fn test_pure_and_idempotent() {
        let transcript = "my name is John Smith";
        assert_eq!(extract_name(transcript), extract_name(transcript));
    }
}
