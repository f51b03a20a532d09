//! Email extraction from transcript text.

use std::sync::OnceLock;

use regex::Regex;

/// Get the compiled email pattern (cached).
///
/// Returns None if regex compilation fails (should never happen with a
/// hardcoded pattern).
fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").ok())
        .as_ref()
}

/// Extract the first email address from transcript text.
///
/// Only the first occurrence is returned even when several emails appear.
/// Returns `None` for an empty transcript or when nothing email-shaped is
/// present; a trailing partial fragment (text ending in "@") never matches.
pub fn extract_email(transcript: &str) -> Option<String> {
    if transcript.is_empty() {
        return None;
    }

    let pattern = email_pattern()?;
    pattern.find(transcript).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_email() {
        assert_eq!(
            extract_email("My email is john@example.com").as_deref(),
            Some("john@example.com")
        );
    }

    #[test]
    fn test_first_occurrence_wins() {
        let transcript = "reach me at a@one.io or b@two.io";
        assert_eq!(extract_email(transcript).as_deref(), Some("a@one.io"));
    }

    #[test]
    fn test_partial_fragment_does_not_match() {
        assert_eq!(extract_email("you can write to john@"), None);
        assert_eq!(extract_email("john@example"), None);
    }

    #[test]
    fn test_empty_transcript() {
        assert_eq!(extract_email(""), None);
    }

    #[test]
    fn test_result_matches_canonical_shape() {
        let transcript = "ping jane.doe+leads@mail.example.co.uk today";
        let email = extract_email(transcript).unwrap();
        assert_eq!(email, "jane.doe+leads@mail.example.co.uk");
        // Idempotent: same transcript, same result.
        assert_eq!(extract_email(transcript).as_deref(), Some(email.as_str()));
    }
}
