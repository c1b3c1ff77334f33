//! Keyword emotion classifier.
//!
//! Only consulted by the fallback rule: every other reply rule fixes its own
//! emotion. The two keyword lists are independent, so a message can be
//! classified `serious` here while the "help" reply rule answers `calm`.

use jarvis_types::emotion::Emotion;

const SERIOUS_KEYWORDS: &[&str] = &["help", "problem", "error", "wrong"];
const CHEERFUL_KEYWORDS: &[&str] = &["thank", "great", "awesome", "!"];

/// Classify the tone of a raw message. First match wins:
/// serious keywords, then cheerful keywords (or `!`), else calm.
pub fn classify_emotion(text: &str) -> Emotion {
    let lower = text.to_lowercase();

    if contains_any(&lower, SERIOUS_KEYWORDS) {
        return Emotion::Serious;
    }
    if contains_any(&lower, CHEERFUL_KEYWORDS) {
        return Emotion::Cheerful;
    }
    Emotion::Calm
}

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serious_keywords() {
        for text in ["I need HELP", "there is a problem", "Error 42", "something went wrong"] {
            assert_eq!(classify_emotion(text), Emotion::Serious, "{text}");
        }
    }

    #[test]
    fn test_cheerful_keywords() {
        for text in ["Thanks a lot", "that's great", "AWESOME", "wow!"] {
            assert_eq!(classify_emotion(text), Emotion::Cheerful, "{text}");
        }
    }

    #[test]
    fn test_serious_beats_cheerful() {
        assert_eq!(classify_emotion("thanks for the help!"), Emotion::Serious);
    }

    #[test]
    fn test_calm_by_default() {
        assert_eq!(classify_emotion("xyzzy plugh"), Emotion::Calm);
        assert_eq!(classify_emotion(""), Emotion::Calm);
    }

    #[test]
    fn test_substring_containment() {
        // "helpful" contains "help"; "errors" contains "error".
        assert_eq!(classify_emotion("very helpful"), Emotion::Serious);
        assert_eq!(classify_emotion("no errors"), Emotion::Serious);
    }

    #[test]
    fn test_classifier_is_deterministic() {
        let text = "Is this awesome or wrong?";
        let first = classify_emotion(text);
        for _ in 0..10 {
            assert_eq!(classify_emotion(text), first);
        }
    }
}
