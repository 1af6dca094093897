//! Spam link checking
//!
//! Flags URLs that point at known link-shortener domains, a common
//! obfuscation layer for spam and phishing campaigns.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Built-in shortener domain list
const DEFAULT_SHORTENERS: &[&str] = &["bit.ly", "tinyurl.com", "shorturl.at"];

/// Verdict for a checked URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamVerdict {
    pub is_spam: bool,
    pub reason: String,
}

/// Shortener-based spam link classifier
///
/// No URL validation is performed; a malformed string simply fails the
/// domain match and comes back clean.
pub struct LinkClassifier {
    shorteners: Vec<String>,
}

impl Default for LinkClassifier {
    fn default() -> Self {
        Self {
            shorteners: DEFAULT_SHORTENERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LinkClassifier {
    /// Create a classifier with a custom shortener list
    pub fn with_shorteners(shorteners: Vec<String>) -> Self {
        Self { shorteners }
    }

    /// Check a URL against the shortener list
    pub fn check_link(&self, url: &str) -> SpamVerdict {
        let lowered = url.to_lowercase();
        let is_spam = self.shorteners.iter().any(|s| lowered.contains(s.as_str()));

        debug!(url, is_spam, "link checked");

        let reason = if is_spam {
            "URL uses a known link shortener often used for spam.".to_string()
        } else {
            "URL does not appear to be a spam link.".to_string()
        };

        SpamVerdict { is_spam, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortener_flagged() {
        let classifier = LinkClassifier::default();
        let verdict = classifier.check_link("http://bit.ly/xyz");
        assert!(verdict.is_spam);
        assert!(verdict.reason.contains("link shortener"));
    }

    #[test]
    fn test_plain_domain_clean() {
        let classifier = LinkClassifier::default();
        let verdict = classifier.check_link("http://example.com");
        assert!(!verdict.is_spam);
        assert!(verdict.reason.contains("does not appear"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let classifier = LinkClassifier::default();
        assert!(classifier.check_link("HTTP://BIT.LY/abc").is_spam);
        assert!(classifier.check_link("https://TinyURL.com/q").is_spam);
    }

    #[test]
    fn test_malformed_input_comes_back_clean() {
        let classifier = LinkClassifier::default();
        let verdict = classifier.check_link("not a url at all");
        assert!(!verdict.is_spam);
        assert!(!verdict.reason.is_empty());
    }

    #[test]
    fn test_custom_shortener_list() {
        let classifier = LinkClassifier::with_shorteners(vec!["sus.example".to_string()]);
        assert!(classifier.check_link("https://sus.example/x").is_spam);
        assert!(!classifier.check_link("http://bit.ly/xyz").is_spam);
    }
}
