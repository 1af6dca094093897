//! Phishing content classification
//!
//! Scores free text for phishing indicators using a weighted rule table
//! over keyword categories. Scoring is fully deterministic so results are
//! reproducible and auditable.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// URL pattern used as a weak phishing signal
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s\])<>]+").expect("Invalid URL regex"));

/// Generic greetings commonly seen in bulk phishing mail
const GENERIC_GREETINGS: &[&str] = &["dear customer", "dear user", "dear member", "valued customer"];

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Input text is empty")]
    EmptyInput,
}

/// Indicator categories recognized by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorCategory {
    /// Pressure language ("urgent", "act now")
    Urgency,
    /// Requests touching credentials ("password", "verify")
    Credentials,
    /// Requests touching financial data ("credit card", "ssn")
    Financial,
}

/// A keyword with the category it signals
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub keyword: String,
    pub category: IndicatorCategory,
}

/// Built-in keyword table
const DEFAULT_KEYWORDS: &[(&str, IndicatorCategory)] = &[
    ("urgent", IndicatorCategory::Urgency),
    ("immediately", IndicatorCategory::Urgency),
    ("act now", IndicatorCategory::Urgency),
    ("password", IndicatorCategory::Credentials),
    ("verify", IndicatorCategory::Credentials),
    ("credit card", IndicatorCategory::Financial),
    ("bank account", IndicatorCategory::Financial),
    ("ssn", IndicatorCategory::Financial),
];

/// Severity classification derived from a suspicion score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// No meaningful indicators
    Low,
    /// Weak indicators - review recommended
    Medium,
    /// Strong indicators - treat as hostile
    High,
    /// Overwhelming indicators - block immediately
    Critical,
}

impl Severity {
    /// Determine severity from a suspicion score
    pub fn from_score(score: u8) -> Self {
        if score > 75 {
            Severity::Critical
        } else if score > 50 {
            Severity::High
        } else if score > 25 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Result of a content classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Suspicion score in 0..=100
    pub suspicion_score: u8,
    /// Human-readable findings, never empty
    pub findings: Vec<String>,
}

impl ClassificationResult {
    /// Severity band for this score
    pub fn severity(&self) -> Severity {
        Severity::from_score(self.suspicion_score)
    }
}

/// Deterministic phishing classifier
///
/// The keyword table is installed at construction and never mutated.
/// Keyword-matched text scores in 70..100; unmatched text scores in 0..40,
/// so the finding bands (above 60, 31 to 60, 30 and below) are stable.
pub struct ContentClassifier {
    keywords: Vec<KeywordRule>,
}

impl Default for ContentClassifier {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS
                .iter()
                .map(|(keyword, category)| KeywordRule {
                    keyword: keyword.to_string(),
                    category: *category,
                })
                .collect(),
        }
    }
}

impl ContentClassifier {
    /// Create a classifier with a custom keyword table
    pub fn with_keywords(keywords: Vec<KeywordRule>) -> Self {
        Self { keywords }
    }

    /// Classify text for phishing indicators
    ///
    /// Rejects input that is empty after trimming.
    pub fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifyError> {
        if text.trim().is_empty() {
            return Err(ClassifyError::EmptyInput);
        }

        let lowered = text.to_lowercase();

        let mut matched_categories: Vec<IndicatorCategory> = Vec::new();
        let mut keyword_hits = 0usize;
        for rule in &self.keywords {
            if lowered.contains(rule.keyword.as_str()) {
                keyword_hits += 1;
                if !matched_categories.contains(&rule.category) {
                    matched_categories.push(rule.category);
                }
            }
        }

        let suspicion_score = if keyword_hits > 0 {
            // Base 70 for any keyword hit, extra distinct categories and
            // extra hits raise the score; capped at 99.
            let score = 70
                + 8 * (matched_categories.len() - 1)
                + 3 * (keyword_hits - matched_categories.len());
            score.min(99) as u8
        } else {
            self.weak_signal_score(text, &lowered)
        };

        debug!(
            suspicion_score,
            keyword_hits,
            categories = ?matched_categories,
            "content classified"
        );

        Ok(ClassificationResult {
            suspicion_score,
            findings: findings_for_score(suspicion_score),
        })
    }

    /// Score for text without keyword hits, from weaker indicators.
    /// Capped at 39 so unmatched text never crosses into the hostile band.
    fn weak_signal_score(&self, text: &str, lowered: &str) -> u8 {
        let mut score = 0usize;

        if URL_REGEX.is_match(text) {
            score += 22;
        }
        if GENERIC_GREETINGS.iter().any(|g| lowered.contains(g)) {
            score += 12;
        }
        if text.chars().filter(|c| *c == '!').count() >= 3 {
            score += 5;
        }

        score.min(39) as u8
    }
}

/// Finding text per score band
fn findings_for_score(score: u8) -> Vec<String> {
    if score > 60 {
        vec![
            "Urgent language detected, which is a common phishing tactic.".to_string(),
            "Requests for sensitive information (e.g., passwords, credit card numbers).".to_string(),
        ]
    } else if score > 30 {
        vec![
            "Contains links that should be verified before clicking.".to_string(),
            "Generic greetings are sometimes used in phishing emails.".to_string(),
        ]
    } else {
        vec![
            "The content appears to be safe.".to_string(),
            "No immediate signs of phishing or malicious intent detected.".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phishing_keywords_score_high() {
        let classifier = ContentClassifier::default();
        let result = classifier
            .classify("Please verify your password urgently")
            .unwrap();
        assert!(result.suspicion_score >= 70 && result.suspicion_score < 100);
        assert_eq!(result.findings.len(), 2);
        assert!(result.findings[0].contains("Urgent language"));
        assert!(result.findings[1].contains("sensitive information"));
    }

    #[test]
    fn test_benign_text_scores_low() {
        let classifier = ContentClassifier::default();
        let result = classifier
            .classify("Lunch at noon on Friday works for me.")
            .unwrap();
        assert!(result.suspicion_score < 40);
        assert!(result.findings[0].contains("appears to be safe"));
    }

    #[test]
    fn test_link_and_greeting_hit_middle_band() {
        let classifier = ContentClassifier::default();
        let result = classifier
            .classify("Dear customer, see http://example.com/offer for details")
            .unwrap();
        assert!(result.suspicion_score > 30 && result.suspicion_score <= 60);
        assert!(result.findings[0].contains("links"));
        assert!(result.findings[1].contains("Generic greetings"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = ContentClassifier::default();
        let text = "Urgent: confirm your credit card and password now";
        let a = classifier.classify(text).unwrap();
        let b = classifier.classify(text).unwrap();
        assert_eq!(a.suspicion_score, b.suspicion_score);
    }

    #[test]
    fn test_more_categories_raise_score() {
        let classifier = ContentClassifier::default();
        let one = classifier.classify("reset your password").unwrap();
        let three = classifier
            .classify("urgent: verify the password for your credit card")
            .unwrap();
        assert!(three.suspicion_score > one.suspicion_score);
        assert!(three.suspicion_score < 100);
    }

    #[test]
    fn test_empty_input_rejected() {
        let classifier = ContentClassifier::default();
        assert!(matches!(
            classifier.classify("   "),
            Err(ClassifyError::EmptyInput)
        ));
    }

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::from_score(0), Severity::Low);
        assert_eq!(Severity::from_score(25), Severity::Low);
        assert_eq!(Severity::from_score(26), Severity::Medium);
        assert_eq!(Severity::from_score(51), Severity::High);
        assert_eq!(Severity::from_score(76), Severity::Critical);
        assert_eq!(Severity::from_score(100), Severity::Critical);
    }

    #[test]
    fn test_result_serializes() {
        let classifier = ContentClassifier::default();
        let result = classifier.classify("verify your password").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["suspicion_score"].as_u64().unwrap() >= 70);
        assert_eq!(json["findings"].as_array().unwrap().len(), 2);
    }
}
