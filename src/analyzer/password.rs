//! Password strength scoring
//!
//! Four independent criteria worth 25 points each: length of at least 8,
//! an uppercase letter, a digit, and a special character. Feedback names
//! each missing criterion.

use serde::{Deserialize, Serialize};

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Strength label derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    fn from_score(score: u8) -> Self {
        if score < 50 {
            StrengthLabel::Weak
        } else if score < 75 {
            StrengthLabel::Medium
        } else if score < 100 {
            StrengthLabel::Strong
        } else {
            StrengthLabel::VeryStrong
        }
    }
}

/// Result of a password strength check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordReport {
    /// Score in 0..=100, 25 points per satisfied criterion
    pub score: u8,
    pub strength: StrengthLabel,
    /// One entry per missing criterion
    pub feedback: Vec<String>,
}

/// Score a password against the four criteria
pub fn check_password_strength(password: &str) -> PasswordReport {
    let mut score = 0u8;
    let mut feedback = Vec::new();

    if password.chars().count() >= 8 {
        score += 25;
    } else {
        feedback.push("Password should be at least 8 characters long".to_string());
    }

    if password.chars().any(|c| c.is_uppercase()) {
        score += 25;
    } else {
        feedback.push("Add uppercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 25;
    } else {
        feedback.push("Add numbers".to_string());
    }

    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        score += 25;
    } else {
        feedback.push("Add special characters".to_string());
    }

    PasswordReport {
        score,
        strength: StrengthLabel::from_score(score),
        feedback,
    }
}
