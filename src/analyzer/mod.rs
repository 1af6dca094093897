//! Heuristic analysis module

pub mod content;
pub mod link;
pub mod password;

pub use content::{
    ClassificationResult, ClassifyError, ContentClassifier, IndicatorCategory, KeywordRule,
    Severity,
};
pub use link::{LinkClassifier, SpamVerdict};
pub use password::{check_password_strength, PasswordReport, StrengthLabel};
