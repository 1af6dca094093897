//! Aegis Suite Core
//!
//! This crate provides the heuristic classification and presentation
//! formatting core of the Aegis Security Suite: phishing content scoring,
//! spam link checking, password strength grading, relative-time and
//! byte-size formatting, and PII masking.
//!
//! Every operation is a synchronous, side-effect-free function over value
//! objects, safe to call from any number of concurrent contexts.

pub mod analyzer;
pub mod format;
pub mod logging;
pub mod privacy;

/// Re-export commonly used types
pub use analyzer::content::{ClassificationResult, ClassifyError, ContentClassifier, Severity};
pub use analyzer::link::{LinkClassifier, SpamVerdict};
pub use analyzer::password::{check_password_strength, PasswordReport, StrengthLabel};
pub use format::{format_bytes, format_number, format_utc_date, relative_time, FormatError};
pub use privacy::{mask_email, mask_phone, MaskError};
