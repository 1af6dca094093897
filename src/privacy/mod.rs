//! PII masking module
//!
//! Partial redaction of personal-data strings for display. Masking is a
//! pure projection; the input is never mutated and enough characters are
//! kept for the owner to recognize their own data.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    #[error("Email address has no '@' separator")]
    MissingAtSign,
}

/// Mask the local part of an email address
///
/// Keeps the first two characters of the local part, replaces the rest
/// with '*', and leaves the domain untouched. Splits on the first '@';
/// an address without one is rejected.
pub fn mask_email(email: &str) -> Result<String, MaskError> {
    let (local, domain) = email.split_once('@').ok_or(MaskError::MissingAtSign)?;

    let kept: String = local.chars().take(2).collect();
    let masked_len = local.chars().count().saturating_sub(2);

    Ok(format!("{}{}@{}", kept, "*".repeat(masked_len), domain))
}

/// Mask all but the last four digits of a phone number
///
/// Every digit with at least four digits remaining after it becomes '*';
/// separators and other non-digit characters pass through unchanged.
pub fn mask_phone(phone: &str) -> String {
    let total_digits = phone.chars().filter(|c| c.is_ascii_digit()).count();

    let mut seen = 0usize;
    phone
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if total_digits - seen >= 4 {
                    '*'
                } else {
                    c
                }
            } else {
                c
            }
        })
        .collect()
}
