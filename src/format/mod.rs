//! Presentation formatting module
//!
//! Pure formatting helpers for byte counts, numbers, and timestamps.
//! All functions are one-way projections; nothing here parses its own
//! output back.

pub mod bytes;
pub mod time;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Timestamp is in the future")]
    FutureTimestamp,
}

pub use bytes::{format_bytes, format_number};
pub use time::{format_utc_date, relative_time, relative_time_from_now};
