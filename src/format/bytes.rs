//! Byte-size and number formatting

const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count as a human-readable size
///
/// The unit is selected by floor(log1024) of the count, clamped to TB.
/// The magnitude is rounded to two decimal places with trailing zeros
/// trimmed, so 1024 renders as "1 KB" and 1536 as "1.5 KB".
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let unit_index = ((bytes.ilog2() / 10) as usize).min(UNITS.len() - 1);
    let magnitude = bytes as f64 / 1024f64.powi(unit_index as i32);
    let rounded = (magnitude * 100.0).round() / 100.0;

    let mut rendered = format!("{:.2}", rounded);
    if rendered.contains('.') {
        rendered = rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", rendered, UNITS[unit_index])
}

/// Format an integer with comma thousands separators
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
