//! Number formatting

/// Fixed-point rendering of `value` with `decimals` places.
///
/// Always uses `.` and ASCII digits. With `signed`, values that render
/// non-zero and positive get a leading `+`. A value that rounds to zero is
/// never signed in either direction.
pub fn number_string(value: f64, decimals: usize, signed: bool) -> String {
    let mut text = format!("{:.*}", decimals, value);

    let is_zero = text.bytes().all(|b| matches!(b, b'0' | b'.' | b'-'));
    if is_zero {
        if let Some(stripped) = text.strip_prefix('-') {
            text = stripped.to_string();
        }
        return text;
    }

    if signed && value > 0.0 {
        text.insert(0, '+');
    }
    text
}

/// Axis label for a count: `K`/`M`/`B` suffix above a thousand, `decimals`
/// places after the point. Zero renders as `-` so empty buckets read blank.
pub fn compact_number(num: u64, decimals: usize) -> String {
    const SUFFIXES: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    if num == 0 {
        return "-".to_string();
    }
    match SUFFIXES.iter().find(|(scale, _)| num >= *scale) {
        Some((scale, suffix)) => {
            format!("{}{suffix}", number_string(num as f64 / *scale as f64, decimals, false))
        }
        None => num.to_string(),
    }
}
