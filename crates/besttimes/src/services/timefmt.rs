use rust_decimal::{Decimal, RoundingStrategy};

fn minute() -> Decimal {
    Decimal::from(60)
}

/// Formats a best time as `M:SS.ss`, seconds zero-padded once minutes
/// appear: `65.42` becomes `"1:05.42"`, `45.67` stays `"45.67"`.
/// Negative input formats as `"0.00"`.
pub fn format_time_best(seconds: Decimal) -> String {
    if seconds < Decimal::ZERO {
        return "0.00".to_string();
    }
    let minutes = (seconds / minute()).floor();
    let remaining = seconds - minutes * minute();
    if minutes > Decimal::ZERO {
        format!("{}:{:0>5}", minutes, format!("{:.2}", remaining))
    } else {
        format!("{:.2}", remaining)
    }
}

/// One-decimal display variant. Rounds before splitting off minutes so
/// `59.99` becomes `"1:00.0"`, not `"60.0"`.
pub fn format_time(seconds: Decimal) -> String {
    if seconds < Decimal::ZERO {
        return "0.0".to_string();
    }
    let rounded = seconds.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let minutes = (rounded / minute()).floor();
    let remaining = rounded - minutes * minute();
    if minutes > Decimal::ZERO {
        format!("{}:{:0>4}", minutes, format!("{:.1}", remaining))
    } else {
        format!("{:.1}", remaining)
    }
}

/// Signed gap between two times, with an explicit `+` for non-negative
/// differences: `format_time_diff(65.42, 64.00)` is `"+1.42"`.
pub fn format_time_diff(time: Decimal, reference: Decimal) -> String {
    let diff = time - reference;
    if diff >= Decimal::ZERO {
        format!("+{:.2}", diff)
    } else {
        format!("{:.2}", diff)
    }
}

/// Parses a flexible time entry into seconds.
///
/// Accepted forms: `"1:23.45"` (M:SS.ss), `"1:30"` (M:SS), `"23.45"`,
/// plain seconds, an optional trailing `s`/`S`, and the quick dash entry
/// forms `"31-2"` (31.20) and `"1-05-3"` (65.30), where any non-digit
/// run separates the parts. Negative or malformed input yields `None`.
pub fn parse_time(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cleaned = trimmed.strip_suffix(['s', 'S']).unwrap_or(trimmed);
    if cleaned.is_empty() || cleaned.starts_with('-') {
        return None;
    }

    if cleaned
        .chars()
        .all(|c| c.is_ascii_digit() || c == ':' || c == '.')
    {
        parse_traditional(cleaned)
    } else {
        parse_quick(cleaned)
    }
}

fn parse_traditional(cleaned: &str) -> Option<Decimal> {
    if let Some((minutes_part, seconds_part)) = cleaned.split_once(':') {
        if seconds_part.contains(':') {
            return None;
        }
        let minutes: i64 = minutes_part.parse().ok()?;
        let seconds: Decimal = seconds_part.parse().ok()?;
        return Some(Decimal::from(minutes * 60) + seconds);
    }

    cleaned.parse().ok()
}

fn parse_quick(cleaned: &str) -> Option<Decimal> {
    let parts: Vec<&str> = cleaned
        .split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [seconds, fraction] => quick_time(0, seconds, fraction),
        [minutes, seconds, fraction] => quick_time(minutes.parse().ok()?, seconds, fraction),
        _ => None,
    }
}

fn quick_time(minutes: i64, seconds_part: &str, fraction_part: &str) -> Option<Decimal> {
    let seconds: i64 = seconds_part.parse().ok()?;
    let fraction: i64 = fraction_part.parse().ok()?;

    // Single digit means tenths; two digits are hundredths.
    let hundredths = if fraction_part.len() == 1 {
        fraction * 10
    } else {
        fraction
    };
    if hundredths >= 100 {
        return None;
    }

    Some(Decimal::from(minutes * 60 + seconds) + Decimal::new(hundredths, 2))
}
