/// Size and duration formatting utilities — human-readable output.
///
/// All internal sizes are `u64` bytes and all durations are `f64` minutes.
/// Floating point rounding only happens at the display-formatting boundary.

/// Format a byte count into a human-readable string with a binary unit and
/// one decimal ("1.5 KiB", "2.0 GiB"). Bytes are shown whole.
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;
    const TIB: f64 = GIB * 1024.0;

    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < MIB {
        format!("{:.1} KiB", b / KIB)
    } else if b < GIB {
        format!("{:.1} MiB", b / MIB)
    } else if b < TIB {
        format!("{:.1} GiB", b / GIB)
    } else {
        format!("{:.1} TiB", b / TIB)
    }
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Describe a duration given in minutes the way a person would say it
/// ("7 minutes", "an hour", "3 days", "6 months", "1 year, 2 months").
///
/// Each unit is floored, so 119 minutes reads as "an hour". A month is
/// 30.5 days and a year 365 days.
pub fn format_minutes(minutes: f64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    // Negative and NaN inputs collapse to zero.
    let secs = (minutes.max(0.0) * 60.0).round() as u64;

    if secs < 1 {
        return "a moment".to_string();
    }
    if secs < MINUTE {
        return plural(secs, "a second", "seconds");
    }
    if secs < HOUR {
        return plural(secs / MINUTE, "a minute", "minutes");
    }
    if secs < DAY {
        return plural(secs / HOUR, "an hour", "hours");
    }

    let days = secs / DAY;
    let (years, rest) = (days / 365, days % 365);
    let months = months_in(rest);

    match years {
        0 if months == 0 => plural(days, "a day", "days"),
        0 => plural(months, "a month", "months"),
        1 if rest == 0 => "a year".to_string(),
        1 if months == 0 => format!("1 year, {}", plural_count(rest, "day", "days")),
        1 => format!("1 year, {}", plural_count(months, "month", "months")),
        _ => format!("{years} years"),
    }
}

/// Whole 30.5-day months in `days`.
fn months_in(days: u64) -> u64 {
    days * 2 / 61
}

fn plural(value: u64, singular: &str, many: &str) -> String {
    if value == 1 {
        singular.to_string()
    } else {
        format!("{value} {many}")
    }
}

fn plural_count(value: u64, one: &str, many: &str) -> String {
    if value == 1 {
        format!("1 {one}")
    } else {
        format!("{value} {many}")
    }
}

/// Keep at most `max_chars` characters of `name`.
///
/// Counts characters rather than bytes so multi-byte file names never
/// split inside a code point.
pub fn truncate_name(name: &str, max_chars: usize) -> &str {
    match name.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &name[..byte_idx],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kib() {
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
    }

    #[test]
    fn test_format_size_mib() {
        assert_eq!(format_size(1_048_576), "1.0 MiB");
        assert_eq!(format_size(50 * 1_048_576), "50.0 MiB");
    }

    #[test]
    fn test_format_size_gib() {
        assert_eq!(format_size(1_073_741_824), "1.0 GiB");
        assert_eq!(format_size(6 * 1_073_741_824 + 536_870_912), "6.5 GiB");
    }

    #[test]
    fn test_format_size_tib() {
        assert_eq!(format_size(1_099_511_627_776), "1.0 TiB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_minutes_units() {
        assert_eq!(format_minutes(0.0), "a moment");
        assert_eq!(format_minutes(0.5), "30 seconds");
        assert_eq!(format_minutes(1.0), "a minute");
        assert_eq!(format_minutes(7.7), "7 minutes");
        assert_eq!(format_minutes(60.0), "an hour");
        assert_eq!(format_minutes(119.0), "an hour");
        assert_eq!(format_minutes(180.0), "3 hours");
        assert_eq!(format_minutes(1440.0), "a day");
        assert_eq!(format_minutes(3.0 * 1440.0), "3 days");
    }

    #[test]
    fn test_format_minutes_months_and_years() {
        const DAY: f64 = 1440.0;
        assert_eq!(format_minutes(30.0 * DAY), "30 days");
        assert_eq!(format_minutes(31.0 * DAY), "a month");
        assert_eq!(format_minutes(40.0 * DAY), "a month");
        assert_eq!(format_minutes(200.0 * DAY), "6 months");
        assert_eq!(format_minutes(365.0 * DAY), "a year");
        assert_eq!(format_minutes(366.0 * DAY), "1 year, 1 day");
        assert_eq!(format_minutes(385.0 * DAY), "1 year, 20 days");
        assert_eq!(format_minutes(400.0 * DAY), "1 year, 1 month");
        assert_eq!(format_minutes(500.0 * DAY), "1 year, 4 months");
        assert_eq!(format_minutes(800.0 * DAY), "2 years");
    }

    /// Negative or NaN minutes must not panic or produce nonsense.
    #[test]
    fn test_format_minutes_degenerate() {
        assert_eq!(format_minutes(-5.0), "a moment");
        assert_eq!(format_minutes(f64::NAN), "a moment");
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("report.pdf", 60), "report.pdf");
        assert_eq!(truncate_name("abcdef", 3), "abc");
        // Multi-byte characters are counted, not bytes.
        assert_eq!(truncate_name("àèìòù.txt", 2), "àè");
    }
}
