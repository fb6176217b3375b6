//! Number formatting for report cells.

use crate::diff::ChangeRatio;
use crate::utils::config::DISPLAY_FLOOR;

/// Format bytes as kilobytes (1 kB = 1000 bytes), two decimals, grouped
///
/// Rounds half up on exact integer arithmetic, so `1005` bytes is `1.01 kB`.
/// Formatting the float `1.005` instead would give `1.00 kB`, because the
/// double is slightly below the half; the integer form never has that drift.
pub fn format_kb(bytes: u64) -> String {
    let hundredths = bytes / 10 + u64::from(bytes % 10 >= 5);
    format!(
        "{}.{:02} kB",
        group_thousands(&(hundredths / 100).to_string()),
        hundredths % 100
    )
}

/// Format a change ratio for display
///
/// `New file` for `+inf`, `Deleted` for `-1` (a missing head file, or one
/// emptied to zero bytes), `=` for anything below the display floor,
/// otherwise a signed percentage such as `+5.00%`.
pub fn format_change(change: &ChangeRatio) -> String {
    match change {
        ChangeRatio::New => "New file".to_string(),
        ChangeRatio::Deleted => "Deleted".to_string(),
        ChangeRatio::Finite(r) if *r == -1.0 => "Deleted".to_string(),
        ChangeRatio::Finite(r) if r.abs() < DISPLAY_FLOOR => "=".to_string(),
        ChangeRatio::Finite(r) => {
            let sign = if *r > 0.0 { "+" } else { "-" };
            let digits = format!("{:.2}", r.abs() * 100.0);
            let (whole, frac) = digits.split_once('.').unwrap_or((&digits, "00"));
            format!("{}{}.{}%", sign, group_thousands(whole), frac)
        }
    }
}

/// Threshold fraction as a bare percentage (`0.02` -> `2`, `0.002` -> `0.2`)
///
/// Rounded to nine decimals first so float noise from the multiplication
/// never leaks into the text.
pub fn format_threshold(fraction: f64) -> String {
    let percent = (fraction * 100.0 * 1e9).round() / 1e9;
    percent.to_string()
}

/// Insert `,` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(0), "0.00 kB");
        assert_eq!(format_kb(1000), "1.00 kB");
        assert_eq!(format_kb(1050), "1.05 kB");
        assert_eq!(format_kb(1005), "1.01 kB");
        assert_eq!(format_kb(1004), "1.00 kB");
        assert_eq!(format_kb(999), "1.00 kB");
        assert_eq!(format_kb(131_072), "131.07 kB");
        assert_eq!(format_kb(1_234_567), "1,234.57 kB");
    }

    #[test]
    fn test_format_change_sentinels() {
        assert_eq!(format_change(&ChangeRatio::New), "New file");
        assert_eq!(format_change(&ChangeRatio::Deleted), "Deleted");
    }

    #[test]
    fn test_format_change_emptied_file_is_deleted() {
        assert_eq!(format_change(&ChangeRatio::Finite(-1.0)), "Deleted");
        assert_eq!(format_change(&ChangeRatio::Finite(-0.99)), "-99.00%");
    }

    #[test]
    fn test_format_change_below_floor() {
        assert_eq!(format_change(&ChangeRatio::Finite(0.0)), "=");
        assert_eq!(format_change(&ChangeRatio::Finite(0.00009)), "=");
        assert_eq!(format_change(&ChangeRatio::Finite(-0.00009)), "=");
    }

    #[test]
    fn test_format_change_percent() {
        assert_eq!(format_change(&ChangeRatio::Finite(0.05)), "+5.00%");
        assert_eq!(format_change(&ChangeRatio::Finite(-0.0325)), "-3.25%");
        assert_eq!(format_change(&ChangeRatio::Finite(0.0001)), "+0.01%");
        assert_eq!(format_change(&ChangeRatio::Finite(12.5)), "+1,250.00%");
    }

    #[test]
    fn test_format_threshold() {
        assert_eq!(format_threshold(0.02), "2");
        assert_eq!(format_threshold(0.002), "0.2");
        assert_eq!(format_threshold(0.07), "7");
        assert_eq!(format_threshold(0.0015), "0.15");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
