//! Compact counters for like/star/follower badges.

/// Format a count with `K` / `M` suffixes.
///
/// Whole multiples drop the decimal (`1000` → `"1K"`); anything else keeps
/// exactly one decimal, so `1999` renders as `"2.0K"`.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        scaled(n, 1_000_000, 'M')
    } else if n >= 1_000 {
        scaled(n, 1_000, 'K')
    } else {
        n.to_string()
    }
}

fn scaled(n: u64, unit: u64, suffix: char) -> String {
    if n % unit == 0 {
        return format!("{}{suffix}", n / unit);
    }
    let value = n as f64 / unit as f64;
    // Halfway values (x.25, x.75) are exact in binary and round up, not to even.
    let quarters = value * 4.0;
    let value = if quarters.fract() == 0.0 && (quarters as u64) % 2 == 1 {
        value + 0.05
    } else {
        value
    };
    format!("{value:.1}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_thousand_is_plain() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_number(1000), "1K");
        assert_eq!(format_number(1500), "1.5K");
        assert_eq!(format_number(1234), "1.2K");
        assert_eq!(format_number(1250), "1.3K");
        assert_eq!(format_number(1999), "2.0K");
        assert_eq!(format_number(42_000), "42K");
    }

    #[test]
    fn test_millions() {
        assert_eq!(format_number(1_000_000), "1M");
        assert_eq!(format_number(2_500_000), "2.5M");
        assert_eq!(format_number(1_750_000), "1.8M");
        assert_eq!(format_number(12_340_000), "12.3M");
    }
}
