//! Number and money formatting for the site.
//!
//! For address formatting, use [`shared::utils::format_address`] or
//! [`shared::utils::truncate_address`].

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89").
///
/// # Examples
///
/// ```rust
/// use site_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && ch != '-' {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{integer_with_commas}.{decimal_part}")
    }
}

/// Whole-dollar display: 18500 -> "$18,500".
pub fn format_usd(amount: u64) -> String {
    format!("${}", format_number(amount as f64, 0))
}

/// Compact raise figures: $18,500,000 -> "$18.5M", $950,000 -> "$950K".
pub fn format_usd_compact(amount: u64) -> String {
    if amount >= 1_000_000 {
        format!("${:.1}M", amount as f64 / 1_000_000.0)
    } else {
        format!("${:.0}K", amount as f64 / 1_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1_000), "$1,000");
        assert_eq!(format_usd(0), "$0");
    }

    #[test]
    fn test_format_usd_compact() {
        assert_eq!(format_usd_compact(18_500_000), "$18.5M");
        assert_eq!(format_usd_compact(950_000), "$950K");
        assert_eq!(format_usd_compact(12_400_000), "$12.4M");
    }
}
