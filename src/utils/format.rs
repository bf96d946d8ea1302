//! Display helpers for identifiers and USD amounts.

/// Lowercase form used for cache keys and API paths.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.to_lowercase()
}

/// First character uppercased, the rest lowercased (`"bITCOIN"` -> `"Bitcoin"`).
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Two decimal places with comma thousands separators (`43250.5` -> `"43,250.50"`).
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }

    // "-0.00" is not worth a sign
    let sign = if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("BitCoin"), "bitcoin");
        assert_eq!(normalize_identifier("ethereum"), "ethereum");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bitcoin"), "Bitcoin");
        assert_eq!(capitalize("bITCOIN"), "Bitcoin");
        assert_eq!(capitalize("usd-coin"), "Usd-coin");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_format_usd_grouping() {
        assert_eq!(format_usd(43250.5), "43,250.50");
        assert_eq!(format_usd(100.0), "100.00");
        assert_eq!(format_usd(1234567.891), "1,234,567.89");
        assert_eq!(format_usd(999.999), "1,000.00");
        assert_eq!(format_usd(0.000123), "0.00");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-1234.5), "-1,234.50");
        assert_eq!(format_usd(-0.001), "0.00");
    }
}
