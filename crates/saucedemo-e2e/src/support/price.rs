// Currency parsing for displayed prices ("$29.99", "Total: $43.18")

use crate::error::{Error, Result};

/// Parses displayed price text into a number.
///
/// Every character other than ASCII digits and `.` is dropped before
/// parsing, so labels and the currency sign are ignored. Single currency,
/// no locale handling.
pub fn parse_price(text: &str) -> Result<f64> {
    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    numeric
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::InvalidPrice(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_displayed_prices() {
        assert_eq!(parse_price("$29.99").unwrap(), 29.99);
        assert_eq!(parse_price("$0").unwrap(), 0.0);
        assert_eq!(parse_price(" $7.99 ").unwrap(), 7.99);
    }

    #[test]
    fn test_parse_summary_labels() {
        assert_eq!(parse_price("Item total: $39.98").unwrap(), 39.98);
        assert_eq!(parse_price("Tax: $3.20").unwrap(), 3.2);
        assert_eq!(parse_price("Total: $43.18").unwrap(), 43.18);
    }

    #[test]
    fn test_unparseable_text_fails_loudly() {
        for text in ["", "$", "Free", "$1.2.3", "..."] {
            let err = parse_price(text).unwrap_err();
            assert!(
                matches!(&err, Error::InvalidPrice(original) if original == text),
                "unexpected error for {text:?}: {err}"
            );
        }
    }
}
