//! Pure counter-to-text formatters.

use serde::{Deserialize, Serialize};

/// Greedy subtraction table for standard subtractive Roman notation.
const ROMAN_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Renders `n` as a standard subtractive-notation Roman numeral.
///
/// Returns the empty string for `0` and the sentinel `"?"` for negative
/// values or values above `3999` (out of range, not an error).
///
/// # Examples
///
/// ```
/// assert_eq!(ledger::domain::numeral::roman(1994), "MCMXCIV");
/// assert_eq!(ledger::domain::numeral::roman(0), "");
/// assert_eq!(ledger::domain::numeral::roman(4000), "?");
/// ```
#[must_use]
pub fn roman(n: i64) -> String {
    if !(0..=3999).contains(&n) {
        return "?".to_string();
    }

    let mut remainder = n;
    let mut out = String::new();
    for (value, symbol) in ROMAN_TABLE {
        while remainder >= value {
            out.push_str(symbol);
            remainder -= value;
        }
    }
    out
}

/// Renders `n` as an uppercase letter `A`-`Z` for `1..=26`.
///
/// Anything outside that range falls back to the decimal string; there is
/// deliberately no multi-letter extension (`27` is `"27"`, not `"AA"`), for
/// compatibility with existing ledgers.
#[must_use]
pub fn letter_sequence(n: i64) -> String {
    match u8::try_from(n) {
        Ok(i @ 1..=26) => char::from(b'A' + i - 1).to_string(),
        _ => n.to_string(),
    }
}

/// The numeral system a counter is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumeralStyle {
    /// Plain decimal, e.g. `Atlas 3`.
    #[default]
    Decimal,
    /// Roman numerals, e.g. `Atlas III`.
    Roman,
    /// Single uppercase letters, e.g. `Atlas C`.
    Alphabetic,
}

impl NumeralStyle {
    /// Renders a launch count in this style.
    #[must_use]
    pub fn apply(self, count: u32) -> String {
        match self {
            Self::Decimal => count.to_string(),
            Self::Roman => roman(i64::from(count)),
            Self::Alphabetic => letter_sequence(i64::from(count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(1, "I")]
    #[test_case(4, "IV")]
    #[test_case(9, "IX")]
    #[test_case(40, "XL")]
    #[test_case(90, "XC")]
    #[test_case(400, "CD")]
    #[test_case(900, "CM")]
    #[test_case(1994, "MCMXCIV")]
    #[test_case(2026, "MMXXVI")]
    #[test_case(3999, "MMMCMXCIX")]
    fn roman_matches_the_standard_table(n: i64, expected: &str) {
        assert_eq!(roman(n), expected);
    }

    #[test]
    fn roman_zero_is_empty() {
        assert_eq!(roman(0), "");
    }

    #[test_case(4000; "just above the ceiling")]
    #[test_case(-1; "negative")]
    fn roman_out_of_range_is_a_sentinel(n: i64) {
        assert_eq!(roman(n), "?");
    }

    #[test_case(1, "A")]
    #[test_case(2, "B")]
    #[test_case(26, "Z")]
    fn letters_cover_the_alphabet(n: i64, expected: &str) {
        assert_eq!(letter_sequence(n), expected);
    }

    #[test_case(27, "27")]
    #[test_case(100, "100")]
    #[test_case(0, "0")]
    #[test_case(-3, "-3")]
    fn letters_fall_back_to_decimal_outside_the_alphabet(n: i64, expected: &str) {
        assert_eq!(letter_sequence(n), expected);
    }

    #[test]
    fn style_renders_counts() {
        assert_eq!(NumeralStyle::Decimal.apply(3), "3");
        assert_eq!(NumeralStyle::Roman.apply(3), "III");
        assert_eq!(NumeralStyle::Alphabetic.apply(3), "C");
    }
}
