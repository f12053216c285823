//! Roman numeral conversion
//!
//! The table extends the classic symbols with overlined forms for 4000,
//! 5000, 9000 and 10000, so numbers up to 49999 convert without stacking
//! more than four `X̅`.

use crate::{Error, Result};

/// Symbols in descending value order.
const NUMERALS: &[(&str, u32)] = &[
    ("X\u{305}", 10000),
    ("MX\u{305}", 9000),
    ("V\u{305}", 5000),
    ("MV\u{305}", 4000),
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Convert a positive integer to a roman numeral.
///
/// ```
/// use toolbelt_utils::int_to_roman;
///
/// assert_eq!(int_to_roman(999).unwrap(), "CMXCIX");
/// ```
pub fn int_to_roman(num: u32) -> Result<String> {
    if num == 0 {
        return Err(Error::OutOfRange {
            value: 0,
            min: 1,
            max: u32::MAX as i64,
        });
    }

    let mut remaining = num;
    let mut roman = String::new();
    for (symbol, value) in NUMERALS {
        let count = remaining / value;
        remaining %= value;
        for _ in 0..count {
            roman.push_str(symbol);
        }
    }
    Ok(roman)
}

/// Convert a roman numeral back to an integer.
///
/// Two-symbol pairs (`CM`, `IV`, `MX̅`, ...) are matched before single
/// symbols at every position. Plain letters are accepted in either case.
pub fn roman_to_int(input: &str) -> Result<u32> {
    let normalized = input.trim().to_uppercase();
    let mut rest = normalized.as_str();
    let mut total: u32 = 0;

    // Longest symbols first so that "MX̅" wins over "M".
    let mut candidates: Vec<&(&str, u32)> = NUMERALS.iter().collect();
    candidates.sort_by_key(|(symbol, _)| std::cmp::Reverse(symbol.chars().count()));

    'outer: while !rest.is_empty() {
        for (symbol, value) in &candidates {
            if let Some(tail) = rest.strip_prefix(symbol) {
                total = total.saturating_add(*value);
                rest = tail;
                continue 'outer;
            }
        }

        let symbol = rest.chars().next().unwrap_or_default();
        return Err(Error::InvalidRoman {
            input: input.to_string(),
            symbol,
        });
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "I")]
    #[case(4, "IV")]
    #[case(9, "IX")]
    #[case(14, "XIV")]
    #[case(40, "XL")]
    #[case(1994, "MCMXCIV")]
    #[case(3999, "MMMCMXCIX")]
    #[case(4000, "MV\u{305}")]
    #[case(10000, "X\u{305}")]
    fn test_int_to_roman(#[case] num: u32, #[case] expected: &str) {
        assert_eq!(int_to_roman(num).unwrap(), expected);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(int_to_roman(0), Err(Error::OutOfRange { .. })));
    }

    #[rstest]
    #[case("CMXCIX", 999)]
    #[case("mcmxciv", 1994)]
    #[case("MV\u{305}", 4000)]
    #[case("  XII ", 12)]
    fn test_roman_to_int(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(roman_to_int(input).unwrap(), expected);
    }

    #[test]
    fn test_invalid_symbol() {
        let err = roman_to_int("XIZ").unwrap_err();
        assert!(matches!(err, Error::InvalidRoman { symbol: 'Z', .. }));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(roman_to_int("").unwrap(), 0);
    }
}
