//! Numbers written out as English words

use crate::{Error, Result};

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Short-scale names, one per group of three digits above the first.
const SCALES: [&str; 12] = [
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
];

/// Write an integer out in English words.
///
/// ```
/// use toolbelt_utils::num_to_word;
///
/// assert_eq!(num_to_word(3523), "three thousand five hundred twenty-three");
/// assert_eq!(num_to_word(-7), "negative seven");
/// ```
pub fn num_to_word(num: i128) -> String {
    if num == 0 {
        return ONES[0].to_string();
    }

    let words = magnitude_words(num.unsigned_abs());
    if num < 0 {
        format!("negative {words}")
    } else {
        words
    }
}

/// Write a floating-point number out in words, reading each decimal digit
/// after "point".
///
/// ```
/// use toolbelt_utils::num_to_word_f64;
///
/// assert_eq!(
///     num_to_word_f64(123.5).unwrap(),
///     "one hundred twenty-three point five"
/// );
/// ```
pub fn num_to_word_f64(num: f64) -> Result<String> {
    if !num.is_finite() || num.abs() >= 1e38 {
        return Err(Error::NotRepresentable { value: num });
    }

    let text = format!("{}", num.abs());
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text.as_str(), ""),
    };

    let whole: u128 = whole
        .parse()
        .map_err(|_| Error::NotRepresentable { value: num })?;

    let mut words = if whole == 0 {
        ONES[0].to_string()
    } else {
        magnitude_words(whole)
    };

    if !fraction.is_empty() {
        words.push_str(" point");
        for digit in fraction.chars().filter_map(|c| c.to_digit(10)) {
            words.push(' ');
            words.push_str(ONES[digit as usize]);
        }
    }

    if num.is_sign_negative() && num != 0.0 {
        words.insert_str(0, "negative ");
    }
    Ok(words)
}

fn magnitude_words(mut n: u128) -> String {
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 1000) as usize);
        n /= 1000;
    }

    let mut parts = Vec::new();
    for (index, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        parts.push(below_thousand(*group));
        if index > 0 {
            parts.push(SCALES[index - 1].to_string());
        }
    }
    parts.join(" ")
}

fn below_thousand(n: usize) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut parts = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds]));
    }
    if rest > 0 {
        parts.push(below_hundred(rest));
    }
    parts.join(" ")
}

fn below_hundred(n: usize) -> String {
    if n < 20 {
        return ONES[n].to_string();
    }
    match n % 10 {
        0 => TENS[n / 10].to_string(),
        unit => format!("{}-{}", TENS[n / 10], ONES[unit]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "zero")]
    #[case(7, "seven")]
    #[case(13, "thirteen")]
    #[case(40, "forty")]
    #[case(42, "forty-two")]
    #[case(100, "one hundred")]
    #[case(101, "one hundred one")]
    #[case(1000, "one thousand")]
    #[case(1_000_001, "one million one")]
    #[case(12_345, "twelve thousand three hundred forty-five")]
    #[case(-15, "negative fifteen")]
    fn test_num_to_word(#[case] num: i128, #[case] expected: &str) {
        assert_eq!(num_to_word(num), expected);
    }

    #[test]
    fn test_extremes_do_not_panic() {
        assert!(num_to_word(i128::MAX).contains("undecillion"));
        assert!(num_to_word(i128::MIN).starts_with("negative one hundred seventy undecillion"));
    }

    #[rstest]
    #[case(0.5, "zero point five")]
    #[case(2.25, "two point two five")]
    #[case(-1.5, "negative one point five")]
    #[case(8.0, "eight")]
    fn test_num_to_word_f64(#[case] num: f64, #[case] expected: &str) {
        assert_eq!(num_to_word_f64(num).unwrap(), expected);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(num_to_word_f64(f64::NAN).is_err());
        assert!(num_to_word_f64(f64::INFINITY).is_err());
        assert!(num_to_word_f64(1e40).is_err());
    }
}
