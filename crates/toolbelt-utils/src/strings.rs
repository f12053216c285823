//! String inspection and manipulation helpers
//!
//! [`StrExt`] is implemented for `str`, so every method is available on
//! `&str` and `String` alike.

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"?([-a-zA-Z\d.`?{}]+@\w+\.\w+)"?"#).expect("Invalid email regex")
});

/// Words accepted by [`StrExt::is_yes`].
const AFFIRMATIVES: &[&str] = &[
    "yes", "ye", "y", "sure", "mhm", "absolutely", "affirmative", "positive", "true",
    "certainly", "yas", "yup", "yip", "ok", "okay", "o.k.", "okie", "yeah", "yah", "aye",
    "alright", "indeed", "uh-huh", "yis", "sey",
];

/// Extension methods for string analysis and reshaping.
pub trait StrExt {
    /// True if `needle` occurs in the string, ignoring case.
    fn contains_ignore_case(&self, needle: &str) -> bool;

    /// True if any of `chars` occurs in the string.
    fn contains_any(&self, chars: &str, case_sensitive: bool) -> bool;

    fn has_digit(&self) -> bool;
    fn has_lower(&self) -> bool;
    fn has_upper(&self) -> bool;

    /// True if the string has anything other than letters and digits.
    /// Whitespace counts as a symbol.
    fn has_symbol(&self) -> bool;

    fn has_whitespace(&self) -> bool;

    /// Loose check that the string starts with something shaped like an
    /// email address (`local@domain.tld`, optionally quoted).
    fn is_email(&self) -> bool;

    /// True if the string reads as a positive answer ("yes", "ok", "sure", ...).
    fn is_yes(&self) -> bool;

    /// Remove every occurrence of each char in `chars`.
    fn remove_chars(&self, chars: &str, case_sensitive: bool) -> String;

    fn reversed(&self) -> String;

    /// Append `amount` newlines.
    fn pad_lines_below(&self, amount: usize) -> String;

    /// Prepend `amount` newlines.
    fn pad_lines_above(&self, amount: usize) -> String;

    /// Surround with `amount` newlines on both sides.
    fn pad_lines_around(&self, amount: usize) -> String;

    /// Put `spaces` copies of `fill` after every char.
    fn expand(&self, spaces: usize, fill: &str) -> String;

    /// Split into chunks of `n` chars; the last chunk may be shorter.
    /// `n == 0` yields no chunks.
    fn split_every(&self, n: usize) -> Vec<String>;

    /// The chars in random order.
    fn shuffled<R: Rng>(&self, rng: &mut R) -> String;

    /// One `•` per char, for hiding passwords.
    fn masked(&self) -> String;

    /// The string without its last `n` chars.
    fn drop_last(&self, n: usize) -> String;
}

impl StrExt for str {
    fn contains_ignore_case(&self, needle: &str) -> bool {
        self.to_lowercase().contains(&needle.to_lowercase())
    }

    fn contains_any(&self, chars: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            chars.chars().any(|c| self.contains(c))
        } else {
            let haystack = self.to_lowercase();
            chars
                .to_lowercase()
                .chars()
                .any(|c| haystack.contains(c))
        }
    }

    fn has_digit(&self) -> bool {
        self.chars().any(|c| c.is_ascii_digit())
    }

    fn has_lower(&self) -> bool {
        self.chars().any(char::is_lowercase)
    }

    fn has_upper(&self) -> bool {
        self.chars().any(char::is_uppercase)
    }

    fn has_symbol(&self) -> bool {
        self.chars().any(|c| !c.is_alphanumeric())
    }

    fn has_whitespace(&self) -> bool {
        self.chars().any(char::is_whitespace)
    }

    fn is_email(&self) -> bool {
        EMAIL_PATTERN.is_match(self)
    }

    fn is_yes(&self) -> bool {
        let answer = self.trim().to_lowercase();
        AFFIRMATIVES.contains(&answer.as_str())
    }

    fn remove_chars(&self, chars: &str, case_sensitive: bool) -> String {
        if case_sensitive {
            self.chars().filter(|c| !chars.contains(*c)).collect()
        } else {
            let unwanted = chars.to_lowercase();
            self.chars()
                .filter(|c| !c.to_lowercase().any(|lower| unwanted.contains(lower)))
                .collect()
        }
    }

    fn reversed(&self) -> String {
        self.chars().rev().collect()
    }

    fn pad_lines_below(&self, amount: usize) -> String {
        format!("{self}{}", "\n".repeat(amount))
    }

    fn pad_lines_above(&self, amount: usize) -> String {
        format!("{}{self}", "\n".repeat(amount))
    }

    fn pad_lines_around(&self, amount: usize) -> String {
        let pad = "\n".repeat(amount);
        format!("{pad}{self}{pad}")
    }

    fn expand(&self, spaces: usize, fill: &str) -> String {
        let gap = fill.repeat(spaces);
        let mut out = String::with_capacity(self.len() * (1 + gap.len()));
        for c in self.chars() {
            out.push(c);
            out.push_str(&gap);
        }
        out
    }

    fn split_every(&self, n: usize) -> Vec<String> {
        if n == 0 {
            return Vec::new();
        }
        let chars: Vec<char> = self.chars().collect();
        chars.chunks(n).map(|chunk| chunk.iter().collect()).collect()
    }

    fn shuffled<R: Rng>(&self, rng: &mut R) -> String {
        let mut chars: Vec<char> = self.chars().collect();
        chars.shuffle(rng);
        chars.into_iter().collect()
    }

    fn masked(&self) -> String {
        "\u{2022}".repeat(self.chars().count())
    }

    fn drop_last(&self, n: usize) -> String {
        let keep = self.chars().count().saturating_sub(n);
        self.chars().take(keep).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[test]
    fn test_contains_variants() {
        assert!("Hello world".contains_ignore_case("WORLD"));
        assert!("Hello".contains_any("xyzH", true));
        assert!(!"Hello".contains_any("xyzh", true));
        assert!("Hello".contains_any("xyzh", false));
    }

    #[test]
    fn test_character_classes() {
        assert!("abc1".has_digit());
        assert!(!"abc".has_digit());
        assert!("aBC".has_lower());
        assert!("abC".has_upper());
        assert!(!"abc".has_upper());
        assert!("abc!".has_symbol());
        assert!("ab c".has_symbol());
        assert!(!"abc123".has_symbol());
        assert!("a\tb".has_whitespace());
    }

    #[rstest]
    #[case("someone@example.com", true)]
    #[case("\"quoted.name@mail.org\"", true)]
    #[case("first.last@host.io trailing", true)]
    #[case("no-at-sign.com", false)]
    #[case("@example.com", false)]
    #[case("user@nodot", false)]
    fn test_is_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(input.is_email(), expected);
    }

    #[rstest]
    #[case("yes", true)]
    #[case("  OK ", true)]
    #[case("uh-huh", true)]
    #[case("no", false)]
    #[case("yesss", false)]
    fn test_is_yes(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(input.is_yes(), expected);
    }

    #[test]
    fn test_remove_chars() {
        assert_eq!("Hello world".remove_chars("wol", true), "He rd");
        assert_eq!("Hello World".remove_chars("wol", false), "He rd");
        assert_eq!("Hello World".remove_chars("wol", true), "He Wrd");
    }

    #[test]
    fn test_reshaping() {
        assert_eq!("abc".reversed(), "cba");
        assert_eq!("x".pad_lines_below(2), "x\n\n");
        assert_eq!("x".pad_lines_above(1), "\nx");
        assert_eq!("x".pad_lines_around(1), "\nx\n");
        assert_eq!("abc".expand(1, " "), "a b c ");
        assert_eq!("ab".expand(2, "-"), "a--b--");
        assert_eq!("secret".masked(), "••••••");
        assert_eq!("Hello".drop_last(2), "Hel");
        assert_eq!("Hi".drop_last(5), "");
    }

    #[test]
    fn test_split_every() {
        assert_eq!("abcdefg".split_every(3), vec!["abc", "def", "g"]);
        assert_eq!("ab".split_every(5), vec!["ab"]);
        assert!("abc".split_every(0).is_empty());
        assert!("".split_every(2).is_empty());
    }

    #[test]
    fn test_shuffled_keeps_chars() {
        let mut rng = StdRng::seed_from_u64(1);
        let shuffled = "hello world".shuffled(&mut rng);

        let mut expected: Vec<char> = "hello world".chars().collect();
        let mut actual: Vec<char> = shuffled.chars().collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_works_on_string() {
        let owned = String::from("Password1!");
        assert!(owned.has_digit() && owned.has_upper() && owned.has_symbol());
    }
}
