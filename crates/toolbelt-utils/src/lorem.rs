//! Lorem ipsum dummy text
//!
//! Every generator takes the random source as an argument so callers can
//! seed it for reproducible output.

use rand::Rng;
use rand::seq::SliceRandom;

/// Lorem ipsum generator.
pub struct Lorem;

impl Lorem {
    /// Fixed vocabulary the generators draw from.
    pub const WORDS: &'static [&'static str] = &[
        "a", "ac", "accumsan", "ad", "adipiscing", "aenean", "aliquam", "amet", "ante", "aptent",
        "arcu", "at", "auctor", "augue", "bibendum", "class", "commodo", "condimentum", "congue",
        "consectetur", "conubia", "convallis", "cras", "cubilia", "curabitur", "curae", "dapibus",
        "diam", "dictum", "dictumst", "dignissim", "dis", "dolor", "dui", "duis", "efficitur",
        "egestas", "eget", "eleifend", "elit", "enim", "erat", "eros", "est", "et", "etiam", "eu",
        "euismod", "facilisi", "facilisis", "fames", "faucibus", "felis", "fermentum", "finibus",
        "fringilla", "fusce", "gravida", "habitant", "habitasse", "hendrerit", "himenaeos",
        "iaculis", "id", "imperdiet", "in", "integer", "interdum", "ipsum", "justo", "lacinia",
        "lacus", "lectus", "leo", "libero", "ligula", "litora", "lobortis", "lorem", "maecenas",
        "magna", "magnis", "malesuada", "massa", "mattis", "maximus", "metus", "mi", "molestie",
        "mollis", "montes", "morbi", "nam", "nascetur", "natoque", "nec", "neque", "netus", "nibh",
        "nisi", "non", "nostra", "nulla", "nullam", "nunc", "odio", "orci", "ornare",
        "pellentesque", "penatibus", "per", "pharetra", "phasellus", "platea", "porta",
        "porttitor", "posuere", "potenti", "praesent", "primis", "proin", "pulvinar", "purus",
        "quam", "quis", "quisque", "ridiculus", "risus", "rutrum", "sagittis", "sapien",
        "scelerisque", "sem", "semper", "senectus", "sit", "sociosqu", "sodales", "suscipit",
        "suspendisse", "taciti", "tellus", "tempor", "tempus", "torquent", "tortor", "tristique",
        "turpis", "ullamcorper", "ultricies", "urna", "ut", "varius", "vehicula", "vel", "velit",
    ];

    const INNER_PUNCTUATION: &'static [&'static str] = &[",", ",", ",", " -", ";", "'", "\""];
    const FINAL_PUNCTUATION: &'static [&'static str] = &[".", ".", ".", ".", ".", ".", ".", "?", "!"];

    /// A single random word.
    pub fn word<R: Rng>(rng: &mut R) -> &'static str {
        Self::WORDS.choose(rng).copied().unwrap_or("lorem")
    }

    /// A capitalised sentence of 8 to 20 words with occasional inner
    /// punctuation and a terminal `.`, `?` or `!`.
    pub fn sentence<R: Rng>(rng: &mut R) -> String {
        let len = rng.gen_range(8..=20);
        let mut words: Vec<String> = (0..len).map(|_| Self::word(rng).to_string()).collect();

        let marks = rng.gen_range(0..=len / 5);
        for _ in 0..marks {
            let index = rng.gen_range(1..len - 1);
            let mark = Self::INNER_PUNCTUATION.choose(rng).copied().unwrap_or(",");
            if mark == "'" || mark == "\"" {
                words[index] = format!("{mark}{}{mark}", words[index]);
            } else {
                words[index].push_str(mark);
            }
        }

        if let Some(first) = words.first_mut() {
            *first = capitalize(first);
        }
        if let Some(last) = words.last_mut() {
            last.push_str(Self::FINAL_PUNCTUATION.choose(rng).copied().unwrap_or("."));
        }

        words.join(" ")
    }

    /// A paragraph of 4 to 7 sentences.
    pub fn paragraph<R: Rng>(rng: &mut R) -> String {
        let len = rng.gen_range(4..=7);
        (0..len)
            .map(|_| Self::sentence(rng))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 3 to 5 paragraphs separated by blank lines.
    pub fn text<R: Rng>(rng: &mut R) -> String {
        let len = rng.gen_range(3..=5);
        (0..len)
            .map(|_| Self::paragraph(rng))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// A list of random words. `None` (or zero) picks a length from 10 to 20.
    pub fn words<R: Rng>(rng: &mut R, len: Option<usize>) -> Vec<&'static str> {
        let len = match len {
            Some(n) if n > 0 => n,
            _ => rng.gen_range(10..=20),
        };
        (0..len).map(|_| Self::word(rng)).collect()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_word_is_from_vocabulary() {
        let mut rng = rng();
        for _ in 0..50 {
            assert!(Lorem::WORDS.contains(&Lorem::word(&mut rng)));
        }
    }

    #[test]
    fn test_sentence_shape() {
        let mut rng = rng();
        for _ in 0..50 {
            let sentence = Lorem::sentence(&mut rng);
            let count = sentence
                .split_whitespace()
                .filter(|w| w.chars().any(char::is_alphabetic))
                .count();
            assert!((8..=20).contains(&count), "{count} words: {sentence}");
            assert!(sentence.chars().next().unwrap().is_uppercase());
            assert!(sentence.ends_with(['.', '?', '!']));
        }
    }

    #[test]
    fn test_text_has_paragraph_breaks() {
        let mut rng = rng();
        let text = Lorem::text(&mut rng);
        let paragraphs = text.split("\n\n").count();
        assert!((3..=5).contains(&paragraphs));
    }

    #[test]
    fn test_words_length() {
        let mut rng = rng();
        assert_eq!(Lorem::words(&mut rng, Some(4)).len(), 4);

        let default_len = Lorem::words(&mut rng, None).len();
        assert!((10..=20).contains(&default_len));

        let zero_len = Lorem::words(&mut rng, Some(0)).len();
        assert!((10..=20).contains(&zero_len));
    }

    #[test]
    fn test_same_seed_same_text() {
        let a = Lorem::paragraph(&mut StdRng::seed_from_u64(42));
        let b = Lorem::paragraph(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("lorem"), "Lorem");
        assert_eq!(capitalize(""), "");
    }
}
