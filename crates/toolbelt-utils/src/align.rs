//! Text alignment shared by the menu, table and countdown renderers

use std::fmt;
use std::str::FromStr;

/// Horizontal alignment within a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    /// Pad `text` with `fill` to `width` chars. Text already at or over
    /// `width` is returned unchanged. Centering puts the odd fill char on
    /// the right.
    pub fn pad(self, text: &str, width: usize, fill: char) -> String {
        let len = text.chars().count();
        if len >= width {
            return text.to_string();
        }
        let gap = width - len;
        let (left, right) = match self {
            Align::Left => (0, gap),
            Align::Right => (gap, 0),
            Align::Center => (gap / 2, gap - gap / 2),
        };

        let mut out = String::with_capacity(width);
        out.extend(std::iter::repeat_n(fill, left));
        out.push_str(text);
        out.extend(std::iter::repeat_n(fill, right));
        out
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "ljust" => Ok(Align::Left),
            "right" | "rjust" => Ok(Align::Right),
            "center" | "centre" => Ok(Align::Center),
            other => Err(format!("unknown alignment '{other}'")),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Align::Left => write!(f, "left"),
            Align::Right => write!(f, "right"),
            Align::Center => write!(f, "center"),
        }
    }
}
