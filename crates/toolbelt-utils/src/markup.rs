//! HTML-like colour tags for terminal text
//!
//! Wrap text in `<red>...</red>`, `<bgblue>...</bgblue>`, `<b>...</b>` and so
//! on, then [`render`] it into ANSI escape sequences. `<none>` resets
//! everything and needs no closing tag. Unknown tags are left as text.
//!
//! ```
//! use toolbelt_utils::markup;
//!
//! let out = markup::render("<green>ok</green>").unwrap();
//! assert_eq!(out, "\x1b[92mok\x1b[39m");
//! ```

use crate::{Error, Result};

/// Raw ANSI escape sequences.
///
/// Light foregrounds use the 90-97 range, dark ones 30-37; backgrounds are
/// the same names prefixed with `BG_`.
pub mod colors {
    pub const GREY: &str = "\x1b[90m";
    pub const RED: &str = "\x1b[91m";
    pub const GREEN: &str = "\x1b[92m";
    pub const YELLOW: &str = "\x1b[93m";
    pub const BLUE: &str = "\x1b[94m";
    pub const MAGENTA: &str = "\x1b[95m";
    pub const CYAN: &str = "\x1b[96m";
    pub const WHITE: &str = "\x1b[97m";

    pub const DARK_GREY: &str = "\x1b[30m";
    pub const DARK_RED: &str = "\x1b[31m";
    pub const DARK_GREEN: &str = "\x1b[32m";
    pub const DARK_YELLOW: &str = "\x1b[33m";
    pub const DARK_BLUE: &str = "\x1b[34m";
    pub const DARK_MAGENTA: &str = "\x1b[35m";
    pub const DARK_CYAN: &str = "\x1b[36m";
    pub const DARK_WHITE: &str = "\x1b[37m";

    pub const BG_GREY: &str = "\x1b[100m";
    pub const BG_RED: &str = "\x1b[101m";
    pub const BG_GREEN: &str = "\x1b[102m";
    pub const BG_YELLOW: &str = "\x1b[103m";
    pub const BG_BLUE: &str = "\x1b[104m";
    pub const BG_MAGENTA: &str = "\x1b[105m";
    pub const BG_CYAN: &str = "\x1b[106m";
    pub const BG_WHITE: &str = "\x1b[107m";

    pub const BG_DARK_GREY: &str = "\x1b[40m";
    pub const BG_DARK_RED: &str = "\x1b[41m";
    pub const BG_DARK_GREEN: &str = "\x1b[42m";
    pub const BG_DARK_YELLOW: &str = "\x1b[43m";
    pub const BG_DARK_BLUE: &str = "\x1b[44m";
    pub const BG_DARK_MAGENTA: &str = "\x1b[45m";
    pub const BG_DARK_CYAN: &str = "\x1b[46m";
    pub const BG_DARK_WHITE: &str = "\x1b[47m";

    pub const BOLD: &str = "\x1b[1m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const UNDERLINED: &str = "\x1b[4m";
    pub const REVERSE: &str = "\x1b[7m";

    pub const RESET: &str = "\x1b[0;0m";

    pub(crate) const FG_DEFAULT: &str = "\x1b[39m";
    pub(crate) const BG_DEFAULT: &str = "\x1b[49m";
    pub(crate) const BOLD_OFF: &str = "\x1b[22m";
    pub(crate) const ITALIC_OFF: &str = "\x1b[23m";
    pub(crate) const UNDERLINED_OFF: &str = "\x1b[24m";
    pub(crate) const REVERSE_OFF: &str = "\x1b[27m";
}

/// A tag name with its opening and closing escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub name: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

const fn fg(name: &'static str, open: &'static str) -> Tag {
    Tag {
        name,
        open,
        close: colors::FG_DEFAULT,
    }
}

const fn bg(name: &'static str, open: &'static str) -> Tag {
    Tag {
        name,
        open,
        close: colors::BG_DEFAULT,
    }
}

const fn deco(name: &'static str, open: &'static str, close: &'static str) -> Tag {
    Tag { name, open, close }
}

/// Every tag that has a closing counterpart.
pub const TAGS: &[Tag] = &[
    fg("grey", colors::GREY),
    fg("gray", colors::GREY),
    fg("red", colors::RED),
    fg("green", colors::GREEN),
    fg("yellow", colors::YELLOW),
    fg("blue", colors::BLUE),
    fg("magenta", colors::MAGENTA),
    fg("cyan", colors::CYAN),
    fg("white", colors::WHITE),
    fg("darkgrey", colors::DARK_GREY),
    fg("darkgray", colors::DARK_GREY),
    fg("darkred", colors::DARK_RED),
    fg("darkgreen", colors::DARK_GREEN),
    fg("darkyellow", colors::DARK_YELLOW),
    fg("darkblue", colors::DARK_BLUE),
    fg("darkmagenta", colors::DARK_MAGENTA),
    fg("darkcyan", colors::DARK_CYAN),
    fg("darkwhite", colors::DARK_WHITE),
    bg("bggrey", colors::BG_GREY),
    bg("bggray", colors::BG_GREY),
    bg("bgred", colors::BG_RED),
    bg("bggreen", colors::BG_GREEN),
    bg("bgyellow", colors::BG_YELLOW),
    bg("bgblue", colors::BG_BLUE),
    bg("bgmagenta", colors::BG_MAGENTA),
    bg("bgcyan", colors::BG_CYAN),
    bg("bgwhite", colors::BG_WHITE),
    bg("bgdarkgrey", colors::BG_DARK_GREY),
    bg("bgdarkgray", colors::BG_DARK_GREY),
    bg("bgdarkred", colors::BG_DARK_RED),
    bg("bgdarkgreen", colors::BG_DARK_GREEN),
    bg("bgdarkyellow", colors::BG_DARK_YELLOW),
    bg("bgdarkblue", colors::BG_DARK_BLUE),
    bg("bgdarkmagenta", colors::BG_DARK_MAGENTA),
    bg("bgdarkcyan", colors::BG_DARK_CYAN),
    bg("bgdarkwhite", colors::BG_DARK_WHITE),
    deco("bold", colors::BOLD, colors::BOLD_OFF),
    deco("b", colors::BOLD, colors::BOLD_OFF),
    deco("italic", colors::ITALIC, colors::ITALIC_OFF),
    deco("i", colors::ITALIC, colors::ITALIC_OFF),
    deco("underlined", colors::UNDERLINED, colors::UNDERLINED_OFF),
    deco("u", colors::UNDERLINED, colors::UNDERLINED_OFF),
    deco("reverse", colors::REVERSE, colors::REVERSE_OFF),
    deco("r", colors::REVERSE, colors::REVERSE_OFF),
];

const NONE_OPEN: &str = "<none>";
const NONE_CLOSE: &str = "</none>";

impl Tag {
    fn opening(&self) -> String {
        format!("<{}>", self.name)
    }

    fn closing(&self) -> String {
        format!("</{}>", self.name)
    }
}

/// Render tags into escape sequences, failing if any tag is unbalanced.
///
/// The error lists every tag whose opening and closing counts differ.
pub fn render(text: &str) -> Result<String> {
    let problems = unmatched(text);
    if !problems.is_empty() {
        return Err(Error::UnmatchedTags { problems });
    }
    Ok(apply(text, |_| true))
}

/// Render tags without validation. A tag is only applied when its
/// counterpart appears somewhere in the text.
pub fn render_lenient(text: &str) -> String {
    apply(text, |tag| {
        text.contains(&tag.opening()) && text.contains(&tag.closing())
    })
}

/// Remove every known tag, leaving plain text.
pub fn strip(text: &str) -> String {
    let mut out = text.replace(NONE_OPEN, "").replace(NONE_CLOSE, "");
    for tag in TAGS {
        out = out.replace(&tag.opening(), "").replace(&tag.closing(), "");
    }
    out
}

/// Red text followed by a reset.
pub fn error_message(text: &str) -> String {
    format!("{}{}{}", colors::RED, render_lenient(text), colors::RESET)
}

/// Green text followed by a reset.
pub fn success_message(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, render_lenient(text), colors::RESET)
}

fn unmatched(text: &str) -> Vec<String> {
    let mut problems = Vec::new();
    for tag in TAGS {
        let opening = tag.opening();
        let closing = tag.closing();
        let opened = text.matches(opening.as_str()).count();
        let closed = text.matches(closing.as_str()).count();

        if opened > closed {
            problems.push(format!(
                "{}) Opening '{opening}' tag does not have a matching closing '{closing}' tag",
                problems.len() + 1
            ));
        } else if closed > opened {
            problems.push(format!(
                "{}) Closing '{closing}' tag does not have a matching opening '{opening}' tag",
                problems.len() + 1
            ));
        }
    }
    problems
}

fn apply(text: &str, enabled: impl Fn(&Tag) -> bool) -> String {
    let mut out = text.to_string();
    for tag in TAGS.iter().filter(|tag| enabled(tag)) {
        out = out
            .replace(&tag.opening(), tag.open)
            .replace(&tag.closing(), tag.close);
    }
    out.replace(NONE_OPEN, colors::RESET)
        .replace(NONE_CLOSE, colors::RESET)
}
