//! Boxed option menus

use crate::{Align, Error, Result};

/// Box-drawing style for [`menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Border {
    Bold,
    Clean,
    #[default]
    Default,
    Wiggle,
    Double,
}

struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

impl Border {
    fn chars(self) -> BorderChars {
        let (horizontal, vertical, top_left, top_right, bottom_left, bottom_right) = match self {
            Border::Bold => ('━', '┃', '┏', '┓', '┗', '┛'),
            Border::Clean => ('─', '│', '┌', '┐', '└', '┘'),
            Border::Default => ('-', '¦', '+', '+', '+', '+'),
            Border::Wiggle => ('~', '¦', '~', '~', '~', '~'),
            Border::Double => ('═', '║', '╔', '╗', '╚', '╝'),
        };
        BorderChars {
            horizontal,
            vertical,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

/// Layout options for [`menu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyle {
    /// Spaces left and right of the options
    pub spacing: usize,
    /// Blank rows above and below the options
    pub vertical_spacing: usize,
    /// Title centred in the top border
    pub title: Option<String>,
    /// Prefix each option with its 1-based number
    pub numbered: bool,
    pub border: Border,
    pub align: Align,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            spacing: 2,
            vertical_spacing: 1,
            title: Some(" Menu ".to_string()),
            numbered: false,
            border: Border::default(),
            align: Align::Left,
        }
    }
}

/// Render `options` inside a box. Every line, including the last, ends
/// with a newline.
///
/// ```
/// use toolbelt_utils::{menu, MenuStyle};
///
/// let text = menu(&["Start", "Quit"], &MenuStyle::default()).unwrap();
/// assert!(text.contains("Start"));
/// ```
pub fn menu<S: AsRef<str>>(options: &[S], style: &MenuStyle) -> Result<String> {
    if options.is_empty() {
        return Err(Error::EmptyMenu);
    }

    let digits = options.len().to_string().len();
    let labels: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if style.numbered {
                format!("{:0digits$}) {}", i + 1, option.as_ref())
            } else {
                option.as_ref().to_string()
            }
        })
        .collect();

    let widest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let title = style.title.as_deref().unwrap_or("");
    let inner = (widest + style.spacing * 2).max(title.chars().count());
    let content_width = inner - style.spacing * 2;
    let chars = style.border.chars();
    let gap = " ".repeat(style.spacing);

    let mut out = String::new();
    out.push(chars.top_left);
    out.push_str(&Align::Center.pad(title, inner, chars.horizontal));
    out.push(chars.top_right);
    out.push('\n');

    let blank = format!("{}{}{}\n", chars.vertical, " ".repeat(inner), chars.vertical);
    for _ in 0..style.vertical_spacing {
        out.push_str(&blank);
    }
    for label in &labels {
        out.push(chars.vertical);
        out.push_str(&gap);
        out.push_str(&style.align.pad(label, content_width, ' '));
        out.push_str(&gap);
        out.push(chars.vertical);
        out.push('\n');
    }
    for _ in 0..style.vertical_spacing {
        out.push_str(&blank);
    }

    out.push(chars.bottom_left);
    out.extend(std::iter::repeat_n(chars.horizontal, inner));
    out.push(chars.bottom_right);
    out.push('\n');

    Ok(out)
}
