//! Countdown timer display

use std::io::{self, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use crate::{Align, Error, Result};

/// Longest countdown accepted, in seconds.
pub const MAX_SECONDS: u64 = 24 * 60 * 60;

/// Wall-clock delay between frames in [`Countdown::run`].
pub const TICK: Duration = Duration::from_secs(1);

/// How each tick is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockStyle {
    /// `01:02:03`
    #[default]
    Colons,
    /// `01 hours 02 minutes 03 seconds`
    Words,
    /// `01h02m03s`
    Letters,
}

/// Where each tick sits within a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Default,
    Aligned { align: Align, width: usize },
}

impl FromStr for Position {
    type Err = Error;

    /// Accepts `default`, or `ljust(N)`, `rjust(N)`, `center(N)`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        if s == "default" {
            return Ok(Position::Default);
        }

        let (name, rest) = s
            .split_once('(')
            .ok_or_else(|| Error::countdown(format!("invalid position '{s}'")))?;
        let width = rest
            .strip_suffix(')')
            .and_then(|w| w.trim().parse::<usize>().ok())
            .ok_or_else(|| Error::countdown(format!("invalid width in position '{s}'")))?;
        let align = name.parse::<Align>().map_err(Error::countdown)?;

        Ok(Position::Aligned { align, width })
    }
}

/// A countdown from a fixed duration to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total: u64,
    style: ClockStyle,
    position: Position,
    blink: bool,
}

impl Countdown {
    /// Build from one to three parts: `[s]`, `[m, s]` or `[h, m, s]`.
    ///
    /// Parts may overflow their unit (`[0, 90]` is a minute and a half) as
    /// long as the total stays within 24 hours.
    pub fn from_parts(parts: &[u64]) -> Result<Self> {
        let (hours, minutes, seconds) = match *parts {
            [s] => (0, 0, s),
            [m, s] => (0, m, s),
            [h, m, s] => (h, m, s),
            [] => return Err(Error::countdown("expected at least 1 value, got 0")),
            _ => {
                return Err(Error::countdown(format!(
                    "expected at most 3 values, got {}",
                    parts.len()
                )));
            }
        };

        if hours > 24 {
            return Err(Error::countdown("maximum for hours is 24"));
        }
        let total = hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds);
        if total > MAX_SECONDS {
            return Err(Error::countdown("maximum countdown time is 24 hours"));
        }

        Ok(Self {
            total,
            style: ClockStyle::default(),
            position: Position::default(),
            blink: false,
        })
    }

    pub fn with_style(mut self, style: ClockStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Alternate a `-> ` marker in front of each tick.
    pub fn with_blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }

    pub fn total_seconds(&self) -> u64 {
        self.total
    }

    /// One formatted tick per second, from the full duration down to zero.
    pub fn frames(&self) -> impl Iterator<Item = String> + '_ {
        (0..=self.total).rev().map(|remaining| self.frame(remaining))
    }

    /// Write every frame to `out`, each overwriting the last with `\r`,
    /// waiting `tick` between frames ([`TICK`] for a real clock). Ends with
    /// a newline.
    pub fn run<W: Write>(&self, out: &mut W, tick: Duration) -> io::Result<()> {
        for (i, frame) in self.frames().enumerate() {
            if i > 0 && !tick.is_zero() {
                thread::sleep(tick);
            }
            write!(out, "{frame}\r")?;
            out.flush()?;
        }
        writeln!(out)
    }

    fn frame(&self, remaining: u64) -> String {
        let clock = format_clock(remaining, self.style);
        let placed = match self.position {
            Position::Default => clock,
            Position::Aligned { align, width } => align.pad(&clock, width, ' '),
        };
        if !self.blink {
            return placed;
        }
        let marker = if remaining % 2 == 0 { "-> " } else { "   " };
        format!("{marker}{placed}")
    }
}

/// Format a number of seconds as hours, minutes and seconds.
///
/// ```
/// use toolbelt_utils::{format_clock, ClockStyle};
///
/// assert_eq!(format_clock(3723, ClockStyle::Colons), "01:02:03");
/// assert_eq!(format_clock(3723, ClockStyle::Letters), "01h02m03s");
/// ```
pub fn format_clock(seconds: u64, style: ClockStyle) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    match style {
        ClockStyle::Colons => format!("{h:02}:{m:02}:{s:02}"),
        ClockStyle::Words => format!("{h:02} hours {m:02} minutes {s:02} seconds"),
        ClockStyle::Letters => format!("{h:02}h{m:02}m{s:02}s"),
    }
}
