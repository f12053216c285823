//! Small general-purpose helpers.
//!
//! Each module is independent: text formatting ([`price`], [`roman`],
//! [`words`], [`strings`]), terminal output ([`markup`], [`menu`],
//! [`table`], [`countdown`]), randomness ([`lorem`], [`dice`]), float
//! ranges ([`range`]) and a few file and timing helpers.
//!
//! The `toolbelt-help` crate documents every public name here and can
//! print that documentation on demand.

pub mod align;
pub mod countdown;
pub mod dice;
pub mod error;
pub mod files;
pub mod lorem;
pub mod markup;
pub mod menu;
pub mod price;
pub mod range;
pub mod roman;
pub mod strings;
pub mod table;
pub mod timing;
pub mod words;

pub use align::Align;
pub use countdown::{ClockStyle, Countdown, Position, format_clock};
pub use dice::dice_roll;
pub use error::{Error, Result};
pub use files::{file_exists, read_csv};
pub use lorem::Lorem;
pub use markup::{error_message, success_message};
pub use menu::{Border, MenuStyle, menu};
pub use price::{DEFAULT_CURRENCY, as_price};
pub use range::{XRange, xrange};
pub use roman::{int_to_roman, roman_to_int};
pub use strings::StrExt;
pub use table::{Table, TableStyle};
pub use timing::time_this;
pub use words::{num_to_word, num_to_word_f64};
