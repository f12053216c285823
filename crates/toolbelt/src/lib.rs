//! toolbelt: small general-purpose helpers that document themselves.
//!
//! Every helper from `toolbelt-utils` is available at the top level, next
//! to [`helpme`], which prints what each of them does:
//!
//! ```
//! use toolbelt::{as_price, helpme, int_to_roman};
//!
//! assert_eq!(as_price(4.5, "$"), "$4.50");
//! assert_eq!(int_to_roman(12).unwrap(), "XII");
//! assert!(helpme(Some("int_to_roman")).contains("example: "));
//! ```

pub use toolbelt_help::{HelpRegistry, UtilityDescriptor, UtilityKind, describe, helpme, list_all};
pub use toolbelt_utils::*;

/// Errors from the help registry, kept apart from the helpers' own
/// [`Error`].
pub use toolbelt_help::Error as HelpError;
