//! Self-documenting help for the toolbelt utilities.
//!
//! A [`HelpRegistry`] maps each utility name to a [`UtilityDescriptor`]
//! (summary, signature, examples) and renders them as text on demand.
//! The registry is built once and never changes afterwards:
//!
//! ```
//! use toolbelt_help::HelpRegistry;
//!
//! let registry = HelpRegistry::with_builtins();
//! assert!(registry.describe("as_price").is_ok());
//! print!("{}", registry.helpme(Some("as_price")));
//! ```
//!
//! The free functions [`helpme`], [`describe`] and [`list_all`] build a
//! fresh built-in registry per call.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod registry;
pub mod render;
pub mod suggest;

pub use config::{CONFIG_ENV, HelpConfig, RenderConfig};
pub use descriptor::{UtilityDescriptor, UtilityKind};
pub use error::{Error, Result};
pub use registry::{BUILTIN_COUNT, HelpRegistry, RegistryBuilder, builtin_descriptors};

/// Listing of every built-in utility, or the help block for one.
///
/// ```
/// let text = toolbelt_help::helpme(Some("doesNotExist"));
/// assert!(text.starts_with("no such utility"));
/// ```
pub fn helpme(name: Option<&str>) -> String {
    HelpRegistry::with_builtins().helpme(name)
}

/// Descriptor of a built-in utility.
pub fn describe(name: &str) -> Result<UtilityDescriptor> {
    HelpRegistry::with_builtins().describe(name).cloned()
}

/// Names of every built-in utility, sorted ignoring case.
pub fn list_all() -> Vec<String> {
    HelpRegistry::with_builtins()
        .list_all()
        .into_iter()
        .map(str::to_string)
        .collect()
}
