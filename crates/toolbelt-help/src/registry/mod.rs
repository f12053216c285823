//! Help registry: the immutable table of utility descriptors
//!
//! Built once, through [`RegistryBuilder`] or one of the
//! [`HelpRegistry`] constructors, and read-only afterwards.

mod builtins;
mod store;

pub use builtins::{BUILTIN_COUNT, builtin_descriptors};
pub use store::{HelpRegistry, RegistryBuilder};
