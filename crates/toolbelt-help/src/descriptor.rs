//! Documentation record for one utility

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// What sort of item a utility is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilityKind {
    #[default]
    Function,
    /// A struct, enum or trait
    Type,
    Constant,
}

impl UtilityKind {
    pub const ALL: [UtilityKind; 3] = [
        UtilityKind::Function,
        UtilityKind::Type,
        UtilityKind::Constant,
    ];
}

impl FromStr for UtilityKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "function" | "functions" | "fn" => Ok(UtilityKind::Function),
            "type" | "types" | "class" => Ok(UtilityKind::Type),
            "constant" | "constants" | "const" | "variable" => Ok(UtilityKind::Constant),
            _ => Err(Error::UnknownKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for UtilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilityKind::Function => write!(f, "function"),
            UtilityKind::Type => write!(f, "type"),
            UtilityKind::Constant => write!(f, "constant"),
        }
    }
}

/// Name, summary, signature and examples of a single utility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityDescriptor {
    /// Unique identifier, the exported Rust name
    pub name: String,
    #[serde(default)]
    pub kind: UtilityKind,
    /// One-line description
    pub summary: String,
    /// Inputs and outputs, for display only
    #[serde(default)]
    pub signature: String,
    /// Literal usage strings, in display order
    #[serde(default)]
    pub examples: Vec<String>,
}

impl UtilityDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: UtilityKind,
        summary: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            summary: summary.into(),
            signature: signature.into(),
            examples: Vec::new(),
        }
    }

    /// Append a usage example (builder pattern).
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Check the fields a registry relies on.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::invalid_descriptor(&self.name, "name must not be empty"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(Error::invalid_descriptor(
                &self.name,
                "name must not contain whitespace",
            ));
        }
        if self.summary.trim().is_empty() {
            return Err(Error::invalid_descriptor(
                &self.name,
                "summary must not be empty",
            ));
        }
        if self.summary.contains(['\n', '\r']) {
            return Err(Error::invalid_descriptor(
                &self.name,
                "summary must be a single line",
            ));
        }
        Ok(())
    }
}
