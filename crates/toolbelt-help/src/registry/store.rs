//! Help registry storage

use std::collections::BTreeMap;

use super::builtins::builtin_descriptors;
use crate::config::HelpConfig;
use crate::{Error, Result, UtilityDescriptor, UtilityKind, render, suggest};

/// Orders names alphabetically ignoring case, exact name breaking ties.
type SortKey = (String, String);

fn sort_key(name: &str) -> SortKey {
    (name.to_lowercase(), name.to_string())
}

/// Collects descriptors, rejecting duplicates, then freezes them into a
/// [`HelpRegistry`].
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    entries: BTreeMap<SortKey, UtilityDescriptor>,
    suggestions: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            suggestions: true,
        }
    }

    /// Start from the built-in descriptors.
    pub fn with_builtins() -> Self {
        Self {
            entries: builtin_entries(),
            suggestions: true,
        }
    }

    /// Add one descriptor.
    ///
    /// Fails with [`Error::InvalidDescriptor`] if the descriptor does not
    /// validate and [`Error::DuplicateName`] if the name is taken.
    pub fn register(mut self, desc: UtilityDescriptor) -> Result<Self> {
        desc.validate()?;
        let key = sort_key(&desc.name);
        if self.entries.contains_key(&key) {
            return Err(Error::DuplicateName { name: desc.name });
        }
        self.entries.insert(key, desc);
        Ok(self)
    }

    /// Add several descriptors, stopping at the first failure.
    pub fn register_all(
        self,
        descriptors: impl IntoIterator<Item = UtilityDescriptor>,
    ) -> Result<Self> {
        descriptors
            .into_iter()
            .try_fold(self, |builder, desc| builder.register(desc))
    }

    /// Whether not-found messages carry a "did you mean" hint.
    pub fn suggestions(mut self, enabled: bool) -> Self {
        self.suggestions = enabled;
        self
    }

    pub fn build(self) -> HelpRegistry {
        tracing::debug!(count = self.entries.len(), "Help registry built");
        HelpRegistry {
            entries: self.entries,
            suggestions: self.suggestions,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable table of utility descriptors, ordered alphabetically by name
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRegistry {
    entries: BTreeMap<SortKey, UtilityDescriptor>,
    suggestions: bool,
}

impl HelpRegistry {
    /// A registry holding every built-in utility.
    pub fn with_builtins() -> Self {
        RegistryBuilder::with_builtins().build()
    }

    /// Built-ins plus the extra utilities and render options of `config`.
    ///
    /// Extras that fail validation are skipped with a warning. An extra
    /// whose name is already taken fails with [`Error::DuplicateName`].
    pub fn from_config(config: &HelpConfig) -> Result<Self> {
        let mut builder = RegistryBuilder::with_builtins().suggestions(config.render.suggestions);
        for desc in &config.utilities {
            if let Err(e) = desc.validate() {
                tracing::warn!("Skipping configured utility: {}", e);
                continue;
            }
            builder = builder.register(desc.clone())?;
        }
        Ok(builder.build())
    }

    /// Every registered name, sorted case-insensitively with the exact name
    /// breaking ties.
    pub fn list_all(&self) -> Vec<&str> {
        self.entries.keys().map(|(_, name)| name.as_str()).collect()
    }

    /// Exact, case-sensitive lookup.
    pub fn describe(&self, name: &str) -> Result<&UtilityDescriptor> {
        let found = self.entries.get(&sort_key(name));
        tracing::debug!(name, found = found.is_some(), "describe");
        found.ok_or_else(|| Error::not_found(name))
    }

    /// Lookup the way the interactive prompt reads input: an exact name, a
    /// 1-based position in [`list_all`](Self::list_all), or a name that
    /// matches ignoring case.
    pub fn resolve(&self, query: &str) -> Result<&UtilityDescriptor> {
        let query = query.trim();
        if let Some(desc) = self.entries.get(&sort_key(query)) {
            return Ok(desc);
        }
        if let Ok(position) = query.parse::<usize>() {
            if let Some(desc) = position
                .checked_sub(1)
                .and_then(|index| self.entries.values().nth(index))
            {
                return Ok(desc);
            }
        }
        self.entries
            .values()
            .find(|desc| desc.name.eq_ignore_ascii_case(query))
            .ok_or_else(|| Error::not_found(query))
    }

    /// Closest registered name to `query`, for "did you mean" hints.
    pub fn suggest(&self, query: &str) -> Option<&str> {
        suggest::closest(query, self.list_all())
    }

    /// Names of one kind, sorted.
    pub fn by_kind(&self, kind: UtilityKind) -> Vec<&str> {
        self.entries
            .values()
            .filter(|desc| desc.kind == kind)
            .map(|desc| desc.name.as_str())
            .collect()
    }

    /// With `None`, the one-line listing of every utility. With a name, its
    /// full help block or a not-found message. Never fails.
    pub fn helpme(&self, name: Option<&str>) -> String {
        let Some(name) = name else {
            return render::listing(self.entries.values());
        };
        match self.describe(name) {
            Ok(desc) => render::detail(desc),
            Err(_) => {
                let hint = if self.suggestions {
                    self.suggest(name)
                } else {
                    None
                };
                render::not_found(name, hint)
            }
        }
    }

    /// The listing with each line numbered the way [`resolve`](Self::resolve)
    /// accepts.
    pub fn helpme_numbered(&self) -> String {
        render::numbered(self.entries.values())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&sort_key(name))
    }

    pub fn suggestions_enabled(&self) -> bool {
        self.suggestions
    }

    /// Descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &UtilityDescriptor> {
        self.entries.values()
    }
}

impl Default for HelpRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn builtin_entries() -> BTreeMap<SortKey, UtilityDescriptor> {
    builtin_descriptors()
        .into_iter()
        .map(|desc| (sort_key(&desc.name), desc))
        .collect()
}
