//! Help for a single utility

use toolbelt_help::{HelpRegistry, render};

use crate::error::Result;

/// Run the show command. A name that matches nothing prints a not-found
/// message and still succeeds.
pub fn run_show(registry: &HelpRegistry, query: &str, json: bool) -> Result<()> {
    let query = query.trim();
    let found = registry.resolve(query);
    if found.is_err() {
        tracing::debug!(query, "No utility matched");
    }

    if json {
        let value = match found {
            Ok(desc) => serde_json::to_value(desc)?,
            Err(_) => serde_json::json!({
                "error": "not_found",
                "name": query,
                "suggestion": hint(registry, query),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let text = match found {
        Ok(desc) => render::detail(desc),
        Err(_) => registry.helpme(Some(query)),
    };
    print!("{text}");
    Ok(())
}

fn hint<'a>(registry: &'a HelpRegistry, query: &str) -> Option<&'a str> {
    if registry.suggestions_enabled() {
        registry.suggest(query)
    } else {
        None
    }
}
