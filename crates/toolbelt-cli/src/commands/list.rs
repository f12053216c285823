//! Listing of every utility, optionally filtered by kind

use colored::Colorize;
use toolbelt_help::{HelpRegistry, UtilityDescriptor, UtilityKind, render};

use crate::error::Result;

/// Run the listing command
pub fn run_list(
    registry: &HelpRegistry,
    kind: Option<UtilityKind>,
    numbered: bool,
    json: bool,
) -> Result<()> {
    if json {
        let selected: Vec<&UtilityDescriptor> = registry
            .iter()
            .filter(|desc| kind.is_none_or(|k| desc.kind == k))
            .collect();
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    let (text, count) = match kind {
        None if numbered => (registry.helpme_numbered(), registry.len()),
        None => (registry.helpme(None), registry.len()),
        Some(kind) => filtered(registry, kind, numbered),
    };
    print!("{text}");

    let noun = if count == 1 { "utility" } else { "utilities" };
    println!();
    println!(
        "{} {}. Run {} for details.",
        count.to_string().bold(),
        noun,
        "helpme <NAME>".cyan()
    );
    Ok(())
}

/// Listing of one kind. Numbers keep their position in the full listing
/// so they can still be passed back as a name.
fn filtered(registry: &HelpRegistry, kind: UtilityKind, numbered: bool) -> (String, usize) {
    let selected: Vec<(usize, &UtilityDescriptor)> = registry
        .iter()
        .enumerate()
        .filter(|(_, desc)| desc.kind == kind)
        .collect();
    tracing::debug!(%kind, count = selected.len(), "Filtered listing");

    let text = if numbered {
        selected
            .iter()
            .map(|(i, desc)| format!("{:02} {} — {}\n", i + 1, desc.name, desc.summary))
            .collect()
    } else {
        render::listing(selected.iter().map(|(_, desc)| *desc))
    };
    (text, selected.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toolbelt_help::RegistryBuilder;

    fn registry() -> HelpRegistry {
        RegistryBuilder::new()
            .register(UtilityDescriptor::new("b_fn", UtilityKind::Function, "B", ""))
            .and_then(|b| b.register(UtilityDescriptor::new("a_type", UtilityKind::Type, "A", "")))
            .and_then(|b| b.register(UtilityDescriptor::new("c_fn", UtilityKind::Function, "C", "")))
            .unwrap()
            .build()
    }

    #[test]
    fn test_filtered_keeps_global_numbers() {
        let (text, count) = filtered(&registry(), UtilityKind::Function, true);
        assert_eq!(count, 2);
        assert_eq!(text, "02 b_fn — B\n03 c_fn — C\n");
    }

    #[test]
    fn test_filtered_plain() {
        let (text, count) = filtered(&registry(), UtilityKind::Type, false);
        assert_eq!(count, 1);
        assert_eq!(text, "a_type — A\n");
    }
}
