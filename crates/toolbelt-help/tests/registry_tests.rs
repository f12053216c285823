use pretty_assertions::assert_eq;
use rstest::rstest;
use toolbelt_help::{
    BUILTIN_COUNT, Error, HelpRegistry, RegistryBuilder, UtilityDescriptor, UtilityKind, describe,
    helpme, list_all,
};

#[test]
fn test_every_listed_name_describes_itself() {
    let registry = HelpRegistry::with_builtins();
    for name in registry.list_all() {
        assert_eq!(registry.describe(name).unwrap().name, name);
    }
}

#[test]
fn test_list_all_sorted_without_duplicates() {
    let registry = HelpRegistry::with_builtins();
    let names = registry.list_all();
    assert_eq!(names.len(), BUILTIN_COUNT);
    assert!(
        names
            .windows(2)
            .all(|w| (w[0].to_lowercase(), w[0]) < (w[1].to_lowercase(), w[1]))
    );
}

#[test]
fn test_listing_follows_case_insensitive_order() {
    let registry = HelpRegistry::with_builtins();
    let listed: Vec<String> = registry
        .helpme(None)
        .lines()
        .filter_map(|line| line.split_once(" — "))
        .map(|(name, _)| name.to_string())
        .collect();

    let mut sorted = listed.clone();
    sorted.sort_by_key(|name| (name.to_lowercase(), name.clone()));

    assert_eq!(listed, sorted);
    assert_eq!(listed.first().map(String::as_str), Some("Align"));
    assert_eq!(listed.get(1).map(String::as_str), Some("as_price"));
}

#[rstest]
#[case("doesNotExist")]
#[case("AS_PRICE")]
#[case("")]
#[case("as price")]
fn test_describe_unknown(#[case] name: &str) {
    let err = HelpRegistry::with_builtins().describe(name).unwrap_err();
    assert!(matches!(err, Error::NotFound { name: ref n } if n == name));
}

#[test]
fn test_free_functions_match_registry() {
    let registry = HelpRegistry::with_builtins();
    assert_eq!(list_all(), registry.list_all());
    assert_eq!(&describe("xrange").unwrap(), registry.describe("xrange").unwrap());
    assert_eq!(helpme(None), registry.helpme(None));
}

#[test]
fn test_helpme_listing_one_line_per_utility() {
    let registry = HelpRegistry::with_builtins();
    let listing = registry.helpme(None);
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), registry.len());
    for (line, name) in lines.iter().zip(registry.list_all()) {
        assert!(line.starts_with(&format!("{name} — ")), "{line}");
    }
}

#[test]
fn test_helpme_detail_contains_summary_and_examples() {
    let registry = HelpRegistry::with_builtins();
    for desc in registry.iter() {
        let text = registry.helpme(Some(&desc.name));
        assert!(text.contains(&desc.summary));
        for example in &desc.examples {
            assert!(text.contains(&format!("example: {example}")));
        }
    }
}

#[rstest]
#[case("as_prize", Some("as_price"))]
#[case("roman", Some("roman_to_int"))]
#[case("qqq", None)]
fn test_helpme_not_found(#[case] name: &str, #[case] hint: Option<&str>) {
    let text = helpme(Some(name));
    assert!(text.starts_with(&format!("no such utility: '{name}'")));
    match hint {
        Some(hint) => assert!(text.contains(&format!("did you mean '{hint}'?"))),
        None => assert!(!text.contains("did you mean")),
    }
}

#[test]
fn test_helpme_idempotent() {
    let registry = HelpRegistry::with_builtins();
    for query in [None, Some("menu"), Some("nope")] {
        assert_eq!(registry.helpme(query), registry.helpme(query));
    }
}

#[test]
fn test_numbered_listing_matches_resolve() {
    let registry = HelpRegistry::with_builtins();
    let numbered = registry.helpme_numbered();
    for line in numbered.lines() {
        let (number, rest) = line.split_once(' ').unwrap();
        let name = rest.split(" — ").next().unwrap();
        assert_eq!(registry.resolve(number).unwrap().name, name);
    }
}

#[test]
fn test_by_kind_partitions_registry() {
    let registry = HelpRegistry::with_builtins();
    let total: usize = UtilityKind::ALL
        .iter()
        .map(|kind| registry.by_kind(*kind).len())
        .sum();
    assert_eq!(total, registry.len());
    assert!(registry.by_kind(UtilityKind::Constant).contains(&"DEFAULT_CURRENCY"));
}

#[test]
fn test_builder_extends_builtins() {
    let registry = RegistryBuilder::with_builtins()
        .register(
            UtilityDescriptor::new("shout", UtilityKind::Function, "Uppercase text", "")
                .with_example("shout(\"hi\")"),
        )
        .unwrap()
        .build();

    assert_eq!(registry.len(), BUILTIN_COUNT + 1);
    assert!(registry.helpme(None).contains("shout — Uppercase text\n"));
}

#[test]
fn test_register_all_stops_at_duplicate() {
    let descs = vec![
        UtilityDescriptor::new("a", UtilityKind::Function, "first", ""),
        UtilityDescriptor::new("a", UtilityKind::Function, "again", ""),
    ];
    assert!(matches!(
        RegistryBuilder::new().register_all(descs),
        Err(Error::DuplicateName { .. })
    ));
}

#[test]
fn test_builder_rejects_multiline_summary() {
    let desc = UtilityDescriptor::new("wrap", UtilityKind::Function, "line one\nline two", "");
    assert!(matches!(
        RegistryBuilder::with_builtins().register(desc),
        Err(Error::InvalidDescriptor { .. })
    ));
}

#[test]
fn test_registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HelpRegistry>();
}
