use proptest::prelude::*;
use toolbelt_help::{HelpRegistry, RegistryBuilder, UtilityDescriptor, UtilityKind};

fn kind() -> impl Strategy<Value = UtilityKind> {
    prop_oneof![
        Just(UtilityKind::Function),
        Just(UtilityKind::Type),
        Just(UtilityKind::Constant),
    ]
}

proptest! {
    #[test]
    fn test_registered_set_is_listed(
        entries in prop::collection::btree_map("[a-z_][a-z0-9_]{0,12}", kind(), 0..20)
    ) {
        let registry = RegistryBuilder::new()
            .register_all(entries.iter().map(|(name, kind)| {
                UtilityDescriptor::new(name.as_str(), *kind, format!("about {name}"), "")
            }))
            .unwrap()
            .build();

        let expected: Vec<&str> = entries.keys().map(String::as_str).collect();
        prop_assert_eq!(registry.list_all(), expected);
        prop_assert_eq!(registry.helpme(None).lines().count(), entries.len());
        for name in entries.keys() {
            prop_assert_eq!(&registry.describe(name).unwrap().name, name);
        }
    }

    #[test]
    fn test_helpme_never_panics(query in "\\PC{0,30}") {
        let registry = HelpRegistry::with_builtins();
        let text = registry.helpme(Some(&query));
        prop_assert!(!text.is_empty());
        if !registry.contains(&query) {
            prop_assert!(text.starts_with("no such utility"));
            prop_assert!(registry.describe(&query).is_err());
        }
        if let Some(hint) = registry.suggest(&query) {
            prop_assert!(registry.contains(hint));
        }
    }
}
