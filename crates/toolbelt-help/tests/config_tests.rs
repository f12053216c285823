use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use toolbelt_help::{BUILTIN_COUNT, Error, HelpConfig, HelpRegistry, UtilityKind};

const EXTRAS: &str = r#"
[render]
suggestions = false

[[utility]]
name = "shout"
kind = "function"
summary = "Uppercase text"
signature = "shout(text: &str) -> String"
examples = ["shout(\"hi\") == \"HI\""]

[[utility]]
name = "Greeting"
kind = "type"
summary = "A polite hello"
"#;

#[test]
fn test_load_and_build() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("help.toml");
    file.write_str(EXTRAS).unwrap();

    let config = HelpConfig::load(file.path()).unwrap();
    let registry = HelpRegistry::from_config(&config).unwrap();

    assert_eq!(registry.len(), BUILTIN_COUNT + 2);
    assert!(registry.helpme(None).contains("shout — Uppercase text\n"));
    assert_eq!(registry.describe("Greeting").unwrap().kind, UtilityKind::Type);
    assert_eq!(registry.helpme(Some("shou")), "no such utility: 'shou'\n");
}

#[test]
fn test_load_missing_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let err = HelpConfig::load(temp.child("absent.toml").path()).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { .. }));
}

#[test]
fn test_load_malformed_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("broken.toml");
    file.write_str("[[utility]\nname = ").unwrap();

    let err = HelpConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_load_or_default_prefers_explicit_path() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("help.toml");
    std::fs::write(&path, EXTRAS).unwrap();

    let config = HelpConfig::load_or_default(Some(path.as_path())).unwrap();
    assert_eq!(config.utilities.len(), 2);
}

#[test]
fn test_config_duplicate_of_builtin() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("dup.toml");
    file.write_str("[[utility]]\nname = \"menu\"\nsummary = \"mine\"\n")
        .unwrap();

    let config = HelpConfig::load(file.path()).unwrap();
    assert!(matches!(
        HelpRegistry::from_config(&config),
        Err(Error::DuplicateName { name }) if name == "menu"
    ));
}

#[test]
fn test_config_multiline_summary_skipped() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("multiline.toml");
    file.write_str("[[utility]]\nname = \"wrap\"\nsummary = \"\"\"\nline one\nline two\"\"\"\n")
        .unwrap();

    let config = HelpConfig::load(file.path()).unwrap();
    let registry = HelpRegistry::from_config(&config).unwrap();

    assert_eq!(registry.len(), BUILTIN_COUNT);
    assert!(!registry.contains("wrap"));
    assert_eq!(registry.helpme(None).lines().count(), registry.len());
}
