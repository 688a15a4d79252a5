use super::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(Config::parse(""), Some(Config::default()));
}

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.file_extensions, vec!["mit".to_string()]);
    assert_eq!(config.pattern_prefix_chars, 25);
}

#[test]
fn test_partial_override() {
    let config = Config::parse("pattern_prefix_chars = 40\n").unwrap();

    assert_eq!(config.pattern_prefix_chars, 40);
    assert_eq!(config.file_extensions, vec!["mit".to_string()]);
}

#[test]
fn test_full_override() {
    let config = Config::parse(
        "file_extensions = [\"mit\", \"markit\"]\npattern_prefix_chars = 10\n",
    )
    .unwrap();

    assert_eq!(config.file_extensions, vec!["mit", "markit"]);
    assert_eq!(config.pattern_prefix_chars, 10);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("markit.toml");
    fs::write(&path, "pattern_prefix_chars = 12\n").unwrap();

    assert_eq!(Config::load_from(&path).pattern_prefix_chars, 12);
}

#[test]
fn test_missing_or_malformed_file_falls_back() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        Config::load_from(&dir.path().join("absent.toml")),
        Config::default()
    );

    let path = dir.path().join("markit.toml");
    fs::write(&path, "pattern_prefix_chars = \"many\"\n").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}
