use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(config.extract_urls_without_protocol);
    assert_eq!(config.hashtag_uri_template, "?hashtag={hashtag}");
    assert!(config.footnotes.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn test_load_kebab_case_keys() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    let config_content = r#"
extract-urls-without-protocol = false
hashtag-uri-template = "https://tent.example/search?q={hashtag}"
footnotes = ["https://a.example", "https://b.example"]
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Config::load(&config_path).unwrap();
    assert!(!config.extract_urls_without_protocol);
    assert!(!config.url_options().extract_urls_without_protocol);
    assert_eq!(config.hashtag_uri_template, "https://tent.example/search?q={hashtag}");
    assert_eq!(config.footnotes, vec!["https://a.example", "https://b.example"]);
}

#[test]
fn test_discover() {
    let temp_dir = tempdir().unwrap();
    assert!(Config::discover(temp_dir.path()).unwrap().is_none());

    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "footnotes = [\"x\"]\n").unwrap();
    let config = Config::discover(temp_dir.path()).unwrap().unwrap();
    assert_eq!(config.footnotes, vec!["x"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = tempdir().unwrap();
    let err = Config::load(&temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_parse_error() {
    let err = Config::from_toml_str("footnotes = [").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));

    let err = Config::from_toml_str("extract-urls-without-protocol = \"yes\"").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_template_needs_exactly_one_placeholder() {
    for (template, found) in [("?tag=", 0), ("{hashtag}/{hashtag}", 2)] {
        let content = format!("hashtag-uri-template = {template:?}");
        match Config::from_toml_str(&content) {
            Err(ConfigError::InvalidTemplate { found: actual, .. }) => assert_eq!(actual, found),
            other => panic!("expected InvalidTemplate for {template:?}, got {other:?}"),
        }
    }
    assert!(validate_hashtag_template("/tags/{hashtag}").is_ok());
}

#[test]
fn test_unknown_keys_warn_with_suggestion() {
    let (config, warnings) = Config::parse_with_warnings("footnote = [\"a\"]\nflavor = \"tent\"\n").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(warnings.len(), 2);
    assert!(
        warnings
            .iter()
            .any(|w| w.message == "Unknown config key: footnote (did you mean: footnotes?)")
    );
    assert!(warnings.iter().any(|w| w.message == "Unknown config key: flavor"));
}

#[test]
fn test_snake_case_key_suggests_kebab_case() {
    assert_eq!(
        suggest_similar_key("extract_urls_without_protocol", KNOWN_KEYS).as_deref(),
        Some("extract-urls-without-protocol")
    );
}

#[test]
fn test_toml_round_trip() {
    let config = Config {
        footnotes: vec!["http://a".into()],
        ..Config::default()
    };
    let rendered = config.to_toml_string().unwrap();
    assert!(rendered.contains("hashtag-uri-template = \"?hashtag={hashtag}\""));
    assert_eq!(Config::from_toml_str(&rendered).unwrap(), config);
}
