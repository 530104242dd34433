use field_scout::cli::commands::{build_synonyms, load_pages};
use field_scout::cli::config::{AppConfig, load_config};

// =========================================================================
// Config defaults and YAML parsing
// =========================================================================

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let config = load_config(Some("/nonexistent/field-scout.yaml"));

    assert_eq!(config.audit.format, "console");
    assert!(config.audit.synonyms.is_none());
    assert!(config.audit.trace.is_none());
    assert_eq!(config.probe.delay_ms, 1000);
    assert!(config.probe.endpoints.is_none());
}

#[test]
fn partial_config_keeps_defaults_for_missing_keys() {
    let yaml = r#"
audit:
  format: markdown
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).expect("valid config");

    assert_eq!(config.audit.format, "markdown");
    assert!(config.audit.synonyms.is_none());
    assert_eq!(config.probe.delay_ms, 1000, "Untouched section keeps defaults");
}

#[test]
fn full_config_round_trips() {
    let yaml = r#"
audit:
  format: json
  synonyms: synonyms.yaml
  trace: audit_trace.jsonl
probe:
  delay_ms: 250
  endpoints: endpoints.txt
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).expect("valid config");

    assert_eq!(config.audit.format, "json");
    assert_eq!(config.audit.synonyms.as_deref(), Some("synonyms.yaml"));
    assert_eq!(config.audit.trace.as_deref(), Some("audit_trace.jsonl"));
    assert_eq!(config.probe.delay_ms, 250);
    assert_eq!(config.probe.endpoints.as_deref(), Some("endpoints.txt"));
}

// =========================================================================
// Command helpers
// =========================================================================

#[test]
fn default_synonym_table_is_used_without_an_override() {
    let table = build_synonyms(None).expect("defaults always load");

    assert!(!table.is_empty());
    assert_eq!(table.tokens_for("venue"), vec!["venue", "location"]);
}

#[test]
fn load_pages_errors_on_missing_path() {
    assert!(load_pages("/nonexistent/page.html").is_err());
}

#[test]
fn load_pages_reads_a_directory_deterministically() {
    let dir = std::env::temp_dir().join("field_scout_cli_tests");
    std::fs::create_dir_all(&dir).expect("temp dir");
    std::fs::write(dir.join("b_players.html"), "<input name='b'>").expect("write");
    std::fs::write(dir.join("a_settings.html"), "<input name='a'>").expect("write");
    std::fs::write(dir.join("notes.txt"), "not html").expect("write");

    let pages = load_pages(dir.to_str().expect("utf8 path")).expect("readable dir");

    let names: Vec<String> = pages
        .iter()
        .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["a_settings.html", "b_players.html"],
        "Sorted order, non-HTML files ignored"
    );

    std::fs::remove_dir_all(&dir).ok();
}
