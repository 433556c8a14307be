use super::*;
use std::collections::HashMap;

fn lookup(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn defaults_when_no_meta_tags() {
    let config = AppConfig::from_lookup(lookup(&[]));
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.api_base, "");
    assert_eq!(config.app_name, "Taskboard");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn reads_all_meta_tags() {
    let config = AppConfig::from_lookup(lookup(&[
        ("taskboard-api-base", "https://api.example.test/"),
        ("csrf-token", "tok123"),
        ("application-name", "Acme Tasks"),
        ("taskboard-log-level", "debug"),
        ("taskboard-asset-version", "7f3a9c"),
    ]));
    assert_eq!(config.api_base, "https://api.example.test");
    assert_eq!(config.csrf_token.as_deref(), Some("tok123"));
    assert_eq!(config.app_name, "Acme Tasks");
    assert_eq!(config.log_level, log::Level::Debug);
    assert_eq!(config.asset_version.as_deref(), Some("7f3a9c"));
}

#[test]
fn blank_and_invalid_values_fall_back() {
    let config = AppConfig::from_lookup(lookup(&[
        ("csrf-token", "   "),
        ("application-name", ""),
        ("taskboard-log-level", "loud"),
    ]));
    assert!(config.csrf_token.is_none());
    assert_eq!(config.app_name, "Taskboard");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn document_title_appends_app_name() {
    let config = AppConfig::default();
    assert_eq!(config.document_title("Tasks"), "Tasks - Taskboard");
}
