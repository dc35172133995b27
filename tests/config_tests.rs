//! Configuration tests - JSON loading, defaults and validation

use std::fs;

use serde_json::json;
use trix::types::{AgentKind, Configuration, DEFAULT_BUFFER, DEFAULT_WIDTH};

#[test]
fn test_missing_keys_take_defaults() {
    let config = Configuration::from_json_str("{}").unwrap();
    assert_eq!(config, Configuration::default());
    assert_eq!(config.width, DEFAULT_WIDTH);
    assert_eq!(config.buffer, DEFAULT_BUFFER);
    assert_eq!(config.agent, AgentKind::Default);
}

#[test]
fn test_nested_sections_merge_with_defaults() {
    let document = json!({
        "width": 9,
        "agent": "greedy",
        "search": { "cutoff_depth": 4 },
        "weights": { "holes": 5.0 }
    });
    let config = Configuration::from_json_str(&document.to_string()).unwrap();
    assert_eq!(config.width, 9);
    assert_eq!(config.agent, AgentKind::Default);
    assert_eq!(config.search.cutoff_depth, 4);
    assert_eq!(config.search.max_nodes, 2000);
    assert_eq!(config.weights.holes, 5.0);
    assert_eq!(config.weights.cleared, -2.5);
}

#[test]
fn test_serialized_names() {
    let config = Configuration {
        agent: AgentKind::Search,
        ..Configuration::default()
    };
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["agent"], "search");
    assert_eq!(value["weights"]["maximum_height"], 2.0);
    assert_eq!(value["input_file"], serde_json::Value::Null);
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("trix-config-{}.json", std::process::id()));
    fs::write(&path, json!({ "buffer": 3 }).to_string()).unwrap();
    let config = Configuration::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.buffer, 3);
}
