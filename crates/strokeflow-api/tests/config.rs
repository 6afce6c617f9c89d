use std::collections::HashMap;
use std::path::PathBuf;

use strokeflow_api::config::{ServiceConfig, DEFAULT_BIND};
use strokeflow_api::state::AppState;
use strokeflow_workflow::visits::create_visit;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind, DEFAULT_BIND.parse().unwrap());
    assert_eq!(config.data_dir, None);
    assert!(!config.log_json);
}

#[test]
fn reads_all_variables() {
    let config = ServiceConfig::from_lookup(lookup(&[
        ("STROKEFLOW_BIND", "0.0.0.0:9000"),
        ("STROKEFLOW_DATA_DIR", "/var/lib/strokeflow"),
        ("STROKEFLOW_LOG_JSON", "true"),
    ]))
    .unwrap();
    assert_eq!(config.bind.port(), 9000);
    assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/strokeflow")));
    assert!(config.log_json);
}

#[test]
fn empty_values_fall_back() {
    let config = ServiceConfig::from_lookup(lookup(&[
        ("STROKEFLOW_BIND", ""),
        ("STROKEFLOW_DATA_DIR", "  "),
    ]))
    .unwrap();
    assert_eq!(config.bind, DEFAULT_BIND.parse().unwrap());
    assert_eq!(config.data_dir, None);
}

#[test]
fn bad_bind_address_is_an_error() {
    let err = ServiceConfig::from_lookup(lookup(&[("STROKEFLOW_BIND", "not-an-address")])).unwrap_err();
    assert!(err.to_string().contains("STROKEFLOW_BIND"));
}

#[tokio::test]
async fn data_dir_selects_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServiceConfig::from_lookup(lookup(&[(
        "STROKEFLOW_DATA_DIR",
        dir.path().to_str().unwrap(),
    )]))
    .unwrap();

    let state = AppState::from_config(&config).await.unwrap();
    let now = "2025-06-01T12:00:00Z".parse().unwrap();
    let visit = create_visit(state.store.as_ref(), "P009", now).await.unwrap();

    assert!(dir.path().join(format!("visits/{}.json", visit.id)).exists());
}
