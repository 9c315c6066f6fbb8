use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let config = Config::from_lookup(lookup(&[])).expect("defaults parse");
    assert_eq!(config.port, 3000);
    assert_eq!(config.gateway_url, "http://localhost:8080");
    assert_eq!(config.idp_url, "http://localhost:8180");
    assert_eq!(config.idp_realm, "medinsight");
    assert_eq!(config.idp_client_id, "medinsight-frontend");
    assert_eq!(config.upstream_timeout, Duration::from_secs(30));
}

#[test]
fn overrides_are_trimmed() {
    let config = Config::from_lookup(lookup(&[
        ("PORT", " 8000 "),
        ("GATEWAY_URL", "https://gateway.medinsight.tn/"),
        ("IDP_URL", "https://sso.medinsight.tn//"),
        ("IDP_REALM", "clinic"),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
    ]))
    .expect("overrides parse");
    assert_eq!(config.port, 8000);
    assert_eq!(config.gateway_url, "https://gateway.medinsight.tn");
    assert_eq!(config.idp_url, "https://sso.medinsight.tn");
    assert_eq!(config.idp_realm, "clinic");
    assert_eq!(config.upstream_timeout, Duration::from_secs(5));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = Config::from_lookup(lookup(&[("PORT", "  "), ("IDP_CLIENT_ID", "")])).expect("blank parse");
    assert_eq!(config.port, 3000);
    assert_eq!(config.idp_client_id, "medinsight-frontend");
}

#[test]
fn invalid_numbers_are_rejected() {
    let err = Config::from_lookup(lookup(&[("PORT", "http")])).expect_err("port must be numeric");
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".to_owned() });

    let err = Config::from_lookup(lookup(&[("UPSTREAM_TIMEOUT_SECS", "-1")])).expect_err("timeout is unsigned");
    assert_eq!(err.to_string(), "invalid UPSTREAM_TIMEOUT_SECS: \"-1\"");
}
