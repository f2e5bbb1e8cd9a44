#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preferences_default_to_light_mode_usd() {
    let prefs = UserPreferences::default();
    assert!(!prefs.dark_mode);
    assert_eq!(prefs.currency, "USD");
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let prefs: UserPreferences = serde_json::from_str("{}").unwrap();
    assert_eq!(prefs, UserPreferences::default());
}

#[test]
fn stored_fields_override_defaults() {
    let prefs: UserPreferences =
        serde_json::from_str(r#"{"dark_mode":true,"currency":"EUR"}"#).unwrap();
    assert!(prefs.dark_mode);
    assert_eq!(prefs.currency, "EUR");
}

#[test]
fn load_falls_back_to_defaults_without_browser_storage() {
    assert_eq!(load(), UserPreferences::default());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle_dark_mode(false));
    assert!(!toggle_dark_mode(true));
}
