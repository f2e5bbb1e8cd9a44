//! User display preferences persisted under `retyrment_preferences`.
//!
//! Pages read and write this key directly; the session store never
//! touches it. Dark mode is applied as a `data-theme` attribute on the
//! `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR
//! paths safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use super::storage;

/// Durable-storage key for [`UserPreferences`].
pub const PREFERENCES_KEY: &str = "retyrment_preferences";

fn default_currency() -> String {
    "USD".to_owned()
}

/// Display preferences scoped to the browser, not the account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            currency: default_currency(),
        }
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Load preferences. With nothing stored (or a malformed entry), dark
/// mode follows the system preference and everything else defaults.
pub fn load() -> UserPreferences {
    if let Some(prefs) = storage::load_json(PREFERENCES_KEY) {
        return prefs;
    }
    UserPreferences {
        dark_mode: system_prefers_dark(),
        ..UserPreferences::default()
    }
}

/// Persist preferences.
pub fn save(prefs: &UserPreferences) {
    storage::save_json(PREFERENCES_KEY, prefs);
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply_dark_mode(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, apply it, and persist the new preference.
pub fn toggle_dark_mode(current: bool) -> bool {
    let next = !current;
    apply_dark_mode(next);
    let mut prefs = load();
    prefs.dark_mode = next;
    save(&prefs);
    next
}
