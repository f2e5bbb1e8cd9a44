//! Auth-session store: current user, feature flags, and staleness tracking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned exclusively by this module: route guards and pages read the
//! session from context but mutate it only through the operations here.
//! Fetch failures are treated uniformly as "not logged in": network
//! errors, 401s, and malformed responses all downgrade the session the
//! same way, with no retries.
//!
//! DESIGN
//! ======
//! Every async operation captures `epoch` before awaiting and applies its
//! result only if the epoch is unchanged. Login and sign-out bump the
//! epoch, so a slow stale fetch resolving after a newer login or logout is
//! discarded instead of clobbering fresher state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Role, User};
use crate::util::{auth, storage};

/// Durable-storage key for the cached feature-flag map. Pages read this
/// key directly; only the session store writes it.
pub const FEATURES_KEY: &str = "retyrment_features";

/// Feature caches older than this are re-fetched on the next guard mount.
pub const FEATURES_STALE_AFTER_MS: f64 = 60_000.0;

/// Session state for the current browser user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub features: Option<HashMap<String, bool>>,
    /// Timestamp (ms since epoch) of the last successful features fetch.
    pub last_features_refresh: Option<f64>,
    pub loading: bool,
    /// Generation counter bumped on login/sign-out; in-flight fetches
    /// carrying an older epoch are discarded on completion.
    pub epoch: u64,
}

/// Whether the cached feature map is due for a re-fetch.
///
/// True only when authenticated and the cache is strictly older than
/// [`FEATURES_STALE_AFTER_MS`] (or was never fetched).
pub fn needs_features_refresh(state: &SessionState, now_ms: f64) -> bool {
    if !state.is_authenticated {
        return false;
    }
    match state.last_features_refresh {
        Some(at) => now_ms - at > FEATURES_STALE_AFTER_MS,
        None => true,
    }
}

/// Whether a feature flag is enabled in the session's cached map.
/// Absent flags (and an unfetched map) count as disabled.
pub fn feature_enabled(state: &SessionState, flag: &str) -> bool {
    state
        .features
        .as_ref()
        .and_then(|map| map.get(flag).copied())
        .unwrap_or(false)
}

/// Whether the session's user has the `ADMIN` role.
pub fn is_admin(state: &SessionState) -> bool {
    state.user.as_ref().is_some_and(|u| u.role == Role::Admin)
}

/// Apply the outcome of a combined me + features fetch.
///
/// Returns `false` (leaving the state untouched) when `epoch` no longer
/// matches. Authentication requires both fetches to have succeeded; any
/// failure clears the user. A successful features fetch is recorded even
/// when the profile fetch failed; the map is still valid data.
pub(crate) fn apply_session_fetch(
    state: &mut SessionState,
    epoch: u64,
    user: Option<User>,
    features: Option<HashMap<String, bool>>,
    now_ms: f64,
) -> bool {
    if state.epoch != epoch {
        return false;
    }
    state.loading = false;
    let features_ok = features.is_some();
    if let Some(map) = features {
        state.features = Some(map);
        state.last_features_refresh = Some(now_ms);
    }
    match user {
        Some(u) if features_ok => {
            state.user = Some(u);
            state.is_authenticated = true;
        }
        _ => {
            state.user = None;
            state.is_authenticated = false;
        }
    }
    true
}

/// Apply the outcome of a features-only refresh.
///
/// A failed fetch keeps the previous map and timestamp, so the next
/// staleness check simply fires again. Returns whether a fresh map was
/// stored (and should be persisted).
pub(crate) fn apply_features_refresh(
    state: &mut SessionState,
    epoch: u64,
    features: Option<HashMap<String, bool>>,
    now_ms: f64,
) -> bool {
    if state.epoch != epoch {
        return false;
    }
    let Some(map) = features else {
        return false;
    };
    state.features = Some(map);
    state.last_features_refresh = Some(now_ms);
    true
}

/// Reset to the unauthenticated state, bumping the epoch so any in-flight
/// fetch from the old session is discarded.
pub(crate) fn apply_sign_out(state: &mut SessionState) {
    *state = SessionState {
        epoch: state.epoch + 1,
        ..SessionState::default()
    };
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

async fn fetch_and_apply(session: RwSignal<SessionState>, epoch: u64) {
    // Both fetches fire concurrently; no ordering guarantee between
    // their completions.
    #[cfg(feature = "hydrate")]
    let (user, features) = futures::join!(api::fetch_me(), api::fetch_features());
    #[cfg(not(feature = "hydrate"))]
    let (user, features) = (api::fetch_me().await, api::fetch_features().await);

    if user.is_none() || features.is_none() {
        leptos::logging::warn!("session fetch failed; treating as not logged in");
    }
    let now = now_ms();
    let mut applied = false;
    session.update(|s| applied = apply_session_fetch(s, epoch, user, features.clone(), now));
    if applied {
        if let Some(map) = features {
            storage::save_json(FEATURES_KEY, &map);
        }
    }
}

/// Store `token` and load the session for it.
///
/// Sets `is_authenticated` only after both the profile and features
/// fetches succeed; any failure leaves the session unauthenticated with
/// no user (the token stays stored).
pub async fn login(session: RwSignal<SessionState>, token: &str) {
    auth::set_token(token);
    let mut epoch = 0;
    session.update(|s| {
        s.epoch += 1;
        s.loading = true;
        epoch = s.epoch;
    });
    fetch_and_apply(session, epoch).await;
}

/// Load user + features for an already-stored token (the guard's
/// fire-on-mount path). Applies only if the epoch is still current.
pub async fn load_session(session: RwSignal<SessionState>) {
    let epoch = session.get_untracked().epoch;
    session.update(|s| s.loading = true);
    fetch_and_apply(session, epoch).await;
}

/// Re-fetch the feature map if the cache has gone stale; otherwise no-op.
pub async fn refresh_features_if_needed(session: RwSignal<SessionState>) {
    let state = session.get_untracked();
    if !needs_features_refresh(&state, now_ms()) {
        return;
    }
    let features = api::fetch_features().await;
    if features.is_none() {
        leptos::logging::warn!("features refresh failed; keeping cached flags");
    }
    let now = now_ms();
    let mut applied = false;
    session.update(|s| applied = apply_features_refresh(s, state.epoch, features.clone(), now));
    if applied {
        if let Some(map) = features {
            storage::save_json(FEATURES_KEY, &map);
        }
    }
}

/// Clear the stored token and reset the session synchronously. No HTTP.
/// The durable feature cache is dropped so a later login starts clean.
pub fn sign_out(session: RwSignal<SessionState>) {
    auth::clear_token();
    storage::remove(FEATURES_KEY);
    session.update(apply_sign_out);
}
