use super::*;
use crate::net::types::{Role, User};

fn sample_user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "sam@example.com".to_owned(),
        name: Some("Sam".to_owned()),
        role,
    }
}

fn authenticated_state() -> SessionState {
    SessionState {
        is_authenticated: true,
        user: Some(sample_user(Role::Pro)),
        features: Some(HashMap::from([("simulation".to_owned(), true)])),
        last_features_refresh: Some(1_000.0),
        loading: false,
        epoch: 3,
    }
}

// =============================================================
// needs_features_refresh
// =============================================================

#[test]
fn refresh_not_needed_when_unauthenticated() {
    let state = SessionState::default();
    assert!(!needs_features_refresh(&state, 1_000_000.0));
}

#[test]
fn refresh_needed_when_authenticated_with_no_cache() {
    let state = SessionState {
        last_features_refresh: None,
        ..authenticated_state()
    };
    assert!(needs_features_refresh(&state, 1_000_000.0));
}

#[test]
fn refresh_needed_when_cache_two_minutes_old() {
    let now = 1_000_000.0;
    let state = SessionState {
        last_features_refresh: Some(now - 120_000.0),
        ..authenticated_state()
    };
    assert!(needs_features_refresh(&state, now));
}

#[test]
fn refresh_not_needed_when_cache_fresh() {
    let now = 1_000_000.0;
    let state = SessionState {
        last_features_refresh: Some(now),
        ..authenticated_state()
    };
    assert!(!needs_features_refresh(&state, now));
}

#[test]
fn refresh_boundary_is_strictly_older_than_window() {
    let now = 1_000_000.0;
    let at_window = SessionState {
        last_features_refresh: Some(now - FEATURES_STALE_AFTER_MS),
        ..authenticated_state()
    };
    assert!(!needs_features_refresh(&at_window, now));

    let past_window = SessionState {
        last_features_refresh: Some(now - FEATURES_STALE_AFTER_MS - 1.0),
        ..authenticated_state()
    };
    assert!(needs_features_refresh(&past_window, now));
}

// =============================================================
// feature_enabled / is_admin
// =============================================================

#[test]
fn feature_enabled_false_when_map_unfetched() {
    let state = SessionState::default();
    assert!(!feature_enabled(&state, "simulation"));
}

#[test]
fn feature_enabled_false_when_flag_absent_or_off() {
    let mut state = authenticated_state();
    state.features = Some(HashMap::from([("reports".to_owned(), false)]));
    assert!(!feature_enabled(&state, "reports"));
    assert!(!feature_enabled(&state, "simulation"));
}

#[test]
fn feature_enabled_true_when_flag_set() {
    let state = authenticated_state();
    assert!(feature_enabled(&state, "simulation"));
}

#[test]
fn is_admin_matches_role_exactly() {
    let mut state = authenticated_state();
    assert!(!is_admin(&state));
    state.user = Some(sample_user(Role::Admin));
    assert!(is_admin(&state));
    state.user = None;
    assert!(!is_admin(&state));
}

// =============================================================
// apply_session_fetch
// =============================================================

#[test]
fn session_fetch_success_authenticates_and_records_features() {
    let mut state = SessionState {
        loading: true,
        epoch: 1,
        ..SessionState::default()
    };
    let features = HashMap::from([("simulation".to_owned(), true)]);
    let applied = apply_session_fetch(
        &mut state,
        1,
        Some(sample_user(Role::Free)),
        Some(features.clone()),
        5_000.0,
    );
    assert!(applied);
    assert!(state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(state.user, Some(sample_user(Role::Free)));
    assert_eq!(state.features, Some(features));
    assert_eq!(state.last_features_refresh, Some(5_000.0));
}

#[test]
fn profile_fetch_failure_downgrades_from_any_prior_state() {
    let mut state = authenticated_state();
    let applied = apply_session_fetch(&mut state, 3, None, None, 5_000.0);
    assert!(applied);
    assert_eq!(state.user, None);
    assert!(!state.is_authenticated);
}

#[test]
fn features_fetch_failure_clears_user_despite_profile_success() {
    let mut state = SessionState {
        epoch: 1,
        ..SessionState::default()
    };
    let applied = apply_session_fetch(&mut state, 1, Some(sample_user(Role::Pro)), None, 5_000.0);
    assert!(applied);
    assert_eq!(state.user, None);
    assert!(!state.is_authenticated);
}

#[test]
fn features_are_kept_even_when_profile_fetch_fails() {
    let mut state = SessionState {
        epoch: 1,
        ..SessionState::default()
    };
    let features = HashMap::from([("reports".to_owned(), true)]);
    apply_session_fetch(&mut state, 1, None, Some(features.clone()), 5_000.0);
    assert_eq!(state.features, Some(features));
    assert_eq!(state.last_features_refresh, Some(5_000.0));
    assert!(!state.is_authenticated);
}

#[test]
fn stale_epoch_session_fetch_is_discarded() {
    let mut state = authenticated_state();
    let before = state.clone();
    let applied = apply_session_fetch(&mut state, 2, None, None, 9_000.0);
    assert!(!applied);
    assert_eq!(state, before);
}

// =============================================================
// apply_features_refresh
// =============================================================

#[test]
fn features_refresh_success_replaces_map_and_timestamp() {
    let mut state = authenticated_state();
    let fresh = HashMap::from([("simulation".to_owned(), false)]);
    let applied = apply_features_refresh(&mut state, 3, Some(fresh.clone()), 9_000.0);
    assert!(applied);
    assert_eq!(state.features, Some(fresh));
    assert_eq!(state.last_features_refresh, Some(9_000.0));
    // Auth and user are untouched by a features-only refresh.
    assert!(state.is_authenticated);
    assert!(state.user.is_some());
}

#[test]
fn features_refresh_failure_keeps_previous_map_and_timestamp() {
    let mut state = authenticated_state();
    let before = state.clone();
    let applied = apply_features_refresh(&mut state, 3, None, 9_000.0);
    assert!(!applied);
    assert_eq!(state, before);
}

#[test]
fn stale_epoch_features_refresh_is_discarded() {
    let mut state = authenticated_state();
    let before = state.clone();
    let fresh = HashMap::from([("simulation".to_owned(), false)]);
    let applied = apply_features_refresh(&mut state, 2, Some(fresh), 9_000.0);
    assert!(!applied);
    assert_eq!(state, before);
}

// =============================================================
// apply_sign_out
// =============================================================

#[test]
fn sign_out_resets_state_and_bumps_epoch() {
    let mut state = authenticated_state();
    apply_sign_out(&mut state);
    assert!(!state.is_authenticated);
    assert_eq!(state.user, None);
    assert_eq!(state.features, None);
    assert_eq!(state.last_features_refresh, None);
    assert!(!state.loading);
    assert_eq!(state.epoch, 4);
}

#[test]
fn sign_out_epoch_invalidates_in_flight_fetch() {
    let mut state = authenticated_state();
    let in_flight_epoch = state.epoch;
    apply_sign_out(&mut state);
    let applied = apply_session_fetch(
        &mut state,
        in_flight_epoch,
        Some(sample_user(Role::Pro)),
        Some(HashMap::new()),
        9_000.0,
    );
    assert!(!applied);
    assert!(!state.is_authenticated);
}
