//! Route guard gating authenticated pages on token, role, and features.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route except `/login`. The decision itself is a pure
//! function over the session snapshot so the gate order is natively
//! testable; the component only wires it to navigation and the mount-time
//! session load.
//!
//! ERROR HANDLING
//! ==============
//! All denials are silent redirects: no-token, non-admin, and
//! missing-feature are indistinguishable to the user.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{self, SessionState};
use crate::util::auth;

/// Outcome of the guard's ordered gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    RedirectLogin,
    RedirectHome,
    Render,
}

/// Ordered hard gates: token, then role, then feature flag.
///
/// A token-holding session whose user has not loaded yet passes gates
/// (2) and (3) only if they are not required; the first render after
/// login is provisional by design.
pub fn route_decision(
    token_present: bool,
    state: &SessionState,
    require_admin: bool,
    require_feature: Option<&str>,
) -> RouteDecision {
    if !token_present {
        return RouteDecision::RedirectLogin;
    }
    if require_admin && !session::is_admin(state) {
        return RouteDecision::RedirectHome;
    }
    if let Some(flag) = require_feature {
        if !session::feature_enabled(state, flag) {
            return RouteDecision::RedirectHome;
        }
    }
    RouteDecision::Render
}

/// Login path carrying the attempted location for post-login return.
/// Accepts the query with or without its leading `?`.
pub(crate) fn login_redirect_target(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    let attempted = if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    };
    if attempted.is_empty() || attempted == "/" {
        return "/login".to_owned();
    }
    format!("/login?from={}", urlencoding::encode(&attempted))
}

/// Guard component: renders children only when every gate passes.
///
/// Mount side effect: with a token but no cached user, it fires
/// `load_session` without blocking the render; with a loaded session it
/// fires `refresh_features_if_needed` instead.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] require_admin: bool,
    #[prop(optional)] require_feature: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    // Fire the session load/refresh once per mount.
    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() || !auth::is_logged_in() {
            return;
        }
        let state = session.get();
        if state.loading {
            return;
        }
        started.set(true);
        #[cfg(feature = "hydrate")]
        {
            if state.user.is_none() {
                leptos::task::spawn_local(session::load_session(session));
            } else {
                leptos::task::spawn_local(session::refresh_features_if_needed(session));
            }
        }
    });

    let decision = move || {
        route_decision(
            auth::is_logged_in(),
            &session.get(),
            require_admin,
            require_feature.as_deref(),
        )
    };

    let decision_nav = decision.clone();
    Effect::new(move || match decision_nav() {
        RouteDecision::RedirectLogin => {
            let target =
                login_redirect_target(&location.pathname.get(), &location.search.get());
            navigate(&target, NavigateOptions::default());
        }
        RouteDecision::RedirectHome => navigate("/", NavigateOptions::default()),
        RouteDecision::Render => {}
    });

    view! {
        <Show when=move || decision() == RouteDecision::Render>
            {children()}
        </Show>
    }
}
