//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows headline retirement figures, the current identity, and quick
//! links into the gated sections. Quick-link gating reads the durable
//! feature cache directly rather than going through the session store.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::RetirementSummary;
use crate::state::session::{self, FEATURES_KEY, SessionState};
use crate::state::ui::UiState;
use crate::util::{preferences, storage};

/// Format a currency amount with thousands separators, e.g. `$1,250,000`.
pub(crate) fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Whether a quick link should appear, based on the durable flag cache.
pub(crate) fn quick_link_enabled(cache: Option<&HashMap<String, bool>>, flag: &str) -> bool {
    cache.and_then(|map| map.get(flag).copied()).unwrap_or(false)
}

/// Dashboard page — summary figures, identity, theme toggle, sign-out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let summary = RwSignal::new(None::<RetirementSummary>);

    // Apply the persisted theme and fetch the summary once on mount.
    let mounted = RwSignal::new(false);
    Effect::new(move || {
        if mounted.get() {
            return;
        }
        mounted.set(true);
        let prefs = preferences::load();
        ui.update(|u| u.dark_mode = prefs.dark_mode);
        preferences::apply_dark_mode(prefs.dark_mode);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(figures) = crate::net::api::fetch_retirement_summary().await {
                summary.set(Some(figures));
            }
        });
    });

    let identity = move || {
        session
            .get()
            .user
            .map(|u| u.name.unwrap_or(u.email))
            .unwrap_or_else(|| "…".to_owned())
    };

    let on_toggle_theme = move |_| {
        let next = preferences::toggle_dark_mode(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_sign_out = move |_| {
        session::sign_out(session);
        navigate("/login", NavigateOptions::default());
    };

    // Pages read the durable feature cache directly (not the session
    // store); the simulation link follows the cached flag.
    let simulation_enabled = move || {
        let cache: Option<HashMap<String, bool>> = storage::load_json(FEATURES_KEY);
        quick_link_enabled(cache.as_ref(), "simulation")
    };
    let admin_enabled = move || session::is_admin(&session.get());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Retyrment"</h1>
                <div class="dashboard-header__actions">
                    <span class="dashboard-header__identity">{identity}</span>
                    <button class="dashboard-header__button" on:click=on_toggle_theme>
                        {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                    </button>
                    <button class="dashboard-header__button" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </div>
            </header>

            <section class="dashboard-summary">
                <Show
                    when=move || summary.get().is_some()
                    fallback=|| view! { <p class="dashboard-summary__empty">"Loading figures..."</p> }
                >
                    {move || summary.get().map(|s| view! {
                        <div class="dashboard-summary__cards">
                            <div class="summary-card">
                                <span class="summary-card__label">"Net worth"</span>
                                <span class="summary-card__value">{format_currency(s.net_worth)}</span>
                            </div>
                            <div class="summary-card">
                                <span class="summary-card__label">"Monthly contribution"</span>
                                <span class="summary-card__value">{format_currency(s.monthly_contribution)}</span>
                            </div>
                            <div class="summary-card">
                                <span class="summary-card__label">{format!("Projected income at {}", s.target_age)}</span>
                                <span class="summary-card__value">{format_currency(s.projected_income)}</span>
                            </div>
                        </div>
                    })}
                </Show>
            </section>

            <nav class="dashboard-links">
                <Show when=simulation_enabled>
                    <A href="/simulation">"Run a projection"</A>
                </Show>
                <Show when=admin_enabled>
                    <A href="/admin">"Manage users"</A>
                </Show>
            </nav>
        </div>
    }
}
