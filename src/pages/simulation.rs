//! Retirement projection page. Reached through the guard's
//! `require_feature = "simulation"`; reports outcomes through toasts.

#[cfg(test)]
#[path = "simulation_test.rs"]
mod simulation_test;

use leptos::prelude::*;

use crate::net::types::SimulationResult;
use crate::state::toasts::{self, ToastKind, ToastState};

pub(crate) const MIN_YEARS: u32 = 1;
pub(crate) const MAX_YEARS: u32 = 80;

/// Parse and bound the projection horizon.
pub(crate) fn validate_years_input(raw: &str) -> Result<u32, &'static str> {
    let years: u32 = raw
        .trim()
        .parse()
        .map_err(|_| "Enter a whole number of years.")?;
    if !(MIN_YEARS..=MAX_YEARS).contains(&years) {
        return Err("Years must be between 1 and 80.");
    }
    Ok(years)
}

pub(crate) fn format_success_rate(rate: f64) -> String {
    format!("{:.0}% of paths stayed funded", rate * 100.0)
}

/// Simulation page — runs a projection over a validated horizon.
#[component]
pub fn SimulationPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let years = RwSignal::new("30".to_owned());
    let busy = RwSignal::new(false);
    let result = RwSignal::new(None::<SimulationResult>);

    let on_run = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let horizon = match validate_years_input(&years.get()) {
            Ok(value) => value,
            Err(message) => {
                toasts::show(toasts, message, ToastKind::Warning);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::run_simulation(horizon).await {
                Ok(outcome) => {
                    result.set(Some(outcome));
                    toasts::show(toasts, "Projection complete.", ToastKind::Success);
                }
                Err(e) => {
                    toasts::show(toasts, format!("Projection failed: {e}"), ToastKind::Error);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = horizon;
            busy.set(false);
        }
    };

    view! {
        <div class="simulation-page">
            <h1>"Projection"</h1>
            <form class="simulation-form" on:submit=on_run>
                <label for="sim-years">"Horizon (years)"</label>
                <input
                    id="sim-years"
                    class="simulation-input"
                    type="number"
                    min="1"
                    max="80"
                    prop:value=move || years.get()
                    on:input=move |ev| years.set(event_target_value(&ev))
                />
                <button class="simulation-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Running..." } else { "Run" }}
                </button>
            </form>
            <Show when=move || result.get().is_some()>
                {move || result.get().map(|r| view! {
                    <div class="simulation-result">
                        <p>{format!("After {} years:", r.years)}</p>
                        <p class="simulation-result__balance">
                            {crate::pages::dashboard::format_currency(r.final_balance)}
                        </p>
                        <p>{format_success_rate(r.success_rate)}</p>
                    </div>
                })}
            </Show>
        </div>
    }
}
