//! Overlay rendering the active toast queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the app root; re-renders on every queue update and
//! offers manual dismissal ahead of the auto-dismiss timer.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toasts::{self, ToastKind, ToastState};

fn toast_kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
        ToastKind::Warning => "toast toast--warning",
        ToastKind::Info => "toast toast--info",
    }
}

/// Toast overlay, newest at the bottom.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_kind_class(toast.kind)>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toasts::dismiss(toasts, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
