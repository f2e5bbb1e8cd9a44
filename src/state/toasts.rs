//! Toast notification queue with timed auto-dismissal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any page may push a toast after an API call succeeds or fails. The
//! queue lives in a context-provided `RwSignal`; Leptos effects and views
//! are the subscriber registry, and every `update` is a synchronous
//! full-state broadcast.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// How long a toast stays visible before auto-dismissal.
pub const TOAST_DISMISS_MS: u64 = 5_000;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// A single active notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Active toasts, ordered by insertion.
///
/// `next_id` is a monotonically increasing counter scoped to process
/// lifetime. Ids are never reused, so a late auto-dismiss timer can never
/// remove a newer toast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

/// Append a toast with a fresh id; returns the id assigned.
pub(crate) fn push_toast(state: &mut ToastState, message: String, kind: ToastKind) -> u64 {
    let id = state.next_id;
    state.next_id += 1;
    state.toasts.push(Toast { id, message, kind });
    id
}

/// Remove a toast by id. No-op when the id is already gone.
pub(crate) fn remove_toast(state: &mut ToastState, id: u64) {
    state.toasts.retain(|t| t.id != id);
}

/// Show a toast and schedule its auto-dismissal after
/// [`TOAST_DISMISS_MS`]. Subscribers are notified synchronously.
pub fn show(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) -> u64 {
    let message = message.into();
    let mut id = 0;
    toasts.update(|s| id = push_toast(s, message, kind));

    // Dismissing early does not cancel this timer; the late dismiss is
    // then a no-op.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
        dismiss(toasts, id);
    });

    id
}

/// Dismiss a toast by id. Idempotent; subscribers are notified either way.
pub fn dismiss(toasts: RwSignal<ToastState>, id: u64) {
    toasts.update(|s| remove_toast(s, id));
}
