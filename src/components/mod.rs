//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers;
//! `protected_route` gates every authenticated route and `toast_host`
//! renders the notification queue.

pub mod protected_route;
pub mod toast_host;
