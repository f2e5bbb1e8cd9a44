//! Shared application state provided via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one `RwSignal`-held state struct. The session store is
//! the only writer of authentication data; toast and UI state are
//! independent presentation concerns.

pub mod session;
pub mod toasts;
pub mod ui;
