//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session store so
//! theme toggles never touch authentication data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for page chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
