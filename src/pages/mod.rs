//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (data fetches, toast
//! reporting) and stays behind the guard configured in `app`.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod simulation;
