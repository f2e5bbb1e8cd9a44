//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles token-bearing HTTP calls and `types` defines the shared
//! wire schema. The backend itself lives in a separate repository.

pub mod api;
pub mod types;
