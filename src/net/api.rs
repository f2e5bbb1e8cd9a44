//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached. Server-side (SSR): stubs returning
//! `None`/error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth-adjacent fetches return `Option`: network error, 401, and
//! malformed response are indistinguishable to callers and all downgrade
//! the session the same way. Page actions return `Result<_, String>` so
//! forms can surface a failure message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::HashMap;

use super::types::{AdminUser, RetirementSummary, SimulationResult, User};

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn simulation_failed_message(status: u16) -> String {
    format!("simulation failed: {status}")
}

#[cfg(feature = "hydrate")]
fn authorized_get(url: &str) -> gloo_net::http::RequestBuilder {
    let mut req = gloo_net::http::Request::get(url);
    if let Some(token) = crate::util::auth::token() {
        req = req.header("Authorization", &crate::util::auth::bearer_header(&token));
    }
    req
}

#[cfg(feature = "hydrate")]
async fn fetch_authorized_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = authorized_get(url).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: super::types::LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's profile from `GET /api/auth/me`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_me() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        fetch_authorized_json("/api/auth/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the feature-flag map from `GET /api/auth/features`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_features() -> Option<HashMap<String, bool>> {
    #[cfg(feature = "hydrate")]
    {
        let resp: super::types::FeaturesResponse =
            fetch_authorized_json("/api/auth/features").await?;
        Some(resp.features)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch headline retirement figures from `GET /api/retirement/summary`.
pub async fn fetch_retirement_summary() -> Option<RetirementSummary> {
    #[cfg(feature = "hydrate")]
    {
        fetch_authorized_json("/api/retirement/summary").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the full user list from `GET /api/admin/users` (admin only).
pub async fn fetch_admin_users() -> Option<Vec<AdminUser>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_authorized_json("/api/admin/users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Run a retirement projection via `POST /api/simulation/run`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn run_simulation(years: u32) -> Result<SimulationResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "years": years });
        let mut req = gloo_net::http::Request::post("/api/simulation/run");
        if let Some(token) = crate::util::auth::token() {
            req = req.header("Authorization", &crate::util::auth::bearer_header(&token));
        }
        let resp = req
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(simulation_failed_message(resp.status()));
        }
        resp.json::<SimulationResult>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = years;
        Err("not available on server".to_owned())
    }
}
