//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde stays the only
//! schema authority. A payload that fails to deserialize is handled the
//! same as any other fetch failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Subscription tier / privilege level of an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    Free,
    Pro,
    Admin,
}

/// The authenticated user's profile from `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
}

/// Response shape of `GET /api/auth/features`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesResponse {
    pub features: HashMap<String, bool>,
}

/// Response shape of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Headline retirement figures from `GET /api/retirement/summary`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetirementSummary {
    /// Current total across all linked accounts, in the user's currency.
    pub net_worth: f64,
    /// Combined monthly contribution across income sources.
    pub monthly_contribution: f64,
    /// Projected annual income at the target retirement age.
    pub projected_income: f64,
    pub target_age: u32,
}

/// One row of the admin user table from `GET /api/admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Result of `POST /api/simulation/run`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub years: u32,
    /// Projected balance at the end of the simulated horizon.
    pub final_balance: f64,
    /// Fraction of simulated paths that did not exhaust savings.
    pub success_rate: f64,
}
