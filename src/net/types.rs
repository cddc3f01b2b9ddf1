//! Wire types for the backend REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Body of `GET /auth/me`.
///
/// The only field this client consumes is the superuser flag; `default` makes
/// an absent field deserialize as `false` rather than failing the decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserIdentity {
    #[serde(default)]
    pub is_superuser: bool,
}

/// Body of `POST /auth/jwt/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// A user row as listed by the admin users endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_superuser: bool,
}

/// One workout in the workouts list.
#[derive(Clone, Debug, Deserialize)]
pub struct WorkoutSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
