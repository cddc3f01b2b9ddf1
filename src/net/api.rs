//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning `None`/error since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Page-facing helpers return `Option`/`Result` outputs instead of panics so
//! fetch failures degrade UI behavior without crashing hydration. The
//! identity check goes through the [`IdentityApi`] trait so the session
//! oracle and its tests can swap the transport.

#![allow(clippy::unused_async)]

use super::types::UserIdentity;

#[cfg(feature = "hydrate")]
use super::types::TokenResponse;

/// Failure modes of an identity-endpoint request.
///
/// Never surfaced to the router: the session oracle downgrades every variant
/// to `false`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// The identity endpoint, as a swappable capability.
///
/// Production uses [`HttpIdentityApi`]; tests inject fakes.
#[allow(async_fn_in_trait)]
pub trait IdentityApi {
    /// `GET /auth/me` with a bearer token.
    async fn fetch_me(&self, token: &str) -> Result<UserIdentity, ApiError>;
}

/// [`IdentityApi`] backed by a real fetch against the configured backend.
#[derive(Clone, Copy, Default)]
pub struct HttpIdentityApi;

impl IdentityApi for HttpIdentityApi {
    async fn fetch_me(&self, token: &str) -> Result<UserIdentity, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}/auth/me", crate::config::api_base_url());
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<UserIdentity>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}

/// Log in via `POST /auth/jwt/login` (form-encoded) and return the token.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are
/// rejected.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/auth/jwt/login", crate::config::api_base_url());
        let form = format!(
            "username={}&password={}",
            form_encode(username),
            form_encode(password)
        );
        let resp = gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("login failed: {}", resp.status()));
        }
        let body: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects the
/// registration.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/auth/register", crate::config::api_base_url());
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("signup failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the workouts list from `GET /workouts`.
/// Returns `None` if unauthenticated or on the server.
pub async fn fetch_workouts() -> Option<Vec<super::types::WorkoutSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized_get("/workouts").await?;
        resp.json().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch one workout from `GET /workouts/{id}`.
pub async fn fetch_workout(id: &str) -> Option<super::types::WorkoutSummary> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized_get(&format!("/workouts/{id}")).await?;
        resp.json().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Fetch all user accounts from `GET /users` (superuser only).
pub async fn fetch_users() -> Option<Vec<super::types::UserAccount>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized_get("/users").await?;
        resp.json().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create the user's profile via `POST /profiles`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_profile(name: &str, country: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use crate::session::TokenStore;
        let token = crate::session::BrowserTokens
            .token()
            .ok_or_else(|| "not logged in".to_owned())?;
        let url = format!("{}/profiles", crate::config::api_base_url());
        let payload = serde_json::json!({ "name": name, "country": country });
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("profile creation failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, country);
        Err("not available on server".to_owned())
    }
}

/// Bearer-authorized GET against the backend; `None` on any failure.
#[cfg(feature = "hydrate")]
async fn authorized_get(path: &str) -> Option<gloo_net::http::Response> {
    use crate::session::TokenStore;
    let token = crate::session::BrowserTokens.token()?;
    let url = format!("{}{path}", crate::config::api_base_url());
    let resp = gloo_net::http::Request::get(&url)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    Some(resp)
}

#[cfg(feature = "hydrate")]
fn form_encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}
