//! Build-time configuration.
//!
//! The backend origin is baked in at compile time so the WASM bundle has no
//! runtime config fetch. Every request URL in `net::api` is built through
//! `api_base_url` — there is deliberately no second resolution path.

/// Base URL of the backend API, without a trailing slash.
///
/// Set `FITNESS_API_URL` at build time to point at a deployed backend;
/// defaults to the local dev server.
pub fn api_base_url() -> &'static str {
    option_env!("FITNESS_API_URL").unwrap_or("http://localhost:8000")
}
