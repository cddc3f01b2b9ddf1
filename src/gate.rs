//! Navigation gate: per-transition access decisions.
//!
//! Every route transition resolves to exactly one [`GateDecision`]. The
//! global rule ([`gate_route`]) is synchronous and looks only at token
//! presence; the admin rule ([`gate_admin`]) additionally consults the
//! session oracle. Overlapping navigations each run their own check —
//! [`NavEpoch`] tags checks so a decision that an old navigation left in
//! flight is dropped instead of firing a stale redirect.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::net::api::IdentityApi;
use crate::routes::RouteAccess;
use crate::session::{TokenStore, check_admin_status};

/// Outcome of a gated transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Proceed to the requested route.
    Allowed,
    /// Navigate to this path instead.
    Redirect(&'static str),
}

/// Global pre-transition rule.
///
/// Routes flagged `requires_auth` need a token to be present; validity is
/// not checked here. Everything else passes.
pub fn gate_route(access: RouteAccess, token_present: bool) -> GateDecision {
    if access.requires_auth && !token_present {
        GateDecision::Redirect("/login")
    } else {
        GateDecision::Allowed
    }
}

/// Admin-route rule.
///
/// Missing token sends the visitor to the login page at `/`. With a token,
/// the session oracle decides: superuser proceeds, everyone else (including
/// every failure mode of the check) lands on the dashboard.
pub async fn gate_admin(tokens: &impl TokenStore, api: &impl IdentityApi) -> GateDecision {
    if tokens.token().is_none() {
        return GateDecision::Redirect("/");
    }
    if check_admin_status(tokens, api).await {
        GateDecision::Allowed
    } else {
        GateDecision::Redirect("/dashboard")
    }
}

/// Generation counter superseding stale in-flight checks.
///
/// A navigation calls [`NavEpoch::begin`] and tags its async check with the
/// returned epoch; before applying the decision it verifies the epoch is
/// still current. A later navigation bumps the counter, so the older check's
/// result is discarded. The in-flight request itself is not cancelled.
#[derive(Debug, Default)]
pub struct NavEpoch(AtomicU64);

impl NavEpoch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new navigation epoch, invalidating all earlier ones.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `epoch` is still the most recent navigation.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.0.load(Ordering::Relaxed) == epoch
    }
}
