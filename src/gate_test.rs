use super::*;
use crate::net::api::ApiError;
use crate::net::types::UserIdentity;
use crate::routes::access_for;
use futures::executor::block_on;

// =============================================================
// Fakes
// =============================================================

struct FakeTokens(Option<&'static str>);

impl TokenStore for FakeTokens {
    fn token(&self) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

struct FakeApi(Result<bool, u16>);

impl IdentityApi for FakeApi {
    async fn fetch_me(&self, _token: &str) -> Result<UserIdentity, ApiError> {
        match self.0 {
            Ok(is_superuser) => Ok(UserIdentity { is_superuser }),
            Err(code) => Err(ApiError::Status(code)),
        }
    }
}

// =============================================================
// gate_route (global rule)
// =============================================================

#[test]
fn auth_route_without_token_redirects_to_login() {
    let decision = gate_route(access_for("/create-profile"), false);
    assert_eq!(decision, GateDecision::Redirect("/login"));
}

#[test]
fn auth_route_with_token_is_allowed_regardless_of_validity() {
    // Presence only; the global rule never validates the token.
    let decision = gate_route(access_for("/create-profile"), true);
    assert_eq!(decision, GateDecision::Allowed);
}

#[test]
fn open_route_is_allowed_without_token() {
    for path in ["/", "/dashboard", "/signup", "/settings", "/workouts"] {
        assert_eq!(gate_route(access_for(path), false), GateDecision::Allowed);
    }
}

#[test]
fn unknown_route_is_allowed() {
    assert_eq!(gate_route(access_for("/nope"), false), GateDecision::Allowed);
}

// =============================================================
// gate_admin (admin-route rule)
// =============================================================

#[test]
fn admin_without_token_redirects_to_root() {
    let decision = block_on(gate_admin(&FakeTokens(None), &FakeApi(Ok(true))));
    assert_eq!(decision, GateDecision::Redirect("/"));
}

#[test]
fn admin_with_superuser_is_allowed() {
    let decision = block_on(gate_admin(&FakeTokens(Some("abc")), &FakeApi(Ok(true))));
    assert_eq!(decision, GateDecision::Allowed);
}

#[test]
fn admin_with_regular_user_redirects_to_dashboard() {
    let decision = block_on(gate_admin(&FakeTokens(Some("abc")), &FakeApi(Ok(false))));
    assert_eq!(decision, GateDecision::Redirect("/dashboard"));
}

#[test]
fn admin_with_backend_error_redirects_to_dashboard() {
    let decision = block_on(gate_admin(&FakeTokens(Some("abc")), &FakeApi(Err(503))));
    assert_eq!(decision, GateDecision::Redirect("/dashboard"));
}

// =============================================================
// NavEpoch
// =============================================================

#[test]
fn epoch_is_current_until_superseded() {
    let epoch = NavEpoch::new();
    let first = epoch.begin();
    assert!(epoch.is_current(first));

    let second = epoch.begin();
    assert!(!epoch.is_current(first));
    assert!(epoch.is_current(second));
}

#[test]
fn stale_admin_decision_is_dropped() {
    let epoch = NavEpoch::new();

    // First navigation starts a slow admin check.
    let stale = epoch.begin();
    let stale_decision = block_on(gate_admin(&FakeTokens(Some("abc")), &FakeApi(Ok(true))));

    // User navigates again before the check lands.
    let current = epoch.begin();

    // The stale result must not be applied; the new navigation's is.
    assert!(!epoch.is_current(stale));
    assert_eq!(stale_decision, GateDecision::Allowed);
    assert!(epoch.is_current(current));
}
