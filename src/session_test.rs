use super::*;
use crate::net::api::ApiError;
use crate::net::types::UserIdentity;
use futures::executor::block_on;
use std::cell::Cell;

// =============================================================
// Fakes
// =============================================================

struct FakeTokens(Option<&'static str>);

impl TokenStore for FakeTokens {
    fn token(&self) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

enum Reply {
    Superuser,
    Regular,
    Status(u16),
    Transport,
    Decode,
}

struct FakeApi {
    reply: Reply,
    calls: Cell<u32>,
}

impl FakeApi {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
        }
    }
}

impl IdentityApi for FakeApi {
    async fn fetch_me(&self, _token: &str) -> Result<UserIdentity, ApiError> {
        self.calls.set(self.calls.get() + 1);
        match self.reply {
            Reply::Superuser => Ok(UserIdentity { is_superuser: true }),
            Reply::Regular => Ok(UserIdentity { is_superuser: false }),
            Reply::Status(code) => Err(ApiError::Status(code)),
            Reply::Transport => Err(ApiError::Transport("connection refused".to_owned())),
            Reply::Decode => Err(ApiError::Decode("expected value at line 1".to_owned())),
        }
    }
}

// =============================================================
// check_admin_status
// =============================================================

#[test]
fn no_token_resolves_false_without_network_call() {
    let api = FakeApi::new(Reply::Superuser);
    let result = block_on(check_admin_status(&FakeTokens(None), &api));
    assert!(!result);
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn superuser_response_resolves_true() {
    let api = FakeApi::new(Reply::Superuser);
    assert!(block_on(check_admin_status(&FakeTokens(Some("abc")), &api)));
    assert_eq!(api.calls.get(), 1);
}

#[test]
fn regular_user_resolves_false() {
    let api = FakeApi::new(Reply::Regular);
    assert!(!block_on(check_admin_status(&FakeTokens(Some("abc")), &api)));
}

#[test]
fn non_2xx_status_resolves_false() {
    for code in [301, 401, 403, 500] {
        let api = FakeApi::new(Reply::Status(code));
        assert!(!block_on(check_admin_status(&FakeTokens(Some("abc")), &api)));
    }
}

#[test]
fn transport_failure_resolves_false() {
    let api = FakeApi::new(Reply::Transport);
    assert!(!block_on(check_admin_status(&FakeTokens(Some("abc")), &api)));
}

#[test]
fn malformed_body_resolves_false() {
    let api = FakeApi::new(Reply::Decode);
    assert!(!block_on(check_admin_status(&FakeTokens(Some("abc")), &api)));
}

// =============================================================
// BrowserTokens off-browser
// =============================================================

#[test]
fn browser_tokens_absent_outside_browser() {
    assert!(BrowserTokens.token().is_none());
}
