#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserIdentity;

/// Authentication state tracking the current identity and loading status.
///
/// Provided as a reactive context from the root component. `loading` is true
/// until the initial identity fetch settles, so pages can avoid redirect
/// flicker during hydration.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    pub loading: bool,
}

impl AuthState {
    /// Whether the current session resolved to a superuser.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_superuser)
    }
}
