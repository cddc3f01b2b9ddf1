use super::*;

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn is_admin_false_without_user() {
    assert!(!AuthState::default().is_admin());
}

#[test]
fn is_admin_follows_superuser_flag() {
    let state = AuthState {
        user: Some(UserIdentity { is_superuser: true }),
        loading: false,
    };
    assert!(state.is_admin());

    let state = AuthState {
        user: Some(UserIdentity { is_superuser: false }),
        loading: false,
    };
    assert!(!state.is_admin());
}
