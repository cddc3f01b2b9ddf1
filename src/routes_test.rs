use super::*;
use std::collections::HashSet;

#[test]
fn paths_are_unique() {
    let mut seen = HashSet::new();
    for route in ROUTES {
        assert!(seen.insert(route.path), "duplicate path {}", route.path);
    }
}

#[test]
fn admin_route_carries_both_flags() {
    let access = access_for("/admin/users");
    assert!(access.requires_auth);
    assert!(access.requires_admin);
}

#[test]
fn create_profile_requires_auth_only() {
    let access = access_for("/create-profile");
    assert!(access.requires_auth);
    assert!(!access.requires_admin);
}

#[test]
fn open_routes_carry_no_flags() {
    for path in ["/", "/dashboard", "/signup", "/settings", "/workouts", "/workout/:id"] {
        let access = access_for(path);
        assert!(!access.requires_auth, "{path} should be open");
        assert!(!access.requires_admin, "{path} should be open");
    }
}

#[test]
fn unknown_path_defaults_to_open() {
    assert_eq!(access_for("/does-not-exist"), RouteAccess::default());
}
