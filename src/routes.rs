//! Static route table with per-route access requirements.
//!
//! Each entry pairs a path with the metadata the navigation gate consults.
//! The two flags are independent: `requires_auth` gates on token presence
//! only, `requires_admin` gates on a live superuser check. The table does
//! not force admin routes to also set `requires_auth`; the admin guard does
//! its own token-presence check.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Access requirements attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteAccess {
    /// Gate on local token presence (not validity).
    pub requires_auth: bool,
    /// Gate on a live superuser check against the backend.
    pub requires_admin: bool,
}

/// One entry in the route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub access: RouteAccess,
}

const OPEN: RouteAccess = RouteAccess {
    requires_auth: false,
    requires_admin: false,
};

const AUTH: RouteAccess = RouteAccess {
    requires_auth: true,
    requires_admin: false,
};

const ADMIN: RouteAccess = RouteAccess {
    requires_auth: true,
    requires_admin: true,
};

/// The application's route table.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: "/", name: "Login", access: OPEN },
    RouteDescriptor { path: "/dashboard", name: "Dashboard", access: OPEN },
    RouteDescriptor { path: "/signup", name: "SignUp", access: OPEN },
    RouteDescriptor { path: "/create-profile", name: "CreateProfile", access: AUTH },
    RouteDescriptor { path: "/settings", name: "Settings", access: OPEN },
    RouteDescriptor { path: "/admin/users", name: "UserManagement", access: ADMIN },
    RouteDescriptor { path: "/workouts", name: "Workouts", access: OPEN },
    RouteDescriptor { path: "/workout/:id", name: "WorkoutId", access: OPEN },
];

/// Look up the access requirements for a path.
///
/// Unknown paths get the default (open) requirements, matching routes that
/// carry no metadata at all.
pub fn access_for(path: &str) -> RouteAccess {
    ROUTES
        .iter()
        .find(|r| r.path == path)
        .map_or(RouteAccess::default(), |r| r.access)
}
