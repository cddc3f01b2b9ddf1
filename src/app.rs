//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{RequireAdmin, RequireAuth};
use crate::gate::NavEpoch;
use crate::pages::{
    admin_users::AdminUsersPage, create_profile::CreateProfilePage, dashboard::DashboardPage,
    login::LoginPage, settings::SettingsPage, signup::SignUpPage,
    workout_detail::WorkoutDetailPage, workouts::WorkoutsPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, resolves the stored session once on
/// startup, and wires each route-table path to its page view. Gated routes
/// are wrapped in their guard components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        user: None,
        loading: true,
    });
    provide_context(auth);
    provide_context(Arc::new(NavEpoch::new()));

    // Resolve the stored token to an identity once, for nav affordances.
    // The gates never read this: they check token presence and the oracle
    // directly on each transition.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{HttpIdentityApi, IdentityApi};
        use crate::session::{BrowserTokens, TokenStore};

        let user = match BrowserTokens.token() {
            Some(token) => HttpIdentityApi.fetch_me(&token).await.ok(),
            None => None,
        };
        auth.update(|a| {
            a.user = user;
            a.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fitness-client.css"/>
        <Title text="Fitness"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route
                    path=StaticSegment("create-profile")
                    view=|| {
                        view! {
                            <RequireAuth path="/create-profile">
                                <CreateProfilePage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=|| {
                        view! {
                            <RequireAdmin>
                                <AdminUsersPage/>
                            </RequireAdmin>
                        }
                    }
                />
                <Route path=StaticSegment("workouts") view=WorkoutsPage/>
                <Route path=(StaticSegment("workout"), ParamSegment("id")) view=WorkoutDetailPage/>
            </Routes>
        </Router>
    }
}
