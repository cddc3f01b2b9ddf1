//! Guard wrapper components.
//!
//! These map navigation-gate decisions onto rendering: a guarded route's
//! view is wrapped so the gate resolves before the page shows. Redirects are
//! issued through `use_navigate` once the decision lands; a pending async
//! check renders a placeholder.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::gate::{GateDecision, NavEpoch, gate_route};
use crate::routes::access_for;
use crate::session::{BrowserTokens, TokenStore};

/// Token-presence guard for routes flagged `requires_auth`.
///
/// Synchronous: the decision is made from the route table entry for `path`
/// and local token presence, never from the backend.
#[component]
pub fn RequireAuth(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    let decision = gate_route(access_for(path), BrowserTokens.token().is_some());

    Effect::new(move || {
        if let GateDecision::Redirect(target) = decision {
            navigate(target, NavigateOptions::default());
        }
    });

    move || match decision {
        GateDecision::Allowed => children().into_any(),
        GateDecision::Redirect(_) => ().into_any(),
    }
}

/// Live superuser guard for the admin route.
///
/// Starts an async check against the session oracle on mount, tagged with
/// the current navigation epoch; a result arriving after a newer navigation
/// began is dropped rather than firing a stale redirect.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    let epoch = expect_context::<Arc<NavEpoch>>();
    let decision = RwSignal::new(None::<GateDecision>);

    #[cfg(feature = "hydrate")]
    {
        let epoch = Arc::clone(&epoch);
        let started = epoch.begin();
        leptos::task::spawn_local(async move {
            let result =
                crate::gate::gate_admin(&BrowserTokens, &crate::net::api::HttpIdentityApi).await;
            if epoch.is_current(started) {
                decision.set(Some(result));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &epoch;

    Effect::new(move || {
        if let Some(GateDecision::Redirect(target)) = decision.get() {
            navigate(target, NavigateOptions::default());
        }
    });

    move || match decision.get() {
        Some(GateDecision::Allowed) => children().into_any(),
        Some(GateDecision::Redirect(_)) => ().into_any(),
        None => view! { <p class="guard-pending">"Checking access..."</p> }.into_any(),
    }
}
