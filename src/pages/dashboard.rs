//! Dashboard page with recent workouts and navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Dashboard page — recent workouts plus links into the rest of the app.
/// The admin link only shows for sessions that resolved to a superuser.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let workouts = LocalResource::new(|| crate::net::api::fetch_workouts());

    let on_logout = move |_| {
        crate::session::clear_token();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <nav>
                    <A href="/workouts">"Workouts"</A>
                    <A href="/settings">"Settings"</A>
                    <Show when=move || auth.get().is_admin()>
                        <A href="/admin/users">"Users"</A>
                    </Show>
                    <button class="btn" on:click=on_logout>
                        "Log out"
                    </button>
                </nav>
            </header>

            <section class="dashboard-page__recent">
                <h2>"Recent workouts"</h2>
                <Suspense fallback=move || view! { <p>"Loading workouts..."</p> }>
                    {move || {
                        workouts
                            .get()
                            .map(|list| match list {
                                Some(list) if !list.is_empty() => {
                                    view! {
                                        <ul class="dashboard-page__list">
                                            {list
                                                .into_iter()
                                                .map(|w| {
                                                    let href = format!("/workout/{}", w.id);
                                                    view! {
                                                        <li>
                                                            <A href=href>{w.name}</A>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                _ => view! { <p>"No workouts yet."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
