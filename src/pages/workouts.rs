//! Workouts list page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Workouts page — full list of the user's workouts.
#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let workouts = LocalResource::new(|| crate::net::api::fetch_workouts());

    view! {
        <div class="workouts-page">
            <header>
                <h1>"Workouts"</h1>
                <A href="/dashboard">"Back"</A>
            </header>
            <Suspense fallback=move || view! { <p>"Loading workouts..."</p> }>
                {move || {
                    workouts
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => {
                                view! {
                                    <ul class="workouts-page__list">
                                        {list
                                            .into_iter()
                                            .map(|w| {
                                                let href = format!("/workout/{}", w.id);
                                                view! {
                                                    <li>
                                                        <A href=href>{w.name}</A>
                                                        <span class="workouts-page__desc">
                                                            {w.description.unwrap_or_default()}
                                                        </span>
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
        </div>
    }
}
