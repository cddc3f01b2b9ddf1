//! Single-workout page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Workout page — reads the workout ID from the route parameter and shows
/// that workout's details.
#[component]
pub fn WorkoutDetailPage() -> impl IntoView {
    let params = use_params_map();

    let workout = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move { crate::net::api::fetch_workout(&id).await }
    });

    view! {
        <div class="workout-page">
            <A href="/workouts">"All workouts"</A>
            <Suspense fallback=move || view! { <p>"Loading workout..."</p> }>
                {move || {
                    workout
                        .get()
                        .map(|found| match found {
                            Some(w) => {
                                view! {
                                    <article>
                                        <h1>{w.name}</h1>
                                        <p>{w.description.unwrap_or_default()}</p>
                                    </article>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"Workout not found."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
