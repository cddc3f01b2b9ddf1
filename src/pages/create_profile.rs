//! Profile creation page, shown once after sign-up.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Create-profile page — collects the basics and continues to the dashboard.
/// Reached only through the auth guard; an unauthenticated visitor never
/// sees this view.
#[component]
pub fn CreateProfilePage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let profile_name = name.get();
            let profile_country = country.get();
            if profile_name.trim().is_empty() {
                return;
            }
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_profile(profile_name.trim(), &profile_country).await
                {
                    Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                    Err(msg) => error.set(Some(msg)),
                }
            });
        }
    };

    view! {
        <div class="create-profile-page">
            <h1>"Set up your profile"</h1>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Country"
                    prop:value=move || country.get()
                    on:input=move |ev| country.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">
                    "Continue"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
