//! Login page with username/password form.

use leptos::prelude::*;
use leptos_router::components::A;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Login page — submits credentials, stores the returned token, and moves on
/// to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let user = username.get();
            let pass = password.get();
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user, &pass).await {
                    Ok(token) => {
                        crate::session::store_token(&token);
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(msg) => error.set(Some(msg)),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <h1>"Fitness"</h1>
            <p>"Track your workouts"</p>
            <form class="login-page__form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">
                    "Log in"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <p>
                <A href="/signup">"Create an account"</A>
            </p>
        </div>
    }
}
