//! Sign-up page creating a new account.

use leptos::prelude::*;
use leptos_router::components::A;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Sign-up page — registers an account, then returns to the login page.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
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
            let mail = email.get();
            let pass = password.get();
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&user, &mail, &pass).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(msg) => error.set(Some(msg)),
                }
            });
        }
    };

    view! {
        <div class="signup-page">
            <h1>"Create account"</h1>
            <form class="signup-page__form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">
                    "Sign up"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <p>
                <A href="/">"Back to login"</A>
            </p>
        </div>
    }
}
