//! Settings page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Settings page — account overview and logout.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::session::clear_token();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="settings-page">
            <header>
                <h1>"Settings"</h1>
                <A href="/dashboard">"Back"</A>
            </header>
            <section>
                <Show
                    when=move || auth.get().user.is_some()
                    fallback=|| view! { <p>"Not signed in."</p> }
                >
                    <p>
                        "Signed in"
                        <Show when=move || auth.get().is_admin()>
                            <span class="settings-page__badge">" (administrator)"</span>
                        </Show>
                    </p>
                </Show>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </section>
        </div>
    }
}
