//! User management page, reachable only through the admin guard.

use leptos::prelude::*;
use leptos_router::components::A;

/// User management page — lists every account with its superuser flag.
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let users = LocalResource::new(|| crate::net::api::fetch_users());

    view! {
        <div class="admin-users-page">
            <header>
                <h1>"User management"</h1>
                <A href="/dashboard">"Back"</A>
            </header>
            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|list| match list {
                            Some(list) => {
                                view! {
                                    <table class="admin-users-page__table">
                                        <thead>
                                            <tr>
                                                <th>"Username"</th>
                                                <th>"Email"</th>
                                                <th>"Admin"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|u| {
                                                    view! {
                                                        <tr>
                                                            <td>{u.username}</td>
                                                            <td>{u.email}</td>
                                                            <td>{if u.is_superuser { "yes" } else { "no" }}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"Could not load users."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
