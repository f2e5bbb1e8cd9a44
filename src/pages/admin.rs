//! Admin-only user table. Reached through the guard's `require_admin`.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::types::{AdminUser, Role};

pub(crate) fn role_label(role: Role) -> &'static str {
    match role {
        Role::Free => "FREE",
        Role::Pro => "PRO",
        Role::Admin => "ADMIN",
    }
}

/// Admin page — lists every account with its role.
#[component]
pub fn AdminPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let loading = RwSignal::new(true);

    let mounted = RwSignal::new(false);
    Effect::new(move || {
        if mounted.get() {
            return;
        }
        mounted.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(list) = crate::net::api::fetch_admin_users().await {
                users.set(list);
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    view! {
        <div class="admin-page">
            <h1>"Users"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Loading users..."</p> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Joined"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|user| user.id.clone()
                            children=|user| view! {
                                <tr>
                                    <td>{user.email.clone()}</td>
                                    <td>{role_label(user.role)}</td>
                                    <td>{user.created_at.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
