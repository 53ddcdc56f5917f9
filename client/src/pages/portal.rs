//! Per-role portal dashboard shell, rendered inside `PortalGuard`.

use leptos::prelude::*;

use crate::state::role::Role;

#[component]
pub fn PortalPage(role: Role) -> impl IntoView {
    let title = match role {
        Role::Admin => "Admin dashboard".to_owned(),
        Role::Moderator => "Moderator dashboard".to_owned(),
        Role::Officer => "Officer dashboard".to_owned(),
        Role::User => "My dashboard".to_owned(),
        Role::Other(name) => format!("{name} dashboard"),
    };

    view! {
        <div class="portal-page">
            <h1>{title}</h1>
        </div>
    }
}
