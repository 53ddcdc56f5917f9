//! Admin console landing. Only reachable through `RequireAdmin`.

use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>"Admin console"</h1>
            <p>"Manage users, issues, and announcements."</p>
        </div>
    }
}
