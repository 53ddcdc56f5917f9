//! Default landing page for signed-in visitors.

use leptos::prelude::*;

use crate::state::session::{SessionStatus, SessionView};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionView>>();

    let greeting = move || match session.get().status() {
        SessionStatus::Loading => String::new(),
        SessionStatus::SignedOut => "You are not signed in.".to_owned(),
        SessionStatus::SignedIn(identity) => match identity.role {
            Some(role) => format!("Signed in as {role}."),
            None => "Signed in.".to_owned(),
        },
    };

    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            <p class="home-page__status">{greeting}</p>
            <nav class="home-page__links">
                <a href="/admin">"Admin console"</a>
                <a href="/user/dashboard">"My dashboard"</a>
            </nav>
        </div>
    }
}
