//! Login page handing off to the identity provider's hosted sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards redirect here with `{ from: location }` history state. The page
//! turns that into a post-login destination and passes it to the provider,
//! which sends the visitor back once authenticated.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::guard_redirect::read_return_state;
use crate::config::use_route_config;
use crate::state::session::{SessionStatus, SessionView};
use crate::util::auth::{return_path, sign_in_href};

fn login_prompt(destination: &str, home_path: &str) -> String {
    if destination == home_path {
        "Sign in to continue.".to_owned()
    } else {
        format!("Sign in to continue to {destination}.")
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionView>>();
    let config = use_route_config();
    let location = use_location();

    let sign_in_url = config.sign_in_url.clone();
    let home_path = config.home_path.clone();
    let destination = Memo::new(move |_| return_path(read_return_state(&location).as_ref(), &config));

    let signed_in = move || matches!(session.get().status(), SessionStatus::SignedIn(_));
    let href = move || sign_in_href(&sign_in_url, &destination.get());
    let prompt = move || login_prompt(&destination.get(), &home_path);

    view! {
        // Already signed in (e.g. arriving back from the provider): continue on.
        <Show when=signed_in>
            {move || {
                let path = destination.get();
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=path options=options/> }
            }}
        </Show>
        <div class="login-page">
            <div class="login-card">
                <h1>"Portal"</h1>
                <p class="login-card__subtitle">{prompt}</p>
                <a href=href class="login-button">
                    "Sign in"
                </a>
            </div>
        </div>
    }
}
