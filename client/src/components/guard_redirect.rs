//! Router glue shared by guard components.
//!
//! Redirect history state crosses the JS boundary as a plain object
//! (`{ from: { pathname, search, hash } }`), so it is readable by any page
//! on the router, not just this crate's.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::location::{Location, State};

use crate::util::auth::{LocationSnapshot, RedirectDirective, ReturnState};

/// Capture the router's current location.
pub fn current_location(location: &Location) -> LocationSnapshot {
    LocationSnapshot::new(location.pathname.get())
        .with_search(location.search.get())
        .with_hash(location.hash.get())
}

/// Render a redirect directive as a router `<Redirect/>`.
pub fn redirect_view(directive: RedirectDirective) -> AnyView {
    let options = NavigateOptions {
        replace: directive.replace,
        state: history_state(directive.state.as_ref()),
        ..NavigateOptions::default()
    };
    let path = directive.to;
    view! { <Redirect path=path options=options/> }.into_any()
}

/// Read the return-to-origin state left by a login redirect, if any.
pub fn read_return_state(location: &Location) -> Option<ReturnState> {
    #[cfg(feature = "hydrate")]
    {
        let value = location.state.get().to_js_value();
        if value.is_undefined() || value.is_null() {
            return None;
        }
        let raw: String = js_sys::JSON::stringify(&value).ok()?.into();
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = location;
        None
    }
}

fn history_state(state: Option<&ReturnState>) -> State {
    #[cfg(feature = "hydrate")]
    {
        state
            .and_then(|s| serde_json::to_string(s).ok())
            .and_then(|raw| js_sys::JSON::parse(&raw).ok())
            .map_or_else(State::default, |value| State::new(Some(value)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
        State::default()
    }
}
