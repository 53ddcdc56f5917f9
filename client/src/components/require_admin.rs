//! Admin-only route wrapper.
//!
//! Renders nothing until the identity provider has loaded, sends signed-out
//! visitors to login (remembering where they were headed), renders children
//! for the `admin` role, and sends everyone else home.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::guard_redirect::{current_location, redirect_view};
use crate::config::use_route_config;
use crate::state::session::SessionView;
use crate::util::auth::{GuardOutcome, admin_access};

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionView>>();
    let config = use_route_config();
    let location = use_location();

    move || {
        let from = current_location(&location);
        match admin_access(&session.get(), &from, &config) {
            GuardOutcome::Pending => ().into_any(),
            GuardOutcome::Render => children().into_any(),
            GuardOutcome::Redirect(directive) => redirect_view(directive),
        }
    }
}
