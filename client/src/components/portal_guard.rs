//! Role-portal route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Portals (admin, moderator, officer, user) accept a list of roles. The role
//! comes from profile metadata; when that is absent or generic the backend
//! profile is consulted, and the guard shows a placeholder until it answers.
//! Visitors with the wrong role land on their own portal's dashboard.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::guard_redirect::{current_location, redirect_view};
use crate::config::use_route_config;
use crate::state::role::Role;
use crate::state::session::{SessionStatus, SessionView};
use crate::util::auth::{GuardOutcome, needs_backend_role, portal_access, resolve_portal_role, role_for_user};

#[component]
pub fn PortalGuard(allowed: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionView>>();
    let config = use_route_config();
    let location = use_location();
    // Role keyed by the user id it was resolved for.
    let resolved = RwSignal::new(None::<(String, Role)>);

    // Re-resolve whenever the signed-in identity changes.
    Effect::new(move || {
        let snapshot = session.get();
        let SessionStatus::SignedIn(identity) = snapshot.status() else {
            resolved.set(None);
            return;
        };
        let owner = identity.user_id.unwrap_or_default().to_owned();
        let metadata_role = identity.role.map(str::to_owned);
        if !needs_backend_role(metadata_role.as_deref()) || owner.is_empty() {
            resolved.set(Some((owner, resolve_portal_role(metadata_role.as_deref(), None))));
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let backend_role = match crate::net::identity::fetch_profile_role(&owner).await {
                Ok(role) => role,
                Err(e) => {
                    log::warn!("role lookup for {owner} failed: {e}");
                    None
                }
            };
            let role = resolve_portal_role(metadata_role.as_deref(), backend_role.as_deref());
            resolved.set(Some((owner, role)));
        });
    });

    let outcome = Memo::new(move |_| {
        let snapshot = session.get();
        let from = current_location(&location);
        let current_user = match snapshot.status() {
            SessionStatus::SignedIn(identity) => identity.user_id.map(str::to_owned),
            _ => None,
        };
        resolved.with(|resolved| {
            let role = role_for_user(resolved.as_ref(), current_user.as_deref());
            portal_access(&snapshot, role, &allowed, &from, &config)
        })
    });

    // Memo dedups, so each denial is logged once per change. Login redirects
    // carry return state; stateless ones are role denials.
    Effect::new(move || {
        if let GuardOutcome::Redirect(directive) = outcome.get() {
            if directive.state.is_none() {
                log::warn!("portal access denied; redirecting to {}", directive.to);
            }
        }
    });

    move || match outcome.get() {
        GuardOutcome::Pending => view! {
            <div class="portal-guard portal-guard--pending">
                <div class="portal-guard__spinner"></div>
                <p class="portal-guard__message">"Verifying access permissions..."</p>
            </div>
        }
        .into_any(),
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Redirect(directive) => redirect_view(directive),
    }
}
