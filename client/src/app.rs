//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{portal_guard::PortalGuard, require_admin::RequireAdmin};
use crate::config::RouteConfig;
use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage, portal::PortalPage};
use crate::state::role::Role;
use crate::state::session::SessionView;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the route config and session signal, then sets up client-side
/// routing with guarded admin and portal routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = RouteConfig::default();
    let session = RwSignal::new(SessionView::loading());
    install_session_sync(session, config.session_endpoint.clone());

    provide_context(config);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RequireAdmin><AdminPage/></RequireAdmin> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! { <PortalGuard allowed=vec![Role::Admin]><PortalPage role=Role::Admin/></PortalGuard> }
                />
                <Route
                    path=StaticSegment("moderator")
                    view=|| view! {
                        <PortalGuard allowed=vec![Role::Moderator]><PortalPage role=Role::Moderator/></PortalGuard>
                    }
                />
                <Route
                    path=(StaticSegment("officer"), StaticSegment("dashboard"))
                    view=|| view! { <PortalGuard allowed=vec![Role::Officer]><PortalPage role=Role::Officer/></PortalGuard> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("dashboard"))
                    view=|| view! { <PortalGuard allowed=vec![Role::User]><PortalPage role=Role::User/></PortalGuard> }
                />
            </Routes>
        </Router>
    }
}

/// Load the provider's session snapshot once the app mounts in the browser.
///
/// Failures settle to a signed-out session (see `settle_session`), so guards
/// send the visitor to login instead of waiting forever. During SSR nothing runs and
/// the signal stays loading.
fn install_session_sync(session: RwSignal<SessionView>, endpoint: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::identity::fetch_session(&endpoint).await;
        session.set(crate::net::identity::settle_session(result));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, endpoint);
    }
}
