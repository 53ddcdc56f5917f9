//! Route and identity-provider settings shared by guards and pages.
//!
//! `App` provides one `RouteConfig` through context; components read it with
//! `use_route_config`, which falls back to the defaults when nothing is
//! provided (for example in isolated component mounts).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::use_context;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/home";
pub const DEFAULT_SESSION_ENDPOINT: &str = "/api/session";
pub const DEFAULT_SIGN_IN_URL: &str = "/sign-in";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteConfig {
    /// Where signed-out visitors are sent.
    pub login_path: String,
    /// Default destination for signed-in visitors lacking access.
    pub home_path: String,
    /// Identity-provider endpoint returning the session snapshot.
    pub session_endpoint: String,
    /// Identity-provider hosted sign-in page.
    pub sign_in_url: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            session_endpoint: DEFAULT_SESSION_ENDPOINT.to_owned(),
            sign_in_url: DEFAULT_SIGN_IN_URL.to_owned(),
        }
    }
}

/// Read the provided `RouteConfig`, or the defaults when none is in context.
pub fn use_route_config() -> RouteConfig {
    use_context::<RouteConfig>().unwrap_or_default()
}
