//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components gather the session snapshot and the router location, then
//! delegate here. Every function is total: missing or malformed role metadata
//! is an ordinary "no access" answer, never an error. Redirects are returned as
//! data and rendered declaratively by the caller.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::state::role::{ADMIN_ROLE, DEFAULT_ROLE, Role};
use crate::state::session::{SessionStatus, SessionView};

/// Router location captured for return-after-login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSnapshot {
    pub pathname: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub hash: String,
}

/// History state attached to a login redirect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnState {
    pub from: LocationSnapshot,
}

/// Declarative redirect handed to the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectDirective {
    pub to: String,
    pub state: Option<ReturnState>,
    pub replace: bool,
}

/// What a guard renders for the current pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render nothing (or a placeholder) until inputs settle.
    Pending,
    Redirect(RedirectDirective),
    /// Render the guarded children unchanged.
    Render,
}

impl LocationSnapshot {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self { pathname: pathname.into(), search: String::new(), hash: String::new() }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Path plus query and fragment, with `?`/`#` prefixes normalized.
    #[must_use]
    pub fn href(&self) -> String {
        let mut out = self.pathname.clone();
        if !self.search.is_empty() {
            if !self.search.starts_with('?') {
                out.push('?');
            }
            out.push_str(&self.search);
        }
        if !self.hash.is_empty() {
            if !self.hash.starts_with('#') {
                out.push('#');
            }
            out.push_str(&self.hash);
        }
        out
    }
}

impl RedirectDirective {
    /// Replacing redirect without history state.
    pub fn replace_to(to: impl Into<String>) -> Self {
        Self { to: to.into(), state: None, replace: true }
    }

    /// Replacing redirect to the login path that remembers `from`.
    #[must_use]
    pub fn login(from: &LocationSnapshot, config: &RouteConfig) -> Self {
        Self {
            to: config.login_path.clone(),
            state: Some(ReturnState { from: from.clone() }),
            replace: true,
        }
    }
}

/// Admin-only gate.
///
/// Loading → `Pending`; signed out → login redirect carrying `location`;
/// role exactly `"admin"` → `Render`; any other role, or none → home redirect.
#[must_use]
pub fn admin_access(session: &SessionView, location: &LocationSnapshot, config: &RouteConfig) -> GuardOutcome {
    match session.status() {
        SessionStatus::Loading => GuardOutcome::Pending,
        SessionStatus::SignedOut => GuardOutcome::Redirect(RedirectDirective::login(location, config)),
        SessionStatus::SignedIn(identity) if identity.role == Some(ADMIN_ROLE) => GuardOutcome::Render,
        SessionStatus::SignedIn(_) => GuardOutcome::Redirect(RedirectDirective::replace_to(&config.home_path)),
    }
}

/// Whether the backend profile must be consulted for the portal role.
///
/// Metadata that is absent, empty, or the default role is not authoritative.
#[must_use]
pub fn needs_backend_role(metadata_role: Option<&str>) -> bool {
    matches!(metadata_role, None | Some("" | DEFAULT_ROLE))
}

/// Final portal role from metadata and an optional backend answer.
///
/// `backend_role` is `None` when the lookup was skipped, failed, or returned
/// no role; the result then falls back to the default role.
#[must_use]
pub fn resolve_portal_role(metadata_role: Option<&str>, backend_role: Option<&str>) -> Role {
    if !needs_backend_role(metadata_role) {
        return Role::parse(metadata_role.unwrap_or(DEFAULT_ROLE));
    }
    match backend_role {
        Some(role) if !role.is_empty() => Role::parse(role),
        _ => Role::User,
    }
}

/// Resolved role, but only if it was resolved for `user_id`.
///
/// Signed-in sessions without an id resolve under the empty key.
#[must_use]
pub fn role_for_user<'a>(resolved: Option<&'a (String, Role)>, user_id: Option<&str>) -> Option<&'a Role> {
    resolved
        .filter(|(owner, _)| owner.as_str() == user_id.unwrap_or_default())
        .map(|(_, role)| role)
}

/// Multi-role portal gate.
///
/// `role` is `None` while it is still being resolved. Denied visitors are sent
/// to their own portal dashboard, or home when their role has none.
#[must_use]
pub fn portal_access(
    session: &SessionView,
    role: Option<&Role>,
    allowed: &[Role],
    location: &LocationSnapshot,
    config: &RouteConfig,
) -> GuardOutcome {
    match session.status() {
        SessionStatus::Loading => GuardOutcome::Pending,
        SessionStatus::SignedOut => GuardOutcome::Redirect(RedirectDirective::login(location, config)),
        SessionStatus::SignedIn(_) => match role {
            None => GuardOutcome::Pending,
            Some(role) if allowed.contains(role) => GuardOutcome::Render,
            Some(role) => {
                let target = role.dashboard_path().unwrap_or(config.home_path.as_str());
                GuardOutcome::Redirect(RedirectDirective::replace_to(target))
            }
        },
    }
}

/// Post-login destination recovered from a login redirect's history state.
///
/// Only same-origin relative paths are honoured, and never the login page
/// itself; everything else lands on the home path.
#[must_use]
pub fn return_path(state: Option<&ReturnState>, config: &RouteConfig) -> String {
    state
        .map(|s| &s.from)
        .filter(|from| is_local_path(&from.pathname) && from.pathname != config.login_path)
        .map_or_else(|| config.home_path.clone(), LocationSnapshot::href)
}

/// Hosted sign-in link that brings the visitor back to `destination`.
#[must_use]
pub fn sign_in_href(sign_in_url: &str, destination: &str) -> String {
    let separator = if sign_in_url.contains('?') { '&' } else { '?' };
    format!("{sign_in_url}{separator}redirect_url={}", encode_component(destination))
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
///
/// Safe for both query values and single path segments.
pub(crate) fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}
