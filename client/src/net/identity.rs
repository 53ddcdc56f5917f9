//! Identity-provider and profile lookups.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `IdentityError::Unavailable`, so
//! the session signal stays in its loading state during server rendering.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed errors instead of panics. Guards never see them: the
//! session sync downgrades a failure to a signed-out snapshot, and portal role
//! resolution downgrades it to the default role.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

use crate::state::session::SessionView;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::auth::encode_component;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider unreachable: {0}")]
    Network(String),
    #[error("identity provider returned status {0}")]
    Status(u16),
    #[error("malformed identity response: {0}")]
    Decode(String),
    #[error("identity provider is only reachable from the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct ProfileRole {
    #[serde(default, deserialize_with = "crate::state::session::deserialize_role")]
    role: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(user_id: &str) -> String {
    format!("/api/profile/{}", encode_component(user_id))
}

/// Decode a provider snapshot.
///
/// A body without `isLoaded` counts as loaded; an explicit `false` is kept so
/// the snapshot stays unreadable.
#[cfg(any(test, feature = "hydrate"))]
fn parse_session_body(body: &str) -> Result<SessionView, IdentityError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()))?;
    let reports_loaded = value.get("isLoaded").is_some();
    let mut session: SessionView = serde_json::from_value(value).map_err(|e| IdentityError::Decode(e.to_string()))?;
    if !reports_loaded {
        session.is_loaded = true;
    }
    Ok(session)
}

/// Interpret a session endpoint response. `401` is a loaded, signed-out session.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_response(status: u16, body: &str) -> Result<SessionView, IdentityError> {
    match status {
        401 => Ok(SessionView::signed_out()),
        200..=299 => parse_session_body(body),
        other => Err(IdentityError::Status(other)),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_profile_body(body: &str) -> Result<Option<String>, IdentityError> {
    let profile: ProfileRole = serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()))?;
    Ok(profile.role.filter(|role| !role.is_empty()))
}

/// Fetch the current session snapshot from `endpoint`.
///
/// A `401` is a loaded, signed-out session rather than an error.
///
/// # Errors
///
/// Returns `IdentityError` when the provider is unreachable, answers with an
/// unexpected status, or sends a body that is not a session snapshot.
pub async fn fetch_session(endpoint: &str) -> Result<SessionView, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;
        let status = resp.status();
        let body = if resp.ok() {
            resp.text().await.map_err(|e| IdentityError::Decode(e.to_string()))?
        } else {
            String::new()
        };
        session_from_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(IdentityError::Unavailable)
    }
}

/// Snapshot to publish after a session load attempt.
///
/// Failures and snapshots the provider still marks as loading both settle to
/// signed out, so guards redirect to login instead of waiting forever.
pub fn settle_session(result: Result<SessionView, IdentityError>) -> SessionView {
    match result {
        Ok(snapshot) if snapshot.is_loaded => {
            log::debug!("session loaded (signed in: {})", snapshot.is_signed_in);
            snapshot
        }
        Ok(_) => {
            log::warn!("identity provider answered before it finished loading");
            SessionView::signed_out()
        }
        Err(e) => {
            log::warn!("session load failed: {e}");
            SessionView::signed_out()
        }
    }
}

/// Fetch the authoritative role for `user_id` from `/api/profile/{user_id}`.
///
/// # Errors
///
/// Returns `IdentityError` when the profile API cannot be reached or answers
/// with a non-success status or malformed body.
pub async fn fetch_profile_role(user_id: &str) -> Result<Option<String>, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let url = profile_endpoint(user_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(IdentityError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| IdentityError::Decode(e.to_string()))?;
        parse_profile_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(IdentityError::Unavailable)
    }
}
