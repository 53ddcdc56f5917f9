//! Session snapshot published by the external identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns sign-in state and profile metadata; this crate only reads
//! the snapshot it hands over. Route guards consume it through
//! `SessionView::status`, which never exposes sign-in or profile fields while
//! the provider is still loading.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Authentication snapshot for the current render.
///
/// Wire names follow the provider's camelCase JSON
/// (`isLoaded`, `isSignedIn`, `user.publicMetadata.role`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(default)]
    pub is_loaded: bool,
    #[serde(default)]
    pub is_signed_in: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Profile record for a signed-in visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_metadata: PublicMetadata,
}

/// Application-defined profile metadata. Only `role` is interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMetadata {
    #[serde(default, deserialize_with = "deserialize_role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Readable view of a session, gated on the loaded flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus<'a> {
    /// Provider has not reported yet; nothing else may be read.
    Loading,
    SignedOut,
    SignedIn(Identity<'a>),
}

/// Borrowed identity fields of a signed-in session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity<'a> {
    pub user_id: Option<&'a str>,
    pub role: Option<&'a str>,
}

impl SessionView {
    /// Snapshot before the provider has finished loading.
    #[must_use]
    pub fn loading() -> Self {
        Self::default()
    }

    /// Loaded snapshot with no signed-in visitor.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { is_loaded: true, is_signed_in: false, user: None }
    }

    /// Loaded snapshot for a signed-in visitor.
    #[must_use]
    pub fn signed_in(user: SessionUser) -> Self {
        Self { is_loaded: true, is_signed_in: true, user: Some(user) }
    }

    /// Classify the snapshot. The loaded flag is checked before any other field.
    #[must_use]
    pub fn status(&self) -> SessionStatus<'_> {
        if !self.is_loaded {
            return SessionStatus::Loading;
        }
        if !self.is_signed_in {
            return SessionStatus::SignedOut;
        }
        let user = self.user.as_ref();
        SessionStatus::SignedIn(Identity {
            user_id: user.map(|u| u.id.as_str()).filter(|id| !id.is_empty()),
            role: user.and_then(|u| u.public_metadata.role.as_deref()),
        })
    }
}

impl SessionUser {
    /// Build a user record with an optional role in its public metadata.
    pub fn new(id: impl Into<String>, role: Option<&str>) -> Self {
        Self {
            id: id.into(),
            public_metadata: PublicMetadata { role: role.map(str::to_owned) },
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any JSON value for a role; only strings are kept.
pub(crate) fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(role) => Ok(Some(role)),
        _ => Ok(None),
    }
}
