//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` talks to the external identity provider and the profile API.
//! Nothing here manages sessions; it only reads what the provider reports.

pub mod identity;
