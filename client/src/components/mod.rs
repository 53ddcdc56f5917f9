//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components wrap route views. They read the session signal and the
//! router location from context, ask `util::auth` for a decision, and render
//! it. `guard_redirect` holds the router glue they share.

pub mod guard_redirect;
pub mod portal_guard;
pub mod require_admin;
