//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` mirrors the identity provider's snapshot; `role` interprets the
//! role metadata carried inside it. Guards depend on both, pages on `session`.

pub mod role;
pub mod session;
