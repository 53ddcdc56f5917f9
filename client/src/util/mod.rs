//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep decision logic free of Leptos view code so guards and
//! pages stay thin and the rules stay unit-testable.

pub mod auth;
