//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render route content only. Access control lives in the guard
//! components `app` wraps them with.

pub mod admin;
pub mod home;
pub mod login;
pub mod portal;
