//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates gating to
//! `components::protected`.

pub mod dashboard;
pub mod home;
pub mod login;
