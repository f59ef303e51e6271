//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain state machine and is unit-tested without a
//! browser; `provider` wraps it in a reactive signal for components.

pub mod provider;
pub mod session;
