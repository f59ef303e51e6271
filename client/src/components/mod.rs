//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the admin session from Leptos context; they never own it.

pub mod protected;
