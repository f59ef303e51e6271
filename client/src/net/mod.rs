//! Networking modules for the content backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls to the blog/contact backend and `types` holds the
//! response shapes the admin screens read. The session core never touches
//! the network.

pub mod api;
pub mod types;
