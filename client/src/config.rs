//! Fixed client-side configuration: admin credential, session marker, routes.
//!
//! SECURITY
//! ========
//! The credential and the marker ship inside the client bundle, so anyone who
//! can load the site can read or forge both. They gate a low-stakes,
//! single-operator admin surface and are NOT a security boundary. Swapping in
//! real authentication means replacing `SessionConfig` and the check in
//! `SessionGuard::login`; nothing else reads these values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the session marker.
pub const STORAGE_KEY: &str = "admin_token";

/// Opaque value persisted while an admin session is active.
pub const SESSION_MARKER: &str = "espace-agenda-admin-2025";

/// The single admin password accepted by `login`.
pub const ADMIN_PASSWORD: &str = "admin123";

/// Route of the admin login view; unauthenticated visitors land here.
pub const LOGIN_PATH: &str = "/admin";

/// Route of the admin dashboard.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Backend origin baked in at build time. Empty means same origin.
pub const BACKEND_URL: &str = match option_env!("AGENDA_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Values the session guard compares against and persists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub storage_key: &'static str,
    pub marker: &'static str,
    pub credential: &'static str,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { storage_key: STORAGE_KEY, marker: SESSION_MARKER, credential: ADMIN_PASSWORD }
    }
}

/// Build `{base}/api{path}`, tolerating a trailing slash on `base`.
#[must_use]
pub fn join_api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}/api{path}")
    } else {
        format!("{base}/api/{path}")
    }
}

/// Absolute or origin-relative URL for a backend API path.
#[must_use]
pub fn api_url(path: &str) -> String {
    join_api_url(BACKEND_URL, path)
}
