//! Reactive session handle shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls `provide_session` once. Pages and guards call `use_session`
//! and get a `Copy` handle; there is no global session. The app always uses
//! `BrowserStore`; other backends plug in through `Session::with_store`.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;

use crate::state::session::{SessionGuard, SessionStatus};
use crate::util::guard::GuardDecision;
use crate::util::storage::{BrowserStore, SessionStore};

/// Consumer view of the admin session.
pub struct Session<S = BrowserStore> {
    guard: RwSignal<SessionGuard<S>>,
}

impl<S> Clone for Session<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Session<S> {}

impl Session {
    /// Wrap a fresh, not yet restored guard over `localStorage`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(BrowserStore)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SessionStore + Send + Sync + 'static> Session<S> {
    /// Wrap a fresh, not yet restored guard over `store`.
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self { guard: RwSignal::new(SessionGuard::new(store)) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.guard.with(SessionGuard::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.guard.with(SessionGuard::is_loading)
    }

    pub fn status(&self) -> SessionStatus {
        self.guard.with(SessionGuard::status)
    }

    pub fn decision(&self) -> GuardDecision {
        GuardDecision::from_status(self.status())
    }

    pub fn restore(&self) {
        self.guard.update(SessionGuard::restore);
    }

    pub fn login(&self, password: &str) -> bool {
        self.guard.try_update(|g| g.login(password)).unwrap_or(false)
    }

    pub fn logout(&self) {
        self.guard.update(SessionGuard::logout);
    }
}

/// Create the session for this app instance and restore it once the browser
/// is reachable. Effects never run during server rendering, so SSR output
/// always shows the pending state.
pub fn provide_session() -> Session {
    let session = Session::new();
    provide_context(session);
    Effect::new(move || session.restore());
    session
}

/// The session provided by an ancestor.
///
/// # Panics
///
/// Panics when no ancestor called `provide_session`; there is no sensible
/// fallback for authentication state.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
