//! Admin session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only authority on whether the admin panel may render. One guard exists
//! per browser tab; route guards and pages read it through the `Session`
//! context handle in `state::provider`.
//!
//! LIFECYCLE
//! =========
//! `Initializing` until `restore` has read storage once, then
//! `Authenticated` or `Unauthenticated`, toggled by `login` and `logout` for
//! the rest of the process.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and treated as "no session". Nothing here
//! returns an error or panics.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::SessionConfig;
use crate::util::storage::SessionStore;

/// Observable phase of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Initializing,
    Authenticated,
    Unauthenticated,
}

/// Authentication state backed by a persisted marker.
#[derive(Debug)]
pub struct SessionGuard<S> {
    store: S,
    config: SessionConfig,
    authenticated: bool,
    loading: bool,
}

impl<S: SessionStore> SessionGuard<S> {
    /// Guard in the `Initializing` state. Call `restore` once storage is
    /// reachable.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(store: S, config: SessionConfig) -> Self {
        Self { store, config, authenticated: false, loading: true }
    }

    /// Construct and restore in one step, for environments where storage is
    /// available at construction time.
    #[must_use]
    pub fn restored(store: S) -> Self {
        let mut guard = Self::new(store);
        guard.restore();
        guard
    }

    /// Derive the initial state from storage. Only the first call has any
    /// effect.
    pub fn restore(&mut self) {
        if !self.loading {
            return;
        }
        self.authenticated = match self.store.read(self.config.storage_key) {
            Ok(Some(marker)) => marker == self.config.marker,
            Ok(None) => false,
            Err(e) => {
                log::warn!("session restore: {e}; treating as signed out");
                false
            }
        };
        self.loading = false;
        log::debug!("session restored: authenticated={}", self.authenticated);
    }

    /// Check `credential` and, on a match, persist the marker.
    ///
    /// Returns `false` without touching storage for a wrong credential. A
    /// matching credential whose marker cannot be persisted also returns
    /// `false` and leaves the state unchanged. Until `restore` has run every
    /// attempt is refused, so `is_authenticated` cannot flip while loading.
    pub fn login(&mut self, credential: &str) -> bool {
        if self.loading {
            log::debug!("session login refused before restore");
            return false;
        }
        if credential != self.config.credential {
            log::debug!("session login rejected");
            return false;
        }
        if let Err(e) = self.store.write(self.config.storage_key, self.config.marker) {
            log::warn!("session login: {e}; marker not persisted");
            return false;
        }
        self.authenticated = true;
        log::debug!("session login accepted");
        true
    }

    /// Drop the session. Safe to call when already signed out.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.remove(self.config.storage_key) {
            log::warn!("session logout: {e}");
        }
        self.authenticated = false;
        log::debug!("session logged out");
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.loading {
            SessionStatus::Initializing
        } else if self.authenticated {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }
}
