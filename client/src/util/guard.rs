//! Route-guard decisions for the admin area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same rule: wait while the session is
//! restoring, then render or bounce to the login view.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_PATH;
use crate::state::provider::Session;
use crate::state::session::SessionStatus;
use crate::util::storage::SessionStore;

/// What a protected view should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still restoring; render a neutral placeholder.
    Pending,
    /// Render the protected content.
    Allow,
    /// Leave for the login view.
    Redirect,
}

impl GuardDecision {
    #[must_use]
    pub fn from_status(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Initializing => Self::Pending,
            SessionStatus::Authenticated => Self::Allow,
            SessionStatus::Unauthenticated => Self::Redirect,
        }
    }
}

/// Send the visitor to the login view if the session has settled signed out.
/// Returns whether it navigated.
pub fn redirect_if_signed_out<S, F>(session: Session<S>, navigate: &F) -> bool
where
    S: SessionStore + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions),
{
    let leave = session.decision() == GuardDecision::Redirect;
    if leave {
        navigate(LOGIN_PATH, NavigateOptions::default());
    }
    leave
}

/// Re-run `redirect_if_signed_out` whenever the session changes.
pub fn install_unauth_redirect<S, F>(session: Session<S>, navigate: F)
where
    S: SessionStore + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        redirect_if_signed_out(session, &navigate);
    });
}
