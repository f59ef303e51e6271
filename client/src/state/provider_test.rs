use super::*;
use crate::config::{ADMIN_PASSWORD, SESSION_MARKER, STORAGE_KEY};
use crate::util::storage::MemoryStore;

// =============================================================
// Injected storage
// =============================================================

#[test]
fn new_session_is_pending() {
    let session = Session::with_store(MemoryStore::new());
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
    assert_eq!(session.decision(), GuardDecision::Pending);
}

#[test]
fn login_then_logout_moves_decision_allow_to_redirect() {
    let store = MemoryStore::new();
    let session = Session::with_store(store.clone());
    session.restore();
    assert_eq!(session.decision(), GuardDecision::Redirect);

    assert!(session.login(ADMIN_PASSWORD));
    assert_eq!(session.decision(), GuardDecision::Allow);
    assert!(store.contains(STORAGE_KEY));

    session.logout();
    assert_eq!(session.decision(), GuardDecision::Redirect);
    assert!(!store.contains(STORAGE_KEY));
}

#[test]
fn wrong_password_keeps_redirect() {
    let session = Session::with_store(MemoryStore::new());
    session.restore();
    assert!(!session.login("wrong-password"));
    assert_eq!(session.decision(), GuardDecision::Redirect);
}

#[test]
fn persisted_marker_allows_after_restore() {
    let session = Session::with_store(MemoryStore::with_entry(STORAGE_KEY, SESSION_MARKER));
    assert_eq!(session.decision(), GuardDecision::Pending);
    session.restore();
    assert_eq!(session.decision(), GuardDecision::Allow);
}

#[test]
fn second_restore_is_ignored() {
    let store = MemoryStore::new();
    let session = Session::with_store(store.clone());
    session.restore();
    store.write(STORAGE_KEY, SESSION_MARKER).unwrap();
    session.restore();
    assert!(!session.is_loading());
    assert!(!session.is_authenticated());
}

#[test]
fn copies_share_one_session() {
    let session = Session::with_store(MemoryStore::new());
    let copy = session;
    session.restore();
    assert!(copy.login(ADMIN_PASSWORD));
    assert!(session.is_authenticated());
}

// =============================================================
// Browser storage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_session_without_storage_fails_closed() {
    let session = Session::new();
    session.restore();
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert!(!session.login(ADMIN_PASSWORD));
    assert!(!session.is_authenticated());
    session.logout();
    assert!(!session.is_authenticated());
}

// =============================================================
// Context
// =============================================================

#[test]
fn use_session_returns_provided_handle() {
    let owner = Owner::new();
    owner.with(|| {
        let provided = Session::new();
        provide_context(provided);
        let found = use_session();
        assert!(found.is_loading());
        found.restore();
        assert!(!provided.is_loading());
    });
}

#[test]
#[should_panic]
fn use_session_outside_provider_panics() {
    let _ = use_session();
}
