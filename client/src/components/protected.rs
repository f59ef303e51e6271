//! Wrapper that only renders its children for a signed-in admin.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::provider::use_session;
use crate::util::guard::{GuardDecision, install_unauth_redirect};

/// Gate for admin routes.
///
/// Shows a placeholder while the session restores, the children once signed
/// in, and nothing while redirecting to the login view.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    move || match session.decision() {
        GuardDecision::Pending => view! {
            <div class="admin-pending">
                <p>"Chargement..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect => ().into_any(),
    }
}
