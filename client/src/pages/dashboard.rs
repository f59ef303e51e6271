//! Admin dashboard: content counters and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Everything below `ProtectedRoute` only
//! renders for a signed-in admin; signing out flips the session and the guard
//! takes the visitor back to the login view.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::protected::ProtectedRoute;
use crate::net::types::DashboardStats;
use crate::state::provider::use_session;

/// Label and value pairs for the stat cards, in display order.
fn stat_cards(stats: DashboardStats) -> [(&'static str, u64); 2] {
    [("Articles de blog", stats.total_posts), ("Messages de contact", stats.total_contacts)]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardContent/>
        </ProtectedRoute>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = use_session();

    let stats = LocalResource::new(|| async {
        crate::net::api::fetch_dashboard_stats().await.unwrap_or_else(|e| {
            log::error!("dashboard stats: {e}");
            DashboardStats::default()
        })
    });

    let on_logout = move |_| session.logout();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>"Administration"</h1>
                    <p>"Espace Agenda CMS"</p>
                </div>
                <button class="btn btn--outline" on:click=on_logout>
                    "Déconnexion"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <Suspense fallback=move || view! { <p>"Chargement des statistiques..."</p> }>
                    {move || {
                        stats
                            .get()
                            .map(|s| {
                                stat_cards(s)
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div class="stat-card">
                                                <p class="stat-card__label">{label}</p>
                                                <p class="stat-card__value">{value}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
