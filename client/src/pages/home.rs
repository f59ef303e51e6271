//! Public landing page.

use leptos::prelude::*;

use crate::config::LOGIN_PATH;

const BENEFITS: [(&str, &str); 3] = [
    ("Gain de temps", "Vos clients réservent en ligne, 24h/24, sans appel téléphonique."),
    ("Moins d'absences", "Rappels automatiques pour réduire les rendez-vous manqués."),
    ("À votre image", "Une solution en marque blanche, personnalisée à votre activité."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>
                    "Votre solution de prise de rendez-vous "
                    <span class="hero__accent">"en marque blanche"</span>
                </h1>
                <p class="hero__lead">
                    "Offrez à vos clients une expérience de réservation en ligne fluide et professionnelle."
                </p>
            </section>
            <section class="benefits">
                <h2>"Pourquoi choisir Espace Agenda ?"</h2>
                <div class="benefits__grid">
                    {BENEFITS
                        .into_iter()
                        .map(|(title, text)| {
                            view! {
                                <div class="benefit-card">
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <footer class="home-page__footer">
                <a href=LOGIN_PATH>"Administration"</a>
            </footer>
        </div>
    }
}
