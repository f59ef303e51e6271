//! Admin login page: a single password field checked by the session guard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{ADMIN_PASSWORD, DASHBOARD_PATH};
use crate::state::provider::use_session;

const PASSWORD_PLACEHOLDER: &str = "Entrez le mot de passe admin";

/// Outcome of a submission, shown under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoginFeedback {
    Empty,
    Accepted,
    Rejected,
}

impl LoginFeedback {
    fn from_login(accepted: bool) -> Self {
        if accepted { Self::Accepted } else { Self::Rejected }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Empty => PASSWORD_PLACEHOLDER,
            Self::Accepted => "Connexion réussie",
            Self::Rejected => "Mot de passe incorrect",
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Self::Accepted => "login-message login-message--success",
            Self::Empty | Self::Rejected => "login-message login-message--error",
        }
    }
}

/// Reject an empty submission before it reaches `login`. The password is
/// passed through untouched; whitespace is significant.
fn validate_password_input(raw: &str) -> Result<&str, LoginFeedback> {
    if raw.is_empty() { Err(LoginFeedback::Empty) } else { Ok(raw) }
}

fn default_password_hint() -> String {
    format!("Mot de passe par défaut : {ADMIN_PASSWORD}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let password = RwSignal::new(String::new());
    let feedback = RwSignal::new(None::<LoginFeedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = password.get_untracked();
        let outcome = match validate_password_input(&value) {
            Ok(candidate) => LoginFeedback::from_login(session.login(candidate)),
            Err(empty) => empty,
        };
        feedback.set(Some(outcome));
        if outcome == LoginFeedback::Accepted {
            log::info!("admin signed in");
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Administration"</h1>
                <p class="login-card__subtitle">"Espace Agenda - Connexion"</p>
                <form class="login-form" on:submit=on_submit>
                    <label for="password">"Mot de passe"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        required=true
                        placeholder=PASSWORD_PLACEHOLDER
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Se connecter"
                    </button>
                    <p class="login-form__hint">{default_password_hint()}</p>
                </form>
                {move || {
                    feedback
                        .get()
                        .map(|f| view! { <p class=f.css_class()>{f.message()}</p> })
                }}
            </div>
        </div>
    }
}
