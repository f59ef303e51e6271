use super::*;

#[test]
fn validate_password_input_rejects_empty() {
    assert_eq!(validate_password_input(""), Err(LoginFeedback::Empty));
    assert_eq!(LoginFeedback::Empty.message(), "Entrez le mot de passe admin");
}

#[test]
fn validate_password_input_keeps_whitespace() {
    assert_eq!(validate_password_input(" admin123 "), Ok(" admin123 "));
    assert_eq!(validate_password_input("   "), Ok("   "));
}

#[test]
fn feedback_reports_success_and_rejection() {
    assert_eq!(LoginFeedback::from_login(true).message(), "Connexion réussie");
    assert_eq!(LoginFeedback::from_login(false).message(), "Mot de passe incorrect");
}

#[test]
fn feedback_styles_success_apart_from_errors() {
    assert!(LoginFeedback::Accepted.css_class().ends_with("--success"));
    assert!(LoginFeedback::Rejected.css_class().ends_with("--error"));
    assert!(LoginFeedback::Empty.css_class().ends_with("--error"));
}

#[test]
fn default_password_hint_shows_admin_password() {
    assert_eq!(default_password_hint(), "Mot de passe par défaut : admin123");
}
