//! Tests for the form state container, submission controller and binding.

use std::sync::Arc;

use reflex::binding::Binding;
use reflex::error::FormError;
use reflex::form::{Form, Submission};
use reflex::validate::{FieldSpec, Rule};
use reflex::widgets::Input;

const YEAR: i32 = 2026;

fn login_form() -> Form {
    Form::new(vec![
        FieldSpec::new("email")
            .required("Email is required")
            .rule_msg(Rule::Email, "Please enter a valid email address"),
        FieldSpec::new("password")
            .required("Password is required")
            .rule_msg(Rule::MinLength(8), "Password must be at least 8 characters"),
    ])
}

#[test]
fn test_values_initialized_empty() {
    let form = login_form();
    assert_eq!(form.value("email").as_deref(), Some(""));
    assert_eq!(form.value("password").as_deref(), Some(""));
    assert!(!form.has_errors());
}

#[test]
fn test_set_value_rejects_undeclared_field() {
    let form = login_form();
    let err = form.set_value("username", "x").unwrap_err();
    assert!(matches!(err, FormError::UnknownField { field } if field == "username"));
}

#[test]
fn test_submit_aggregates_all_failures() {
    let form = login_form();
    // Both fields empty: both failures surface at once, no short-circuit.
    let outcome = form.submit_at(YEAR);
    assert_eq!(outcome.errors().len(), 2);
    assert_eq!(outcome.error_for("email"), Some("Email is required"));
    assert_eq!(outcome.error_for("password"), Some("Password is required"));
    // The form's error map was replaced with the failure set.
    assert_eq!(form.error("email").as_deref(), Some("Email is required"));
}

#[test]
fn test_errors_reported_in_declaration_order() {
    let form = login_form();
    let outcome = form.submit_at(YEAR);
    let fields: Vec<&str> = outcome.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["email", "password"]);
}

#[test]
fn test_rejection_leaves_values_untouched() {
    let form = login_form();
    form.set_value("email", "not-an-email").unwrap();
    let outcome = form.submit_at(YEAR);
    assert!(!outcome.is_accepted());
    assert_eq!(form.value("email").as_deref(), Some("not-an-email"));
}

#[test]
fn test_editing_clears_only_that_fields_error() {
    let form = login_form();
    form.submit_at(YEAR);
    assert!(form.error("email").is_some());
    assert!(form.error("password").is_some());

    form.set_value("email", "s").unwrap();
    assert!(form.error("email").is_none());
    assert!(form.error("password").is_some());
}

#[test]
fn test_set_value_is_idempotent() {
    let form = login_form();
    form.set_value("email", "a@b.c").unwrap();
    form.clear_dirty();

    // Same value again: no observable difference, not even a dirty flag.
    form.set_value("email", "a@b.c").unwrap();
    assert!(!form.is_dirty());
    assert_eq!(form.value("email").as_deref(), Some("a@b.c"));
}

#[test]
fn test_accepted_submit_and_reset() {
    let form = login_form();
    form.set_value("email", "sarah.j@example.com").unwrap();
    form.set_value("password", "longenough").unwrap();

    match form.submit_at(YEAR) {
        Submission::Accepted(values) => {
            assert_eq!(values["email"], "sarah.j@example.com");
        }
        Submission::Rejected(errors) => panic!("unexpected rejection: {errors:?}"),
    }

    form.reset();
    assert_eq!(form.value("email").as_deref(), Some(""));
    assert_eq!(form.value("password").as_deref(), Some(""));
    assert!(!form.has_errors());
}

#[test]
fn test_accepted_implies_no_errors() {
    let form = login_form();
    form.set_value("email", "a@b.co").unwrap();
    form.set_value("password", "12345678").unwrap();
    let outcome = form.submit_at(YEAR);
    assert!(outcome.is_accepted());
    assert!(!form.has_errors());
}

#[test]
fn test_binding_rejects_widget_for_undeclared_field() {
    let form = login_form();
    let rogue = Arc::new(Input::for_field("username"));
    assert!(Binding::new(form).attach(rogue).is_err());
}

#[test]
fn test_binding_pushes_errors_into_widgets() {
    let form = login_form();
    let email = Arc::new(Input::for_field("email"));
    let password = Arc::new(Input::for_field("password"));
    let binding = Binding::new(form)
        .attach(email.clone())
        .and_then(|b| b.attach(password.clone()))
        .unwrap();

    binding.edit("email", "bad").unwrap();
    let outcome = binding.submit();
    assert!(!outcome.is_accepted());
    assert_eq!(email.error().as_deref(), Some("Please enter a valid email address"));
    assert_eq!(password.error().as_deref(), Some("Password is required"));

    // Editing through the binding clears the widget annotation immediately.
    binding.edit("email", "good@example.com").unwrap();
    assert!(email.error().is_none());
    assert_eq!(email.value(), "good@example.com");
}

#[test]
fn test_binding_refresh_replays_form_state() {
    let form = login_form();
    let email = Arc::new(Input::for_field("email"));
    let binding = Binding::new(form.clone()).attach(email.clone()).unwrap();

    // Out-of-band mutation, then refresh.
    form.set_value("email", "x@y.zz").unwrap();
    assert!(form.is_dirty());
    binding.refresh();
    assert_eq!(email.value(), "x@y.zz");
    assert!(!form.is_dirty());
}
