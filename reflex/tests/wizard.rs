//! Tests for the multi-step wizard.

use reflex::error::WizardError;
use reflex::form::Form;
use reflex::validate::{FieldSpec, Rule};
use reflex::wizard::{Nav, Wizard, WizardStep, transition};

fn checkout_wizard() -> Wizard {
    let form = Form::new(vec![
        FieldSpec::new("name").required("Name is required"),
        FieldSpec::new("email")
            .required("Email is required")
            .rule(Rule::Email),
        FieldSpec::new("address").required("Address is required"),
        FieldSpec::new("city").required("City is required"),
        FieldSpec::new("cardNumber").required("Card number is required"),
        FieldSpec::new("cvv").required("CVV is required"),
    ]);
    Wizard::new(
        form,
        vec![
            WizardStep::new("Personal", ["name", "email"]),
            WizardStep::new("Address", ["address", "city"]),
            WizardStep::new("Payment", ["cardNumber", "cvv"]),
        ],
    )
    .unwrap()
}

#[test]
fn test_wizard_requires_at_least_one_step() {
    let form = Form::new(vec![FieldSpec::new("name")]);
    let err = Wizard::new(form, vec![]).unwrap_err();
    assert!(matches!(err, WizardError::NoSteps));
}

#[test]
fn test_starts_on_step_one() {
    let wizard = checkout_wizard();
    assert_eq!(wizard.step(), 1);
    assert_eq!(wizard.total(), 3);
    assert_eq!(wizard.label(), "Personal");
}

#[test]
fn test_step_bounds_are_no_ops() {
    let wizard = checkout_wizard();
    assert_eq!(wizard.back(), 1);
    wizard.next();
    wizard.next();
    assert_eq!(wizard.step(), 3);
    assert_eq!(wizard.next(), 3);
}

#[test]
fn test_transition_is_pure_and_clamped() {
    for step in 1..=5usize {
        assert!(transition(step, 5, Nav::Next) <= 5);
        assert!(transition(step, 5, Nav::Back) >= 1);
        assert_eq!(transition(step, 5, Nav::Next), transition(step, 5, Nav::Next));
    }
}

#[test]
fn test_values_persist_across_navigation() {
    let wizard = checkout_wizard();
    wizard.form().set_value("name", "Jane Doe").unwrap();
    wizard.form().set_value("email", "jane@example.com").unwrap();

    wizard.next();
    wizard.form().set_value("address", "123 Main St").unwrap();
    wizard.next();
    wizard.back();
    wizard.back();

    // Back on step 1 after visiting every other step: nothing lost.
    assert_eq!(wizard.step(), 1);
    assert_eq!(wizard.form().value("name").as_deref(), Some("Jane Doe"));
    assert_eq!(wizard.form().value("address").as_deref(), Some("123 Main St"));
}

#[test]
fn test_submit_gated_to_final_step() {
    let wizard = checkout_wizard();
    let err = wizard.submit().unwrap_err();
    assert!(matches!(err, WizardError::NotOnFinalStep { step: 1, total: 3 }));

    wizard.next();
    wizard.next();
    assert!(wizard.can_submit());
    // All fields empty: rejected, but submit itself is available.
    let outcome = wizard.submit().unwrap();
    assert!(!outcome.is_accepted());
    assert_eq!(outcome.errors().len(), 6);
}

#[test]
fn test_progress_percent_matches_indicator() {
    let wizard = checkout_wizard();
    assert_eq!(wizard.progress_percent(), 33);
    wizard.next();
    assert_eq!(wizard.progress_percent(), 67);
    wizard.next();
    assert_eq!(wizard.progress_percent(), 100);
}

#[test]
fn test_validate_step_scopes_to_current_fields() {
    let wizard = checkout_wizard();
    let errors = wizard.validate_step();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["name", "email"]);

    wizard.form().set_value("name", "Jane").unwrap();
    wizard.form().set_value("email", "jane@example.com").unwrap();
    assert!(wizard.validate_step().is_empty());
    // Navigation never gates on step validation.
    assert_eq!(wizard.next(), 2);
}
