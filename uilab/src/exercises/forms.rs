//! Exercises 11-15: form patterns.

use reflex::form::{Form, Submission};
use reflex::state::State;
use reflex::validate::{FieldSpec, Rule};
use reflex::widgets::{Checkbox, Input};
use reflex::wizard::{Wizard, WizardStep};

/// Exercise 11: login form. Both fields are simply required; a successful
/// submit produces the login-attempt message.
#[derive(Debug, Clone)]
pub struct LoginForm {
    form: Form,
    message: State<Option<String>>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FieldSpec::new("username").required("Username is required"),
                FieldSpec::new("password").required("Password is required"),
            ]),
            message: State::default(),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn submit(&self) -> Submission {
        let outcome = self.form.submit();
        if let Submission::Accepted(values) = &outcome {
            self.message
                .set(Some(format!("Login attempt with username: {}", values["username"])));
        }
        outcome
    }

    pub fn message(&self) -> Option<String> {
        self.message.get()
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Exercise 12: a controlled input with a live character count. The value
/// lives in the widget state; every keystroke flows through it.
#[derive(Debug, Clone)]
pub struct ControlledInput {
    input: Input,
}

impl ControlledInput {
    pub fn new() -> Self {
        Self {
            input: Input::with_placeholder("text", "Type something..."),
        }
    }

    pub fn type_str(&self, text: &str) {
        for c in text.chars() {
            self.input.push_char(c);
        }
    }

    pub fn backspace(&self) {
        self.input.backspace();
    }

    pub fn value(&self) -> String {
        self.input.value()
    }

    /// The live "Character count: n" readout.
    pub fn char_count(&self) -> usize {
        self.input.char_count()
    }
}

impl Default for ControlledInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Exercise 13: the email/password validation form. This is the same
/// registration pattern as exercises 26-30, flowing through the one
/// generic [`Form`].
pub fn validation_form() -> Form {
    Form::new(vec![
        FieldSpec::new("email")
            .required("Email is required")
            .rule_msg(Rule::Email, "Please enter a valid email address"),
        FieldSpec::new("password")
            .required("Password is required")
            .rule_msg(Rule::MinLength(8), "Password must be at least 8 characters"),
    ])
}

/// Exercise 14: the three-step checkout wizard. One shared form holds all
/// six fields; navigating never loses values.
pub fn checkout_wizard() -> Wizard {
    let form = Form::new(vec![
        FieldSpec::new("name"),
        FieldSpec::new("email"),
        FieldSpec::new("address"),
        FieldSpec::new("city"),
        FieldSpec::new("cardNumber"),
        FieldSpec::new("cvv"),
    ]);
    Wizard::new(
        form,
        vec![
            WizardStep::new("Personal", ["name", "email"]),
            WizardStep::new("Address", ["address", "city"]),
            WizardStep::new("Payment", ["cardNumber", "cvv"]),
        ],
    )
    .expect("three steps are declared")
}

/// Exercise 15: a group of checkboxes with a selected-labels readout.
#[derive(Debug, Clone)]
pub struct CheckboxGroup {
    boxes: Vec<Checkbox>,
}

impl CheckboxGroup {
    pub fn new(labels: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            boxes: labels.into_iter().map(Checkbox::with_label).collect(),
        }
    }

    pub fn boxes(&self) -> &[Checkbox] {
        &self.boxes
    }

    /// Click handler for one checkbox.
    pub fn toggle(&self, index: usize) {
        if let Some(checkbox) = self.boxes.get(index) {
            checkbox.toggle();
        }
    }

    /// Labels of the currently checked boxes, in declaration order.
    pub fn selected_labels(&self) -> Vec<String> {
        self.boxes
            .iter()
            .filter(|b| b.is_checked())
            .map(Checkbox::label)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let login = LoginForm::new();
        login.form().set_value("username", "ada").unwrap();
        assert!(!login.submit().is_accepted());
        assert!(login.message().is_none());

        login.form().set_value("password", "lovelace").unwrap();
        assert!(login.submit().is_accepted());
        assert_eq!(login.message().as_deref(), Some("Login attempt with username: ada"));
    }

    #[test]
    fn test_controlled_input_character_count() {
        let controlled = ControlledInput::new();
        controlled.type_str("hello");
        assert_eq!(controlled.char_count(), 5);
        controlled.backspace();
        assert_eq!(controlled.value(), "hell");
        assert_eq!(controlled.char_count(), 4);
    }

    #[test]
    fn test_validation_form_error_messages() {
        let form = validation_form();
        form.set_value("email", "not-an-email").unwrap();
        form.set_value("password", "short").unwrap();

        let outcome = form.submit();
        assert_eq!(outcome.error_for("email"), Some("Please enter a valid email address"));
        assert_eq!(
            outcome.error_for("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_checkout_wizard_preserves_data() {
        let wizard = checkout_wizard();
        wizard.form().set_value("name", "Jane").unwrap();
        wizard.next();
        wizard.form().set_value("city", "New York").unwrap();
        wizard.next();
        wizard.form().set_value("cardNumber", "1234 5678 9012 3456").unwrap();
        wizard.back();
        wizard.back();

        assert_eq!(wizard.form().value("name").as_deref(), Some("Jane"));
        assert_eq!(wizard.form().value("city").as_deref(), Some("New York"));
        assert_eq!(
            wizard.form().value("cardNumber").as_deref(),
            Some("1234 5678 9012 3456")
        );
    }

    #[test]
    fn test_checkbox_group_selected_labels() {
        let group = CheckboxGroup::new(["News", "Sports", "Tech"]);
        assert!(group.selected_labels().is_empty());
        group.toggle(0);
        group.toggle(2);
        assert_eq!(group.selected_labels(), ["News", "Tech"]);
        group.toggle(0);
        assert_eq!(group.selected_labels(), ["Tech"]);
    }
}
