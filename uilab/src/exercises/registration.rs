//! Exercises 26-30: the registration forms.
//!
//! Five near-identical forms from the course, declared as field lists over
//! the one generic [`Form`] instead of five hand-rolled validate/submit
//! copies. Messages match the lesson material.

use reflex::form::Form;
use reflex::validate::{FieldSpec, Rule};

/// Exercise 26: lecturer registration.
pub fn lecturer_form() -> Form {
    Form::new(vec![
        FieldSpec::new("name").required("Name is required"),
        FieldSpec::new("email")
            .required("Email is required")
            .rule_msg(
                Rule::Email,
                "Email must be in a valid format (e.g., user@example.com)",
            ),
        FieldSpec::new("subject").required("Subject is required"),
        FieldSpec::new("phone")
            .required("Phone number is required")
            .rule_msg(
                Rule::Numeric { min_len: 10 },
                "Phone number must be numeric and at least 10 digits",
            ),
    ])
}

/// Exercise 27: student registration.
pub fn student_form() -> Form {
    Form::new(vec![
        FieldSpec::new("firstName").required("First name is required"),
        FieldSpec::new("lastName").required("Last name is required"),
        FieldSpec::new("email")
            .required("Email is required")
            .rule_msg(
                Rule::Email,
                "Email must be in a valid format (e.g., student@university.edu)",
            ),
        FieldSpec::new("studentId")
            .required("Student ID is required")
            .rule_msg(
                Rule::Alphanumeric { min_len: 6 },
                "Student ID must contain only alphanumeric characters and be at least 6 characters",
            ),
        FieldSpec::new("dateOfBirth").required("Date of birth is required"),
    ])
}

/// Exercise 28: driver registration.
pub fn driver_form() -> Form {
    Form::new(vec![
        FieldSpec::new("name").required("Name is required"),
        FieldSpec::new("licenseNumber").required("License number is required"),
        FieldSpec::new("phone")
            .required("Phone number is required")
            .rule_msg(
                Rule::Numeric { min_len: 10 },
                "Phone number must be numeric and at least 10 digits",
            ),
        FieldSpec::new("vehicleType").required("Vehicle type is required"),
    ])
}

/// Exercise 29: book registration.
pub fn book_form() -> Form {
    Form::new(vec![
        FieldSpec::new("bookTitle").required("Book title is required"),
        FieldSpec::new("author").required("Author is required"),
        FieldSpec::new("isbn").required("ISBN is required"),
        FieldSpec::new("publishedYear")
            .required("Published year is required")
            .rule_msg(
                Rule::FourDigitYear,
                "Published year must be a four-digit number (e.g., 2024)",
            ),
    ])
}

/// Exercise 30: module registration.
pub fn module_form() -> Form {
    Form::new(vec![
        FieldSpec::new("moduleName").required("Module name is required"),
        FieldSpec::new("moduleCode").required("Module code is required"),
        FieldSpec::new("description").required("Description is required"),
        FieldSpec::new("credits")
            .required("Credits is required")
            .rule_msg(
                Rule::PositiveDecimal,
                "Credits must be a numeric value greater than 0",
            ),
    ])
}
