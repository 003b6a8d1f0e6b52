//! Registration Form Example
//!
//! A demo walking one registration form through the full lifecycle:
//! - declare fields with validation rules
//! - simulate user edits through a presentation binding
//! - submit with failures, correct them, submit again

use std::fs::File;
use std::sync::Arc;

use log::LevelFilter;
use reflex::prelude::*;
use simplelog::{Config, WriteLogger};

fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("registration.log").expect("create log file"),
    );

    let form = Form::new(vec![
        FieldSpec::new("name").required("Name is required"),
        FieldSpec::new("email")
            .required("Email is required")
            .rule_msg(Rule::Email, "Email must be in a valid format (e.g., user@example.com)"),
        FieldSpec::new("phone")
            .required("Phone number is required")
            .rule_msg(
                Rule::Numeric { min_len: 10 },
                "Phone number must be numeric and at least 10 digits",
            ),
    ]);

    let name = Arc::new(Input::with_placeholder("name", "Jane Doe"));
    let email = Arc::new(Input::with_placeholder("email", "jane@example.com"));
    let phone = Arc::new(Input::with_placeholder("phone", "1234567890"));

    let binding = Binding::new(form.clone())
        .attach(name.clone())
        .and_then(|b| b.attach(email.clone()))
        .and_then(|b| b.attach(phone.clone()))
        .expect("all widgets bound to declared fields");

    // First attempt: phone number contains dashes.
    binding.edit("name", "Jane Doe").unwrap();
    binding.edit("email", "jane@example.com").unwrap();
    binding.edit("phone", "123-456-7890").unwrap();

    match binding.submit() {
        Submission::Rejected(errors) => {
            println!("rejected:");
            for error in &errors {
                println!("  {error}");
            }
        }
        Submission::Accepted(_) => unreachable!("phone is invalid"),
    }
    println!("phone widget shows: {:?}", phone.error());

    // The user corrects the phone field; its error clears immediately.
    binding.edit("phone", "1234567890").unwrap();
    assert!(phone.error().is_none());

    match binding.submit() {
        Submission::Accepted(values) => {
            println!("accepted: {} fields", values.len());
            form.reset();
            binding.refresh();
            println!("after reset, name widget shows: {:?}", name.value());
        }
        Submission::Rejected(errors) => unreachable!("unexpected errors: {errors:?}"),
    }
}
