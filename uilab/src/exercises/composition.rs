//! Exercises 1-5: component composition.
//!
//! These previews have no interactivity at all; the models are pure
//! render-to-line functions composed the way the lesson composes
//! components.

use chrono::{Datelike, NaiveDate};

/// Exercise 1: the welcome line.
pub fn welcome_line(name: &str) -> String {
    format!("Welcome to the lab, {name}!")
}

/// Exercise 1: today's date, rendered like "Mon, August 24, 2026".
pub fn date_line(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        date.weekday(),
        month_name(date.month()),
        date.day(),
        date.year()
    )
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// Exercise 2: the parent declares the hobby list and renders one child
/// line per hobby.
pub fn hobby_lines(hobbies: &[&str]) -> Vec<String> {
    hobbies.iter().map(|hobby| hobby_item(hobby)).collect()
}

/// Exercise 2: the child renders a single hobby it received as a property.
fn hobby_item(hobby: &str) -> String {
    format!("• {hobby}")
}

/// Exercise 3: button color variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Destructive,
}

/// Exercise 3: one reusable button, parameterized by label and variant.
#[derive(Debug, Clone)]
pub struct LabButton {
    pub label: String,
    pub variant: ButtonVariant,
}

impl LabButton {
    pub fn new(label: impl Into<String>, variant: ButtonVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }

    /// Render the button as a styled line.
    pub fn render(&self) -> String {
        let style = match self.variant {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
        };
        format!("[{}] ({style})", self.label)
    }
}

/// Exercise 4: a profile card rendered from its properties.
#[derive(Debug, Clone)]
pub struct ProfileCard {
    pub name: String,
    pub role: String,
    pub bio: String,
}

impl ProfileCard {
    pub fn render(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.role.clone(),
            self.bio.clone(),
        ]
    }
}

/// Exercise 5: map a list of items to rendered rows with stable keys.
pub fn mapped_rows(items: &[&str]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(key, item)| format!("{key}: {item}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_line_renders_full_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(date_line(date), "Fri, March 1, 2024");
    }

    #[test]
    fn test_one_child_per_hobby() {
        let lines = hobby_lines(&["Reading", "Hiking", "Chess"]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "• Reading");
    }

    #[test]
    fn test_button_variants_render_distinctly() {
        let save = LabButton::new("Save", ButtonVariant::Primary);
        let delete = LabButton::new("Delete", ButtonVariant::Destructive);
        assert_ne!(save.render(), delete.render());
        assert!(save.render().contains("Save"));
    }

    #[test]
    fn test_mapped_rows_have_stable_keys() {
        let rows = mapped_rows(&["a", "b"]);
        assert_eq!(rows, ["0: a", "1: b"]);
    }
}
