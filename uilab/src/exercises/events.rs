//! Exercises 6-10: event handling.
//!
//! Every interaction here is a local view-state change driven by a single
//! synchronous event: click, mouse-enter, mouse-leave, submit.

use log::debug;
use reflex::form::Form;
use reflex::state::State;
use reflex::validate::FieldSpec;
use reflex::widgets::Checkbox;

/// Exercise 6: a button that toggles between ON and OFF.
#[derive(Debug, Clone)]
pub struct ToggleButton {
    switch: Checkbox,
}

impl ToggleButton {
    pub fn new() -> Self {
        Self {
            switch: Checkbox::with_label("power"),
        }
    }

    /// Click handler.
    pub fn click(&self) {
        self.switch.toggle();
    }

    /// The button label for the current state.
    pub fn label(&self) -> &'static str {
        if self.switch.is_checked() { "ON" } else { "OFF" }
    }
}

impl Default for ToggleButton {
    fn default() -> Self {
        Self::new()
    }
}

/// Sign classification for the counter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Neutral,
    Positive,
}

/// Exercise 7: increment/decrement counter with sign-colored display.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    count: State<i32>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.count.update(|c| *c += 1);
    }

    pub fn decrement(&self) {
        self.count.update(|c| *c -= 1);
    }

    pub fn reset(&self) {
        self.count.set(0);
    }

    pub fn count(&self) -> i32 {
        self.count.get()
    }

    /// Drives the display color and the Neutral/Positive/Negative caption.
    pub fn sign(&self) -> Sign {
        match self.count.get() {
            c if c < 0 => Sign::Negative,
            0 => Sign::Neutral,
            _ => Sign::Positive,
        }
    }
}

/// Exercise 8: background swap on hover.
#[derive(Debug, Clone, Default)]
pub struct HoverHighlight {
    hovered: State<bool>,
}

impl HoverHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mouse_enter(&self) {
        self.hovered.set(true);
    }

    pub fn mouse_leave(&self) {
        self.hovered.set(false);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }

    /// The background color for the current hover state.
    pub fn background(&self) -> &'static str {
        if self.hovered.get() { "accent" } else { "secondary" }
    }
}

/// Exercise 9: a one-field form that logs every submitted value.
#[derive(Debug, Clone)]
pub struct SubmitLogger {
    form: Form,
    log: State<Vec<String>>,
}

impl SubmitLogger {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![FieldSpec::new("message")]),
            log: State::default(),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Submit handler: append the current value to the log and clear the
    /// field for the next entry.
    pub fn submit(&self) {
        let message = self.form.value("message").unwrap_or_default();
        debug!("submit logger: {message:?}");
        self.log.update(|log| log.push(message));
        self.form.reset();
    }

    pub fn entries(&self) -> Vec<String> {
        self.log.get()
    }
}

impl Default for SubmitLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// Exercise 10: dropdown menu that opens on click and closes on select.
#[derive(Debug, Clone)]
pub struct Dropdown {
    options: Vec<String>,
    open: State<bool>,
    selected: State<Option<usize>>,
}

impl Dropdown {
    pub fn new(options: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            options: options.into_iter().map(str::to_string).collect(),
            open: State::default(),
            selected: State::default(),
        }
    }

    /// The menu from the lesson: Dashboard through Logout.
    pub fn menu() -> Self {
        Self::new(["Dashboard", "Profile", "Settings", "Billing", "Logout"])
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Trigger click: show or hide the options.
    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    /// Option click: select it and close the menu.
    pub fn select(&self, index: usize) {
        if index < self.options.len() {
            self.selected.set(Some(index));
            self.open.set(false);
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.get().map(|i| self.options[i].as_str())
    }
}
