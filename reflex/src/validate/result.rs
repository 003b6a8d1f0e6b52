/// A validation failure for a specific field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field identifier (from the [`FieldSpec`](super::FieldSpec)).
    pub field: String,
    /// Human-readable validation message.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
