//! Form widgets with reactive state.

mod checkbox;
mod input;

pub use checkbox::Checkbox;
pub use input::Input;
