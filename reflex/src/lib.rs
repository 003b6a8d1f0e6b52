//! Reflex — a small declarative view-state toolkit.
//!
//! Provides the pieces an interactive, single-threaded view needs and
//! nothing more: reactive state cells with dirty tracking, revision-keyed
//! memoization, declarative field validation, a generic form state
//! container with an aggregate-all submission controller, a presentation
//! binding, a multi-step wizard, client-side route matching and a periodic
//! ticker.
//!
//! Everything is local and synchronous (the ticker aside): invalid input
//! is recoverable data, never an error path.

pub mod binding;
pub mod error;
pub mod form;
pub mod memo;
pub mod route;
pub mod state;
pub mod ticker;
pub mod validate;
pub mod widgets;
pub mod wizard;

pub mod prelude {
    pub use crate::binding::{Binding, FieldWidget};
    pub use crate::error::{FormError, RouteError, WizardError};
    pub use crate::form::{Form, Submission};
    pub use crate::memo::Memo;
    pub use crate::route::{RouteMatch, Router};
    pub use crate::state::State;
    pub use crate::ticker::Ticker;
    pub use crate::validate::{FieldError, FieldSpec, Rule, Violation, ViolationKind};
    pub use crate::widgets::{Checkbox, Input};
    pub use crate::wizard::{Nav, Wizard, WizardStep};
}
