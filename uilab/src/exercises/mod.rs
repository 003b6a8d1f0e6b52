//! Live models behind each lesson preview.
//!
//! One module per topic. Every model is an ordinary in-memory value: no
//! persistence, no network, nothing outlives the view that created it.

pub mod composition;
pub mod events;
pub mod forms;
pub mod memoization;
pub mod registration;
pub mod routing;
