//! UI fundamentals lab
//!
//! The exercise catalog behind a thirty-lesson course on component
//! composition, event handling, forms, client-side routing and render
//! memoization. Each lesson pairs static instructional metadata
//! ([`catalog`]) with a live interactive model ([`exercises`]) built on
//! the `reflex` toolkit.

pub mod catalog;
pub mod exercises;
