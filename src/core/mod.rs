//! Core loadable type and logic.
//!
//! This module contains the pure functional core:
//! - The `Loadable` state type with its queries and mapping functions
//! - The `expect_update` / `update` transitions
//! - `Phase` tags and an immutable phase history
//!
//! All logic in this module is pure (no side effects, no logging),
//! following the "pure core, imperative shell" philosophy.

mod error;
mod history;
mod loadable;
mod phase;
mod transition;

pub use error::Unavailable;
pub use history::{PhaseHistory, PhaseTransition};
pub use loadable::Loadable;
pub use phase::Phase;
