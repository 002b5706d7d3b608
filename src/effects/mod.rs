//! Effectful loading around the pure core, using Stillwater 0.11.0.
//!
//! This module is the "imperative shell": it runs loaders expressed as
//! Stillwater effects and folds their outcomes into a [`Loadable`] through
//! the pure transitions.
//!
//! [`Loadable`]: crate::core::Loadable

mod resource;

pub use resource::{Resource, DEFAULT_HISTORY_LIMIT};
