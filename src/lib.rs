//! Loadable: the lifecycle of an asynchronously loaded value
//!
//! Loadable follows the "pure core, imperative shell" philosophy. The core is
//! a single six-variant enum plus pure, total functions over it. The shell
//! runs loaders (Stillwater effects) and folds their outcomes in.
//!
//! # Core Concepts
//!
//! - **Loadable**: `Idle`, `Loading`, `Success`, `Failure`, `Reloading`,
//!   `ReloadFailure`, separating "no data yet" from "data on hand, reload
//!   running or failed"
//! - **Transitions**: `expect_update` when a load starts, `update` when it
//!   completes; a failure never discards the most recent value
//! - **Queries**: `is_loading`, `is_stale`, `has_value`, `has_error`, so
//!   renderers never need to match all six variants
//! - **Resource**: a named, logged owner of one `Loadable` driven by effects
//!
//! # Example
//!
//! ```rust
//! use loadable::Loadable;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum HttpError {
//!     Status(u16),
//! }
//!
//! let users: Loadable<HttpError, Vec<&str>> = Loadable::Idle;
//!
//! // A request goes out, then comes back.
//! let users = users.expect_update();
//! let users = users.update(Ok(vec!["ada", "grace"]));
//!
//! // Refreshing keeps the list on screen.
//! let users = users.expect_update();
//! assert!(users.is_loading() && users.is_stale());
//!
//! // A failed refresh keeps it too, next to the error.
//! let users = users.update(Err(HttpError::Status(503)));
//! assert_eq!(users.value().map(Vec::len), Some(2));
//! assert_eq!(users.error(), Some(&HttpError::Status(503)));
//! ```

pub mod builder;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::builder::{BuildError, ResourceBuilder};
pub use crate::core::{Loadable, Phase, PhaseHistory, PhaseTransition, Unavailable};
pub use crate::effects::Resource;
