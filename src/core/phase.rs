//! Payload-free tag of a `Loadable`.
//!
//! `Phase` lets logging and history talk about where a value is in its
//! lifecycle without requiring anything of the value or error types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The variant of a [`Loadable`](super::Loadable), without its payload.
///
/// # Example
///
/// ```rust
/// use loadable::{Loadable, Phase};
///
/// let state: Loadable<String, i32> = Loadable::ReloadFailure {
///     error: "timeout".to_string(),
///     stale: 1,
/// };
///
/// assert_eq!(state.phase(), Phase::ReloadFailure);
/// assert!(state.phase().is_error());
/// assert!(!state.phase().is_in_flight());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
    Reloading,
    ReloadFailure,
}

impl Phase {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Reloading => "Reloading",
            Self::ReloadFailure => "ReloadFailure",
        }
    }

    /// Whether an update was in flight in this phase.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Loading | Self::Reloading)
    }

    /// Whether the phase records a failed outcome.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure | Self::ReloadFailure)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
