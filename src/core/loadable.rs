//! The `Loadable` value type.
//!
//! A `Loadable` describes where an asynchronously produced value is in its
//! lifecycle. It separates "nothing loaded yet" from "a value is on hand but
//! a reload is running or has failed", so renderers can keep showing stale
//! data instead of flashing back to a spinner.

use super::error::Unavailable;
use super::phase::Phase;
use serde::{Deserialize, Serialize};

/// Lifecycle of a value produced by an external loader.
///
/// A value is only ever carried after a successful outcome produced it, and
/// it is always the most recent one. At most one error is carried, the most
/// recent failure.
///
/// All operations take `self` by value (or borrow it) and return a new
/// `Loadable`; nothing is mutated in place.
///
/// # Example
///
/// ```rust
/// use loadable::Loadable;
///
/// let state: Loadable<String, u32> = Loadable::Idle;
/// let state = state.expect_update();
/// assert!(state.is_loading());
/// assert!(!state.has_value());
///
/// let state = state.update(Ok(42));
/// assert_eq!(state.value(), Some(&42));
///
/// let state = state.expect_update();
/// assert!(state.is_stale());
/// assert_eq!(state.value(), Some(&42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Loadable<E, V> {
    /// No load has ever been requested.
    Idle,

    /// The first load is in flight and there is no prior value.
    Loading,

    /// The latest load completed and its value is fresh.
    Success { value: V },

    /// A load failed and no value was ever obtained.
    Failure { error: E },

    /// A reload is in flight; the previous value is retained.
    Reloading { stale: V },

    /// A reload failed; the previous value is retained next to the error.
    ReloadFailure { error: E, stale: V },
}

impl<E, V> Default for Loadable<E, V> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<E, V> Loadable<E, V> {
    /// True while an update is in flight (`Loading` or `Reloading`).
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading | Self::Reloading { .. })
    }

    /// True when a retained value coexists with an in-flight or failed
    /// reload (`Reloading` or `ReloadFailure`).
    ///
    /// A stale state always has a value.
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Reloading { .. } | Self::ReloadFailure { .. })
    }

    /// True when [`value`](Self::value) returns `Some`.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            Self::Success { .. } | Self::Reloading { .. } | Self::ReloadFailure { .. }
        )
    }

    /// True when [`error`](Self::error) returns `Some`.
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failure { .. } | Self::ReloadFailure { .. })
    }

    /// Borrow the value, fresh or stale.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loadable::Loadable;
    ///
    /// let fresh: Loadable<&str, i32> = Loadable::Success { value: 1 };
    /// let stale: Loadable<&str, i32> = Loadable::ReloadFailure { error: "timeout", stale: 1 };
    /// let failed: Loadable<&str, i32> = Loadable::Failure { error: "timeout" };
    ///
    /// assert_eq!(fresh.value(), Some(&1));
    /// assert_eq!(stale.value(), Some(&1));
    /// assert_eq!(failed.value(), None);
    /// ```
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Success { value } => Some(value),
            Self::Reloading { stale } | Self::ReloadFailure { stale, .. } => Some(stale),
            Self::Idle | Self::Loading | Self::Failure { .. } => None,
        }
    }

    /// Borrow the most recent error, if the last outcome was a failure.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failure { error } | Self::ReloadFailure { error, .. } => Some(error),
            Self::Idle | Self::Loading | Self::Success { .. } | Self::Reloading { .. } => None,
        }
    }

    /// Take the value out, discarding the rest of the state.
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success { value } => Some(value),
            Self::Reloading { stale } | Self::ReloadFailure { stale, .. } => Some(stale),
            Self::Idle | Self::Loading | Self::Failure { .. } => None,
        }
    }

    /// Take the error out, discarding the rest of the state.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Failure { error } | Self::ReloadFailure { error, .. } => Some(error),
            Self::Idle | Self::Loading | Self::Success { .. } | Self::Reloading { .. } => None,
        }
    }

    /// Convert into a `Result` that yields the value whenever one is on
    /// hand, and otherwise explains why there is none.
    ///
    /// A `ReloadFailure` yields its stale value; the reload error is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loadable::{Loadable, Unavailable};
    ///
    /// let loading: Loadable<String, i32> = Loadable::Loading;
    /// assert_eq!(loading.into_result(), Err(Unavailable::Pending));
    ///
    /// let stale: Loadable<String, i32> = Loadable::Reloading { stale: 3 };
    /// assert_eq!(stale.into_result(), Ok(3));
    /// ```
    pub fn into_result(self) -> Result<V, Unavailable<E>> {
        match self {
            Self::Success { value } => Ok(value),
            Self::Reloading { stale } | Self::ReloadFailure { stale, .. } => Ok(stale),
            Self::Idle => Err(Unavailable::NotRequested),
            Self::Loading => Err(Unavailable::Pending),
            Self::Failure { error } => Err(Unavailable::Failed(error)),
        }
    }

    /// Borrow both payloads, keeping the variant.
    pub fn as_ref(&self) -> Loadable<&E, &V> {
        match self {
            Self::Idle => Loadable::Idle,
            Self::Loading => Loadable::Loading,
            Self::Success { value } => Loadable::Success { value },
            Self::Failure { error } => Loadable::Failure { error },
            Self::Reloading { stale } => Loadable::Reloading { stale },
            Self::ReloadFailure { error, stale } => Loadable::ReloadFailure { error, stale },
        }
    }

    /// The payload-free variant tag.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Loading => Phase::Loading,
            Self::Success { .. } => Phase::Success,
            Self::Failure { .. } => Phase::Failure,
            Self::Reloading { .. } => Phase::Reloading,
            Self::ReloadFailure { .. } => Phase::ReloadFailure,
        }
    }

    /// Apply `f` to the value wherever one is carried.
    ///
    /// The variant and any error are left as they are.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loadable::Loadable;
    ///
    /// let state: Loadable<String, i32> = Loadable::Reloading { stale: 7 };
    /// assert_eq!(state.map(|x| x + 1), Loadable::Reloading { stale: 8 });
    /// ```
    pub fn map<U, F>(self, f: F) -> Loadable<E, U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Idle => Loadable::Idle,
            Self::Loading => Loadable::Loading,
            Self::Success { value } => Loadable::Success { value: f(value) },
            Self::Failure { error } => Loadable::Failure { error },
            Self::Reloading { stale } => Loadable::Reloading { stale: f(stale) },
            Self::ReloadFailure { error, stale } => Loadable::ReloadFailure {
                error,
                stale: f(stale),
            },
        }
    }

    /// Apply `f` to the error wherever one is carried.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loadable::Loadable;
    ///
    /// let state: Loadable<&str, i32> = Loadable::Failure { error: "err" };
    /// assert_eq!(state.map_error(str::len), Loadable::Failure { error: 3 });
    /// ```
    pub fn map_error<E2, F>(self, f: F) -> Loadable<E2, V>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Idle => Loadable::Idle,
            Self::Loading => Loadable::Loading,
            Self::Success { value } => Loadable::Success { value },
            Self::Failure { error } => Loadable::Failure { error: f(error) },
            Self::Reloading { stale } => Loadable::Reloading { stale },
            Self::ReloadFailure { error, stale } => Loadable::ReloadFailure {
                error: f(error),
                stale,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type L = Loadable<String, i32>;

    fn all_variants() -> Vec<L> {
        vec![
            Loadable::Idle,
            Loadable::Loading,
            Loadable::Success { value: 1 },
            Loadable::Failure {
                error: "boom".to_string(),
            },
            Loadable::Reloading { stale: 2 },
            Loadable::ReloadFailure {
                error: "boom".to_string(),
                stale: 3,
            },
        ]
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(L::default(), Loadable::Idle);
    }

    #[test]
    fn is_loading_only_for_in_flight_states() {
        let flags: Vec<bool> = all_variants().iter().map(L::is_loading).collect();
        assert_eq!(flags, vec![false, true, false, false, true, false]);
    }

    #[test]
    fn is_stale_only_for_retained_values() {
        let flags: Vec<bool> = all_variants().iter().map(L::is_stale).collect();
        assert_eq!(flags, vec![false, false, false, false, true, true]);
    }

    #[test]
    fn has_value_and_has_error_agree_with_extraction() {
        for state in all_variants() {
            assert_eq!(state.has_value(), state.value().is_some());
            assert_eq!(state.has_error(), state.error().is_some());
        }
    }

    #[test]
    fn reloading_scenario() {
        let state: L = Loadable::Reloading { stale: 7 };
        assert!(state.is_loading());
        assert!(state.is_stale());
        assert_eq!(state.into_value(), Some(7));
    }

    #[test]
    fn reload_failure_carries_both_payloads() {
        let state: L = Loadable::ReloadFailure {
            error: "offline".to_string(),
            stale: 5,
        };
        assert_eq!(state.value(), Some(&5));
        assert_eq!(state.error().map(String::as_str), Some("offline"));
        assert_eq!(state.clone().into_error(), Some("offline".to_string()));
        assert_eq!(state.into_value(), Some(5));
    }

    #[test]
    fn into_result_explains_missing_value() {
        assert_eq!(L::Idle.into_result(), Err(Unavailable::NotRequested));
        assert_eq!(L::Loading.into_result(), Err(Unavailable::Pending));
        assert_eq!(
            L::Failure {
                error: "nope".to_string()
            }
            .into_result(),
            Err(Unavailable::Failed("nope".to_string()))
        );
        assert_eq!(L::Success { value: 9 }.into_result(), Ok(9));
    }

    #[test]
    fn as_ref_keeps_variant() {
        for state in all_variants() {
            assert_eq!(state.as_ref().phase(), state.phase());
            assert_eq!(state.as_ref().value(), state.value().as_ref());
        }
    }

    #[test]
    fn map_touches_only_values() {
        let mapped: Vec<Loadable<String, i32>> =
            all_variants().into_iter().map(|s| s.map(|x| x * 10)).collect();

        assert_eq!(mapped[0], Loadable::Idle);
        assert_eq!(mapped[1], Loadable::Loading);
        assert_eq!(mapped[2], Loadable::Success { value: 10 });
        assert_eq!(
            mapped[3],
            Loadable::Failure {
                error: "boom".to_string()
            }
        );
        assert_eq!(mapped[4], Loadable::Reloading { stale: 20 });
        assert_eq!(
            mapped[5],
            Loadable::ReloadFailure {
                error: "boom".to_string(),
                stale: 30
            }
        );
    }

    #[test]
    fn map_error_touches_only_errors() {
        for state in all_variants() {
            let phase = state.phase();
            let value = state.value().copied();
            let expected_error = state.error().map(String::len);

            let mapped = state.map_error(|e| e.len());

            assert_eq!(mapped.phase(), phase);
            assert_eq!(mapped.value().copied(), value);
            assert_eq!(mapped.error().copied(), expected_error);
        }
    }

    #[test]
    fn map_can_change_value_type() {
        let state: L = Loadable::Success { value: 4 };
        let mapped = state.map(|x| format!("#{x}"));
        assert_eq!(
            mapped,
            Loadable::Success {
                value: "#4".to_string()
            }
        );
    }

    #[test]
    fn loadable_serializes_correctly() {
        for state in all_variants() {
            let json = serde_json::to_string(&state).unwrap();
            let deserialized: L = serde_json::from_str(&json).unwrap();
            assert_eq!(state, deserialized);
        }
    }
}
