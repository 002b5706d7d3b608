//! Transitions of a `Loadable`.
//!
//! Two pure functions drive the lifecycle: [`Loadable::expect_update`] marks
//! that a load has been started, and [`Loadable::update`] folds the outcome of
//! that load back in. Neither ever discards a value that is still the most
//! recent successful one.

use super::loadable::Loadable;

impl<E, V> Loadable<E, V> {
    /// Mark that a load or reload has been started.
    ///
    /// States holding a value move to `Reloading` and keep it; states without
    /// one move to `Loading`. Already-loading states are returned unchanged.
    ///
    /// | from                    | to                 |
    /// |-------------------------|--------------------|
    /// | `Idle`, `Failure`       | `Loading`          |
    /// | `Loading`               | `Loading`          |
    /// | `Success { v }`         | `Reloading { v }`  |
    /// | `Reloading { v }`       | `Reloading { v }`  |
    /// | `ReloadFailure { _, v }`| `Reloading { v }`  |
    ///
    /// # Example
    ///
    /// ```rust
    /// use loadable::Loadable;
    ///
    /// let state: Loadable<String, i32> = Loadable::Success { value: 1 };
    /// assert_eq!(state.expect_update(), Loadable::Reloading { stale: 1 });
    ///
    /// let failed: Loadable<String, i32> = Loadable::Failure { error: "x".into() };
    /// assert_eq!(failed.expect_update(), Loadable::Loading);
    /// ```
    pub fn expect_update(self) -> Self {
        match self {
            Self::Idle | Self::Loading | Self::Failure { .. } => Self::Loading,
            Self::Success { value: stale }
            | Self::Reloading { stale }
            | Self::ReloadFailure { stale, .. } => Self::Reloading { stale },
        }
    }

    /// Fold a completed outcome into the state.
    ///
    /// `Ok(v)` always yields `Success { v }`. A failure keeps any value that
    /// is already on hand:
    ///
    /// | from                                           | `Err(e)` yields              |
    /// |------------------------------------------------|------------------------------|
    /// | `Success { v }`, `Reloading { v }`, `ReloadFailure { _, v }` | `ReloadFailure { e, v }` |
    /// | `Idle`, `Loading`, `Failure { _ }`             | `Failure { e }`              |
    ///
    /// The previous error, if any, is replaced by the new one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loadable::Loadable;
    ///
    /// let state: Loadable<&str, i32> = Loadable::Idle;
    /// let state = state.update(Ok(42)).update(Err("e1"));
    ///
    /// assert_eq!(state, Loadable::ReloadFailure { error: "e1", stale: 42 });
    /// ```
    pub fn update(self, outcome: Result<V, E>) -> Self {
        match (outcome, self) {
            (Ok(value), _) => Self::Success { value },
            (
                Err(error),
                Self::Success { value: stale }
                | Self::Reloading { stale }
                | Self::ReloadFailure { stale, .. },
            ) => Self::ReloadFailure { error, stale },
            (Err(error), Self::Idle | Self::Loading | Self::Failure { .. }) => {
                Self::Failure { error }
            }
        }
    }
}

/// A lone outcome with no prior state behind it.
///
/// Equivalent to folding the outcome into `Loadable::Idle`.
impl<E, V> From<Result<V, E>> for Loadable<E, V> {
    fn from(outcome: Result<V, E>) -> Self {
        match outcome {
            Ok(value) => Self::Success { value },
            Err(error) => Self::Failure { error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type L = Loadable<&'static str, i32>;

    #[test]
    fn expect_update_starts_first_load() {
        assert_eq!(L::Idle.expect_update(), L::Loading);
        assert_eq!(L::Failure { error: "e" }.expect_update(), L::Loading);
    }

    #[test]
    fn expect_update_keeps_retained_value() {
        assert_eq!(
            L::Success { value: 1 }.expect_update(),
            L::Reloading { stale: 1 }
        );
        assert_eq!(
            L::ReloadFailure {
                error: "e",
                stale: 2
            }
            .expect_update(),
            L::Reloading { stale: 2 }
        );
    }

    #[test]
    fn expect_update_is_idempotent_while_in_flight() {
        assert_eq!(L::Loading.expect_update(), L::Loading);
        assert_eq!(
            L::Reloading { stale: 3 }.expect_update(),
            L::Reloading { stale: 3 }
        );
        assert_eq!(
            L::Success { value: 4 }.expect_update().expect_update(),
            L::Reloading { stale: 4 }
        );
    }

    #[test]
    fn update_ok_always_succeeds() {
        let starts = [
            L::Idle,
            L::Loading,
            L::Success { value: 1 },
            L::Failure { error: "e" },
            L::Reloading { stale: 2 },
            L::ReloadFailure {
                error: "e",
                stale: 3,
            },
        ];

        for start in starts {
            assert_eq!(start.update(Ok(42)), L::Success { value: 42 });
        }
    }

    #[test]
    fn update_err_without_value_fails() {
        assert_eq!(L::Idle.update(Err("e")), L::Failure { error: "e" });
        assert_eq!(L::Loading.update(Err("e")), L::Failure { error: "e" });
        assert_eq!(
            L::Failure { error: "old" }.update(Err("new")),
            L::Failure { error: "new" }
        );
    }

    #[test]
    fn update_err_with_value_keeps_it() {
        assert_eq!(
            L::Success { value: 1 }.update(Err("e")),
            L::ReloadFailure {
                error: "e",
                stale: 1
            }
        );
        assert_eq!(
            L::Reloading { stale: 2 }.update(Err("e")),
            L::ReloadFailure {
                error: "e",
                stale: 2
            }
        );
        assert_eq!(
            L::ReloadFailure {
                error: "old",
                stale: 3
            }
            .update(Err("new")),
            L::ReloadFailure {
                error: "new",
                stale: 3
            }
        );
    }

    #[test]
    fn newer_success_replaces_retained_value() {
        let state = L::Idle
            .expect_update()
            .update(Ok(1))
            .expect_update()
            .update(Err("flaky"))
            .expect_update()
            .update(Ok(2))
            .expect_update();

        assert_eq!(state, L::Reloading { stale: 2 });

        let state = state.update(Err("down"));
        assert_eq!(
            state,
            L::ReloadFailure {
                error: "down",
                stale: 2
            }
        );
    }

    #[test]
    fn success_then_failure_scenario() {
        let state = L::Idle.update(Ok(42)).update(Err("e1"));
        assert_eq!(
            state,
            L::ReloadFailure {
                error: "e1",
                stale: 42
            }
        );
    }

    #[test]
    fn from_result_matches_fold_into_idle() {
        let ok: Result<i32, &str> = Ok(5);
        let err: Result<i32, &str> = Err("e");

        assert_eq!(L::from(ok), L::Idle.update(ok));
        assert_eq!(L::from(err), L::Idle.update(err));
    }
}
