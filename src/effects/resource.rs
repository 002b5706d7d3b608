//! A named loadable value driven by effectful loaders.

use crate::core::{Loadable, Phase, PhaseHistory, PhaseTransition};
use chrono::{DateTime, Utc};
use stillwater::effect::Effect;

/// Transitions kept by a resource's history unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Owns one [`Loadable`] and applies the begin/settle protocol around the
/// loaders that feed it.
///
/// The pure transitions do the work; the resource adds logging, a timestamp
/// of the last successful load and, optionally, a [`PhaseHistory`] capped at
/// a fixed number of transitions.
///
/// Outcomes are folded in the order they are handed over. Deciding which
/// outcome belongs to the most recent request is up to the caller.
#[derive(Clone, Debug)]
pub struct Resource<E, V> {
    name: String,
    state: Loadable<E, V>,
    history: Option<PhaseHistory>,
    history_limit: usize,
    updated_at: Option<DateTime<Utc>>,
}

impl<E, V> Resource<E, V> {
    /// Create an idle resource that keeps the last
    /// [`DEFAULT_HISTORY_LIMIT`] transitions.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_parts(name.into(), Loadable::Idle, Some(DEFAULT_HISTORY_LIMIT))
    }

    /// `history_limit` of `None` or `Some(0)` disables history.
    pub(crate) fn from_parts(
        name: String,
        initial: Loadable<E, V>,
        history_limit: Option<usize>,
    ) -> Self {
        let history_limit = history_limit.unwrap_or(0);
        Self {
            name,
            state: initial,
            history: (history_limit > 0).then(PhaseHistory::new),
            history_limit,
            updated_at: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current state (pure)
    pub fn state(&self) -> &Loadable<E, V> {
        &self.state
    }

    /// Phase history, if recording is enabled (pure)
    pub fn history(&self) -> Option<&PhaseHistory> {
        self.history.as_ref()
    }

    /// When the latest successful outcome was folded in by this resource.
    ///
    /// Only outcomes passed to [`settle`](Self::settle) or
    /// [`fetch`](Self::fetch) count. A resource built with a restored
    /// `Success` state reports `None` until its first successful load.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Hand back the owned state.
    pub fn into_state(self) -> Loadable<E, V> {
        self.state
    }

    /// Mark that a load has been started.
    pub fn begin(&mut self) -> &Loadable<E, V> {
        let from = self.state.phase();
        self.state = std::mem::take(&mut self.state).expect_update();
        let to = self.state.phase();

        log::debug!("{}: begin load ({} -> {})", self.name, from, to);
        self.record(from, to);
        &self.state
    }

    /// Fold a completed outcome into the state.
    pub fn settle(&mut self, outcome: Result<V, E>) -> &Loadable<E, V> {
        let from = self.state.phase();
        let succeeded = outcome.is_ok();
        self.state = std::mem::take(&mut self.state).update(outcome);
        let to = self.state.phase();

        if succeeded {
            self.updated_at = Some(Utc::now());
        }

        match to {
            Phase::ReloadFailure => {
                log::warn!("{}: reload failed, keeping stale value", self.name)
            }
            Phase::Failure => log::warn!("{}: load failed, nothing to show", self.name),
            _ => {}
        }
        log::debug!("{}: settled ({} -> {})", self.name, from, to);

        self.record(from, to);
        &self.state
    }

    /// Begin a load, run `effect` against `env`, and fold its outcome.
    ///
    /// Renderers that need to observe the in-flight state should call
    /// [`begin`](Self::begin) and [`settle`](Self::settle) themselves.
    pub async fn fetch<Eff>(&mut self, effect: Eff, env: &Eff::Env) -> &Loadable<E, V>
    where
        Eff: Effect<Output = V, Error = E>,
        E: Send,
        V: Send,
    {
        self.begin();
        log::trace!("{}: running loader", self.name);
        let outcome = effect.run(env).await;
        self.settle(outcome)
    }

    fn record(&mut self, from: Phase, to: Phase) {
        if let Some(history) = self.history.as_mut() {
            let transition = PhaseTransition {
                from,
                to,
                timestamp: Utc::now(),
            };
            history.push_bounded(transition, self.history_limit);
        }
    }
}
