//! Builder for constructing resources.

use crate::builder::error::BuildError;
use crate::core::Loadable;
use crate::effects::{Resource, DEFAULT_HISTORY_LIMIT};

/// Builder for constructing a [`Resource`] with a fluent API.
///
/// # Example
///
/// ```
/// use loadable::builder::ResourceBuilder;
/// use loadable::Loadable;
///
/// let resource = ResourceBuilder::<String, Vec<u32>>::new()
///     .name("invoices")
///     .initial(Loadable::Success { value: vec![1, 2] })
///     .record_history(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(resource.state().value(), Some(&vec![1, 2]));
/// assert!(resource.history().is_none());
/// ```
pub struct ResourceBuilder<E, V> {
    name: Option<String>,
    initial: Loadable<E, V>,
    record_history: bool,
    history_limit: usize,
}

impl<E, V> ResourceBuilder<E, V> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: None,
            initial: Loadable::Idle,
            record_history: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the name used in log output (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the starting state (optional, defaults to `Idle`).
    ///
    /// Useful when a previously loaded value is restored by the caller.
    pub fn initial(mut self, state: Loadable<E, V>) -> Self {
        self.initial = state;
        self
    }

    /// Enable or disable phase history recording (optional, defaults to on).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Cap the number of transitions the history keeps (optional, defaults
    /// to [`DEFAULT_HISTORY_LIMIT`]). A limit of zero disables history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the resource.
    /// Returns an error if the name is missing or blank.
    pub fn build(self) -> Result<Resource<E, V>, BuildError> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(BuildError::MissingName)?;

        let history_limit = self.record_history.then_some(self.history_limit);
        Ok(Resource::from_parts(name, self.initial, history_limit))
    }
}

impl<E, V> Default for ResourceBuilder<E, V> {
    fn default() -> Self {
        Self::new()
    }
}
