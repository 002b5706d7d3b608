//! Why a `Loadable` has no value to hand out.

use thiserror::Error;

/// Returned by [`Loadable::into_result`](super::Loadable::into_result) when
/// no value, fresh or stale, is on hand.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Unavailable<E> {
    #[error("no load has been requested")]
    NotRequested,

    #[error("first load is still in flight")]
    Pending,

    #[error("load failed: {0}")]
    Failed(E),
}
