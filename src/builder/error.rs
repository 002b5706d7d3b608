//! Build errors for the resource builder.

use thiserror::Error;

/// Errors that can occur when building a resource.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Resource name not specified. Call .name(name) with a non-blank name before .build()")]
    MissingName,
}
