//! Builder API for configuring resources.

pub mod error;
pub mod resource;

pub use error::BuildError;
pub use resource::ResourceBuilder;
