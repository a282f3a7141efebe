//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrorKind`]

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrorKind};
pub use traits::Validate;
