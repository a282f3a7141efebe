//! Core traits for the validation system

use crate::foundation::ValidationError;

/// The trait every validator implements.
///
/// The enclosing framework calls [`validate`](Validate::validate) and decides
/// from the result whether to keep going or report the failure.
///
/// # Examples
///
/// ```
/// use nebula_bounds::foundation::{Validate, ValidationError};
///
/// struct NonZero;
///
/// impl Validate for NonZero {
///     type Input = i32;
///
///     fn validate(&self, input: &i32) -> Result<(), ValidationError> {
///         if *input == 0 {
///             Err(ValidationError::new("non_zero", "Value must not be zero"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonZero.validate(&1).is_ok());
/// assert!(NonZero.validate(&0).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
