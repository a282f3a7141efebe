//! Upper-bound validators
//!
//! [`Max`] is statically typed: the maximum and the checked value share one
//! [`Bounded`] type, so a representation mismatch cannot be written.
//! [`DynMax`] carries its maximum as a [`Number`] and is the checker to use
//! when the representation is only known at runtime; a candidate of another
//! representation fails with an `unsupported_representation` error.

use std::any::type_name;
use std::cmp::Ordering;

use crate::foundation::{Validate, ValidationError};
use crate::number::{Bounded, Number, Representation};

/// Compares `value` against `max` and maps the outcome to a result.
fn check_max<T: Bounded>(max: &T, inclusive: bool, value: &T) -> Result<(), ValidationError> {
    let error = match value.compare_to(max) {
        Some(Ordering::Less) => return Ok(()),
        Some(Ordering::Equal) if inclusive => return Ok(()),
        Some(Ordering::Equal) => ValidationError::not_below_max(max, value),
        Some(Ordering::Greater) if inclusive => ValidationError::above_max(max, value),
        Some(Ordering::Greater) => ValidationError::not_below_max(max, value),
        None => ValidationError::not_comparable(max, value),
    };

    tracing::debug!(
        representation = %T::REPRESENTATION,
        max = %max,
        actual = %value,
        inclusive,
        "value rejected by maximum bound"
    );

    Err(error.with_param("representation", T::REPRESENTATION.as_str()))
}

// ============================================================================
// STATIC CHECKER
// ============================================================================

/// Validates that a value does not exceed a maximum.
///
/// With `inclusive` set the maximum itself passes; without it the value
/// must be strictly less.
///
/// # Examples
///
/// ```
/// use nebula_bounds::foundation::Validate;
/// use nebula_bounds::validators::{max, max_exclusive};
///
/// assert!(max(100).validate(&100).is_ok());
/// assert!(max(100).validate(&101).is_err());
///
/// assert!(max_exclusive(100).validate(&99).is_ok());
/// assert!(max_exclusive(100).validate(&100).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Max<T> {
    max: T,
    inclusive: bool,
}

impl<T: Bounded> Max<T> {
    /// Creates a checker for `max`.
    pub const fn new(max: T, inclusive: bool) -> Self {
        Self { max, inclusive }
    }

    /// Creates a checker that accepts `max` itself.
    pub const fn inclusive(max: T) -> Self {
        Self::new(max, true)
    }

    /// Creates a checker that rejects `max` itself.
    pub const fn exclusive(max: T) -> Self {
        Self::new(max, false)
    }

    /// The configured maximum.
    pub const fn max(&self) -> &T {
        &self.max
    }

    /// Whether the maximum itself is an allowed value.
    pub const fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    /// The representation shared by the maximum and checked values.
    pub const fn representation(&self) -> Representation {
        T::REPRESENTATION
    }

    /// Catch-all entry point for values with no comparison path.
    ///
    /// Always fails with an `unsupported_representation` error, whatever
    /// the maximum and inclusivity.
    pub fn reject_unsupported<U: ?Sized>(&self, _value: &U) -> Result<(), ValidationError> {
        reject::<U>(T::REPRESENTATION)
    }
}

impl<T: Bounded> Validate for Max<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        check_max(&self.max, self.inclusive, input)
    }
}

/// Creates an inclusive [`Max`] validator.
#[must_use]
pub const fn max<T: Bounded>(value: T) -> Max<T> {
    Max::inclusive(value)
}

/// Creates an exclusive [`Max`] validator.
#[must_use]
pub const fn max_exclusive<T: Bounded>(value: T) -> Max<T> {
    Max::exclusive(value)
}

fn reject<U: ?Sized>(expected: Representation) -> Result<(), ValidationError> {
    let actual = type_name::<U>();
    tracing::debug!(
        expected = %expected,
        actual,
        "value has no comparison path against maximum"
    );
    Err(ValidationError::unsupported_representation(
        expected.as_str(),
        actual,
    ))
}

// ============================================================================
// DYNAMIC CHECKER
// ============================================================================

/// Validates that a [`Number`] does not exceed a maximum of the same
/// representation.
///
/// # Examples
///
/// ```
/// use nebula_bounds::foundation::Validate;
/// use nebula_bounds::number::Number;
/// use nebula_bounds::validators::DynMax;
///
/// let validator = DynMax::new(100_i32, true);
/// assert!(validator.validate(&Number::Int32(100)).is_ok());
/// assert!(validator.validate(&Number::Int32(101)).is_err());
///
/// // Never coerced across representations.
/// let err = validator.validate(&Number::Int64(1)).unwrap_err();
/// assert!(err.is_unsupported_representation());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMax {
    max: Number,
    inclusive: bool,
}

impl DynMax {
    /// Creates a checker for `max`.
    pub fn new(max: impl Into<Number>, inclusive: bool) -> Self {
        Self {
            max: max.into(),
            inclusive,
        }
    }

    /// The configured maximum.
    pub const fn max(&self) -> &Number {
        &self.max
    }

    /// Whether the maximum itself is an allowed value.
    pub const fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    /// The representation every checked value must share.
    pub const fn representation(&self) -> Representation {
        self.max.representation()
    }

    /// Catch-all entry point for values with no comparison path.
    ///
    /// Always fails with an `unsupported_representation` error.
    pub fn reject_unsupported<U: ?Sized>(&self, _value: &U) -> Result<(), ValidationError> {
        reject::<U>(self.representation())
    }
}

impl Validate for DynMax {
    type Input = Number;

    fn validate(&self, input: &Number) -> Result<(), ValidationError> {
        let inclusive = self.inclusive;
        match (&self.max, input) {
            (Number::Int8(max), Number::Int8(v)) => check_max(max, inclusive, v),
            (Number::Int16(max), Number::Int16(v)) => check_max(max, inclusive, v),
            (Number::Int32(max), Number::Int32(v)) => check_max(max, inclusive, v),
            (Number::Int64(max), Number::Int64(v)) => check_max(max, inclusive, v),
            (Number::Float32(max), Number::Float32(v)) => check_max(max, inclusive, v),
            (Number::Float64(max), Number::Float64(v)) => check_max(max, inclusive, v),
            (Number::BigInteger(max), Number::BigInteger(v)) => check_max(max, inclusive, v),
            (Number::BigDecimal(max), Number::BigDecimal(v)) => check_max(max, inclusive, v),
            (max, other) => {
                tracing::debug!(
                    expected = %max.representation(),
                    actual = %other.representation(),
                    "representation mismatch against maximum"
                );
                Err(ValidationError::unsupported_representation(
                    max.representation().as_str(),
                    other.representation().as_str(),
                ))
            }
        }
    }
}

impl<T: Bounded + Into<Number>> From<Max<T>> for DynMax {
    fn from(validator: Max<T>) -> Self {
        Self::new(validator.max, validator.inclusive)
    }
}

// ============================================================================
// TESTS
// ============================================================================
