//! Error types for validation failures
//!
//! Every check returns the same structured [`ValidationError`]. Its `code`
//! classifies the failure (see [`ValidationErrorKind`]); `params` carry the
//! values involved so callers can render their own messages.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

/// Error code of a bound violation.
pub const MAX_CODE: &str = "max";

/// Error code of a representation the checker cannot compare.
pub const UNSUPPORTED_REPRESENTATION_CODE: &str = "unsupported_representation";

// ============================================================================
// ERROR KIND
// ============================================================================

/// Classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The value is above the maximum, equal to an exclusive maximum, or
    /// not comparable to it at all (NaN).
    ///
    /// This is a data problem; surface it to the user.
    BoundViolation,
    /// The value has no comparison path against the configured maximum.
    ///
    /// This is a usage error of the calling framework.
    UnsupportedRepresentation,
    /// Any other code, produced outside this crate.
    Other,
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use nebula_bounds::foundation::{ValidationError, ValidationErrorKind};
///
/// let error = ValidationError::new("max", "Value must be at most 10")
///     .with_param("max", "10")
///     .with_param("actual", "11");
///
/// assert_eq!(error.kind(), ValidationErrorKind::BoundViolation);
/// assert_eq!(error.param("actual"), Some("11"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Optional field path, set by the caller when validating objects.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 2-4).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Classifies this error by its code.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        match self.code.as_ref() {
            MAX_CODE => ValidationErrorKind::BoundViolation,
            UNSUPPORTED_REPRESENTATION_CODE => ValidationErrorKind::UnsupportedRepresentation,
            _ => ValidationErrorKind::Other,
        }
    }

    /// Returns true if the value was out of bounds.
    #[must_use]
    pub fn is_bound_violation(&self) -> bool {
        self.kind() == ValidationErrorKind::BoundViolation
    }

    /// Returns true if the value could not be compared at all.
    #[must_use]
    pub fn is_unsupported_representation(&self) -> bool {
        self.kind() == ValidationErrorKind::UnsupportedRepresentation
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "max" error for a value above an inclusive maximum.
    pub fn above_max(max: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::new(MAX_CODE, format!("Value must be at most {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
            .with_param("inclusive", "true")
    }

    /// Creates a "max" error for a value at or above an exclusive maximum.
    pub fn not_below_max(max: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::new(MAX_CODE, format!("Value must be less than {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
            .with_param("inclusive", "false")
    }

    /// Creates a "max" error for a value with no ordering against the maximum.
    pub fn not_comparable(max: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::new(MAX_CODE, format!("Value is not comparable to {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "unsupported_representation" error.
    pub fn unsupported_representation(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(
            UNSUPPORTED_REPRESENTATION_CODE,
            "Can't compare, unsupported numeric representation",
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }
}

// ============================================================================
// TESTS
// ============================================================================
