//! Numeric representations a bound can be expressed in
//!
//! [`Bounded`] is the static view (one Rust type per representation) and
//! [`Number`] is the runtime view (a tagged union over the same eight
//! types). Both compare exactly; nothing here ever converts between
//! representations.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use serde::{Deserialize, Serialize};

// ============================================================================
// REPRESENTATION
// ============================================================================

/// The numeric encoding shared by a maximum and the values checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// `i8`
    Int8,
    /// `i16`
    Int16,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
    /// [`BigInt`]
    BigInteger,
    /// [`BigDecimal`]
    BigDecimal,
}

impl Representation {
    /// All supported representations.
    pub const ALL: [Self; 8] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::BigInteger,
        Self::BigDecimal,
    ];

    /// Stable lowercase name, as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::BigInteger => "big_integer",
            Self::BigDecimal => "big_decimal",
        }
    }

    /// Returns true for the arbitrary-precision representations.
    #[must_use]
    pub const fn is_arbitrary_precision(self) -> bool {
        matches!(self, Self::BigInteger | Self::BigDecimal)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// BOUNDED
// ============================================================================

mod private {
    pub trait Sealed {}
}

/// A native numeric type with a dedicated comparison path.
///
/// Sealed: implemented for `i8`, `i16`, `i32`, `i64`, `f32`, `f64`,
/// [`BigInt`] and [`BigDecimal`] only.
pub trait Bounded: private::Sealed + fmt::Debug + fmt::Display {
    /// The representation this type encodes.
    const REPRESENTATION: Representation;

    /// Compares `self` against `max`.
    ///
    /// Returns `None` only when the pair is unordered (NaN).
    fn compare_to(&self, max: &Self) -> Option<Ordering>;
}

macro_rules! impl_bounded {
    (total: $($ty:ty => $repr:ident),+ $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Bounded for $ty {
            const REPRESENTATION: Representation = Representation::$repr;

            #[inline]
            fn compare_to(&self, max: &Self) -> Option<Ordering> {
                Some(self.cmp(max))
            }
        }
    )+};
    (float: $($ty:ty => $repr:ident),+ $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Bounded for $ty {
            const REPRESENTATION: Representation = Representation::$repr;

            /// IEEE total order, so `-0.0 < 0.0`; NaN on either side is
            /// unordered.
            #[inline]
            fn compare_to(&self, max: &Self) -> Option<Ordering> {
                if self.is_nan() || max.is_nan() {
                    return None;
                }
                Some(self.total_cmp(max))
            }
        }
    )+};
}

impl_bounded!(total:
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    BigInt => BigInteger,
    BigDecimal => BigDecimal,
);

impl_bounded!(float:
    f32 => Float32,
    f64 => Float64,
);

// ============================================================================
// NUMBER
// ============================================================================

/// A value tagged with its representation.
///
/// # Examples
///
/// ```
/// use nebula_bounds::number::{Number, Representation};
///
/// let n = Number::parse(Representation::Int16, "-300").unwrap();
/// assert_eq!(n, Number::Int16(-300));
/// assert_eq!(n.representation(), Representation::Int16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    BigInteger(BigInt),
    BigDecimal(BigDecimal),
}

impl Number {
    /// Returns the representation tag.
    #[must_use]
    pub const fn representation(&self) -> Representation {
        match self {
            Self::Int8(_) => Representation::Int8,
            Self::Int16(_) => Representation::Int16,
            Self::Int32(_) => Representation::Int32,
            Self::Int64(_) => Representation::Int64,
            Self::Float32(_) => Representation::Float32,
            Self::Float64(_) => Representation::Float64,
            Self::BigInteger(_) => Representation::BigInteger,
            Self::BigDecimal(_) => Representation::BigDecimal,
        }
    }

    /// Returns true if this is a floating-point NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        match self {
            Self::Float32(v) => v.is_nan(),
            Self::Float64(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Parses `text` exactly in the given representation.
    ///
    /// Surrounding whitespace is ignored. Integer literals that do not fit
    /// the width are rejected rather than truncated.
    pub fn parse(representation: Representation, text: &str) -> Result<Self, ParseNumberError> {
        let trimmed = text.trim();
        let invalid = || ParseNumberError {
            representation,
            input: text.to_owned(),
        };

        let number = match representation {
            Representation::Int8 => Self::Int8(trimmed.parse().map_err(|_| invalid())?),
            Representation::Int16 => Self::Int16(trimmed.parse().map_err(|_| invalid())?),
            Representation::Int32 => Self::Int32(trimmed.parse().map_err(|_| invalid())?),
            Representation::Int64 => Self::Int64(trimmed.parse().map_err(|_| invalid())?),
            Representation::Float32 => Self::Float32(trimmed.parse().map_err(|_| invalid())?),
            Representation::Float64 => Self::Float64(trimmed.parse().map_err(|_| invalid())?),
            Representation::BigInteger => {
                Self::BigInteger(BigInt::from_str(trimmed).map_err(|_| invalid())?)
            }
            Representation::BigDecimal => {
                Self::BigDecimal(BigDecimal::from_str(trimmed).map_err(|_| invalid())?)
            }
        };

        Ok(number)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int8(v) => fmt::Display::fmt(v, f),
            Self::Int16(v) => fmt::Display::fmt(v, f),
            Self::Int32(v) => fmt::Display::fmt(v, f),
            Self::Int64(v) => fmt::Display::fmt(v, f),
            Self::Float32(v) => fmt::Display::fmt(v, f),
            Self::Float64(v) => fmt::Display::fmt(v, f),
            Self::BigInteger(v) => fmt::Display::fmt(v, f),
            Self::BigDecimal(v) => fmt::Display::fmt(v, f),
        }
    }
}

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl From<$ty> for Number {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }
    )+};
}

impl_from_native!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    BigInt => BigInteger,
    BigDecimal => BigDecimal,
);

/// Text that is not a valid literal of the requested representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {representation} literal: {input:?}")]
pub struct ParseNumberError {
    /// The representation parsing was attempted in.
    pub representation: Representation,
    /// The rejected text.
    pub input: String,
}

// ============================================================================
// TESTS
// ============================================================================
