//! # nebula-bounds
//!
//! Upper-bound checks for numeric input, across fixed-width integers,
//! floating point, and arbitrary-precision integers and decimals.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_bounds::prelude::*;
//!
//! let retries = max(5_i32);
//! assert!(retries.validate(&5).is_ok());
//! assert!(retries.validate(&6).unwrap_err().is_bound_violation());
//!
//! let ratio = max_exclusive(1.0_f64);
//! assert!(ratio.validate(&0.99).is_ok());
//! assert!(ratio.validate(&1.0).is_err());
//! ```
//!
//! ## Runtime representations
//!
//! When the representation is only known at runtime, use
//! [`DynMax`](validators::DynMax), either directly or through
//! [`MaxConfig`](config::MaxConfig):
//!
//! ```rust
//! use nebula_bounds::prelude::*;
//!
//! let validator = MaxConfig::from_json_str(
//!     r#"{"representation": "big_integer", "maximum": "1000000000000000000000000000000", "inclusive": true}"#,
//! )?
//! .build()?;
//!
//! let over = Number::parse(Representation::BigInteger, "1000000000000000000000000000001")?;
//! assert!(validator.validate(&over).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Failure kinds
//!
//! Every check returns [`ValidationError`](foundation::ValidationError):
//!
//! - `BoundViolation` (code `max`): above the maximum, equal to an exclusive
//!   maximum, or NaN.
//! - `UnsupportedRepresentation` (code `unsupported_representation`): the
//!   value has no comparison path against the configured maximum.

pub mod config;
pub mod foundation;
pub mod number;
pub mod prelude;
pub mod validators;

/// Re-exported so callers can build arbitrary-precision bounds without a
/// direct dependency.
pub use bigdecimal::BigDecimal;
pub use bigdecimal::num_bigint::BigInt;
