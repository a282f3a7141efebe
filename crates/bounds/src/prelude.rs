//! Common imports
//!
//! ```rust
//! use nebula_bounds::prelude::*;
//!
//! assert!(max(10_i16).validate(&10).is_ok());
//! ```

pub use crate::config::{ConfigError, MaxConfig, RawMaximum};
pub use crate::foundation::{Validate, ValidationError, ValidationErrorKind};
pub use crate::number::{Bounded, Number, ParseNumberError, Representation};
pub use crate::validators::{DynMax, Max, max, max_exclusive};
pub use crate::{BigDecimal, BigInt};
