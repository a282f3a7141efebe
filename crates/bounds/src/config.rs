//! Serde-backed configuration for [`DynMax`]
//!
//! ```json
//! { "representation": "int32", "maximum": 100, "inclusive": true }
//! ```
//!
//! `maximum` may be a JSON number or a string. Strings are parsed exactly in
//! the declared representation. JSON numbers with a fraction or exponent, or
//! beyond 64-bit integers, are held as `f64` by `serde_json`, so
//! `big_integer` and `big_decimal` refuse them; give those bounds as strings.

use serde::{Deserialize, Serialize};

use crate::number::{Number, ParseNumberError, Representation};
use crate::validators::DynMax;

/// Errors raised while turning configuration into a validator.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or misses required keys.
    #[error("invalid max bound configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The maximum is not a literal of the declared representation.
    #[error("invalid maximum: {0}")]
    InvalidMaximum(#[from] ParseNumberError),

    /// The maximum was written as a JSON number that `serde_json` already
    /// rounded to `f64`, so an arbitrary-precision bound would be inexact.
    #[error("{representation} maximum {maximum} must be given as a string to stay exact")]
    InexactMaximum {
        /// The declared representation.
        representation: Representation,
        /// The rounded number as received.
        maximum: serde_json::Number,
    },

    /// The maximum is NaN, which no value can be compared against.
    #[error("{representation} maximum is NaN and cannot bound any value")]
    NotComparable {
        /// The declared representation.
        representation: Representation,
    },
}

/// A maximum as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMaximum {
    /// Exact textual form.
    Text(String),
    /// Plain JSON number.
    Number(serde_json::Number),
}

impl RawMaximum {
    /// Textual form to parse in `representation`.
    ///
    /// Integers that fit 64 bits arrive exact; anything else in the
    /// `Number` arm has been through `f64` and is refused for the
    /// arbitrary-precision representations.
    fn to_text(&self, representation: Representation) -> Result<String, ConfigError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Number(number)
                if representation.is_arbitrary_precision() && number.is_f64() =>
            {
                Err(ConfigError::InexactMaximum {
                    representation,
                    maximum: number.clone(),
                })
            }
            Self::Number(number) => Ok(number.to_string()),
        }
    }
}

/// Declarative description of a max bound check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxConfig {
    /// Representation of the maximum and of every checked value.
    pub representation: Representation,
    /// The upper bound.
    pub maximum: RawMaximum,
    /// Whether the maximum itself passes. Defaults to `false`.
    #[serde(default)]
    pub inclusive: bool,
}

impl MaxConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the validator this configuration describes.
    pub fn build(&self) -> Result<DynMax, ConfigError> {
        let text = self.maximum.to_text(self.representation)?;
        let max = Number::parse(self.representation, &text)?;
        if max.is_nan() {
            return Err(ConfigError::NotComparable {
                representation: self.representation,
            });
        }

        tracing::debug!(
            representation = %self.representation,
            max = %max,
            inclusive = self.inclusive,
            "built max bound validator"
        );

        Ok(DynMax::new(max, self.inclusive))
    }
}

impl From<&DynMax> for MaxConfig {
    fn from(validator: &DynMax) -> Self {
        Self {
            representation: validator.representation(),
            maximum: RawMaximum::Text(validator.max().to_string()),
            inclusive: validator.is_inclusive(),
        }
    }
}

impl TryFrom<MaxConfig> for DynMax {
    type Error = ConfigError;

    fn try_from(config: MaxConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}
