//! Built-in validators

pub mod max;

pub use max::{DynMax, Max, max, max_exclusive};
