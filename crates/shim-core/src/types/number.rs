//! Numeric argument representation.
//!
//! Proxy calls carry numbers as either integers or floats so both can be
//! handled uniformly without losing which one the caller supplied.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Number {
    /// Integer value (64-bit signed integer).
    Integer(i64),
    /// Floating-point value (64-bit float).
    Float(f64),
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shim_core::types::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_f64(), 42.0);
    /// assert_eq!(Number::Float(1.5).as_f64(), 1.5);
    /// ```
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Returns the integer value, if this number is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(_) => None,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
