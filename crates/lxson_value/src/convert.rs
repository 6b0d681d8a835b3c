//! The extensible conversion contract between [`Value`] and native types.
//!
//! Downstream code adds conversions for its own types by implementing
//! [`FromValue`]; [`Value::convert`] and [`Value::query`] then pick the
//! implementation up by type inference. The implementations here cover the
//! scalar primitives plus a small vector shape as the model for aggregate
//! conversions.

use crate::error::Error;
use crate::value::Value;
use crate::Result;

/// Conversion from a borrowed [`Value`] into a native type.
pub trait FromValue: Sized {
    /// Converts `value` into `Self`.
    ///
    /// # Errors
    /// Returns a type error when `value`'s current kind does not convert.
    fn from_value(value: &Value) -> Result<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_bool()
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_int()
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_float()
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_string()
    }
}

impl FromValue for [f64; 3] {
    fn from_value(value: &Value) -> Result<Self> {
        if !value.is_array() || value.size()? != 3 {
            return Err(Error::wrong_kind(
                "conversion to a 3-float vector",
                value.kind(),
            ));
        }
        Ok([
            value.at(0)?.as_float()?,
            value.at(1)?.as_float()?,
            value.at(2)?.as_float()?,
        ])
    }
}

impl FromValue for (f64, f64, f64) {
    fn from_value(value: &Value) -> Result<Self> {
        let [x, y, z] = <[f64; 3]>::from_value(value)?;
        Ok((x, y, z))
    }
}
