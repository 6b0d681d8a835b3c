//! Validator callbacks for decorated-map keys.
//!
//! A validator inspects a candidate value and returns the value to store,
//! which may be a normalized form of the input, or `None` to reject the
//! write. The factories here cover the common cases; consumers can supply
//! any closure with the same shape.

use crate::value::Value;
use std::rc::Rc;

/// Callback run against every write to a registered decorated-map key.
///
/// Returns `Some` with the value to store (possibly normalized) to accept
/// the write, or `None` to reject it.
pub type Validator = Rc<dyn Fn(&Value) -> Option<Value>>;

/// Returns a validator that rejects every write.
#[must_use]
pub fn validate_readonly() -> Validator {
    Rc::new(|_| None)
}

/// Returns a validator that accepts only boolean values.
#[must_use]
pub fn validate_bool() -> Validator {
    Rc::new(|value| {
        if value.is_bool() {
            Some(value.clone())
        } else {
            None
        }
    })
}

/// Returns a validator that accepts only string values.
#[must_use]
pub fn validate_string() -> Validator {
    Rc::new(|value| {
        if value.is_string() {
            Some(value.clone())
        } else {
            None
        }
    })
}

/// Returns a validator that accepts only integers within `min..=max`.
#[must_use]
pub fn validate_int_range(min: i64, max: i64) -> Validator {
    Rc::new(move |value| match value.as_int() {
        Ok(n) if (min..=max).contains(&n) => Some(value.clone()),
        _ => None,
    })
}
