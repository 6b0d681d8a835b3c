//! Dynamic tagged values and schema-validated maps for LxSON data.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value handle used for all interchange data
//! - [`Kind`] - Kind descriptors for dispatch and error reporting
//! - [`OrderedMap`] / [`DecoratedMap`] - The ordered and schema-validated map variants
//! - [`FromValue`] - The extensible value-to-native conversion contract
//! - [`Error`] - Rich error types carrying parse and validation context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod error;
pub mod iter;
pub mod kind;
pub mod map;
pub mod validate;
pub mod value;

pub use convert::FromValue;
pub use error::{Error, ErrorKind, ParseDetail};
pub use iter::{IterEntry, ValueIter};
pub use kind::Kind;
pub use map::{DecoratedMap, Flags, OrderedMap};
pub use validate::{
    Validator, validate_bool, validate_int_range, validate_readonly, validate_string,
};
pub use value::{Value, ValueMut};

/// Result alias used throughout the value system.
pub type Result<T> = std::result::Result<T, Error>;
