//! LxSON text format support for the `lxson` value system.
//!
//! This crate provides:
//! - [`parse`] / [`parse_named`] - Parsing LxSON text into [`Value`] trees
//! - [`Parser`] - The underlying single-use parser carrying source context
//! - [`to_lxson`] - The canonical, re-parseable text rendering of a value tree
//! - [`format_tabbed`] - An indentation-based rendering for diagnostics
//!
//! LxSON is a permissive JSON relative: strings may be single- or
//! double-quoted (no escape sequences), map keys may be unquoted
//! identifiers, and `name { ... }` is shorthand for `["name", { ... }]`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cursor;
pub mod parser;
pub mod writer;

pub use lxson_value::{Error, ErrorKind, ParseDetail, Result, Value};
pub use parser::{Parser, parse, parse_named};
pub use writer::{format_tabbed, to_lxson};
