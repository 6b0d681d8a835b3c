//! LxSON - Dynamic tagged values and a permissive data-interchange format
//!
//! This crate re-exports both layers of the LxSON system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: lxson_text   - LxSON parser, canonical writer, diagnostics
//! Layer 0: lxson_value  - Value, Kind, map variants, validators, conversion
//! ```

pub use lxson_text as text;
pub use lxson_value as value;
