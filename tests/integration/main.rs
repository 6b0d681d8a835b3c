//! Cross-layer integration tests for lxson
//!
//! Tests that verify correct interaction between the value system and the
//! text format.

mod config;
mod scene;
