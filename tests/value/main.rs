//! Integration tests for Layer 0: the value system
//!
//! Tests for Value kinds, container operations, map variants, and the
//! conversion layer.

mod maps;
