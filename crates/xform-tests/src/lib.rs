//! Integration tests for xform crates.
//!
//! These tests check the conversions between modules against each other
//! and against glam, using seeded random inputs.
