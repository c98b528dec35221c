//! # Contact Form Model
//!
//! Field definitions and the pure rules that decide whether a value is valid.

pub mod field;

pub use field::{FieldKind, FieldSpec};
