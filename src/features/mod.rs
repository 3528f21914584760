//! Checks layered on top of the codec.
//!
//! The validators answer whether a string could be decoded, or has the
//! canonical layout, without running the decoder.

pub mod validation;

pub use validation::{is_acceptable, is_strict, is_well_formatted};
