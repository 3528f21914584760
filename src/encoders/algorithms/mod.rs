pub mod codec;
pub mod errors;
pub mod packing;
pub mod padding;

// Re-export error types for public API
pub use errors::{DecodeError, EncodeError};
