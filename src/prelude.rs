//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use bfh::prelude::*;
//!
//! let encoded = encode(b"hello");
//! assert!(is_well_formatted(&encoded));
//! assert_eq!(decode(&encoded).unwrap(), b"hello");
//! ```

pub use crate::{
    Alphabet,
    // Config
    BfhConfig,
    // Errors
    DecodeError,
    EncodeError,
    EncodingMode,

    // Core encoding/decoding
    decode,
    decode_strict,
    decode_with,
    encode,
    encode_strict,
    encode_with,

    // Validation
    is_acceptable,
    is_strict,
    is_well_formatted,
};
