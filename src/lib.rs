//! # bfh
//!
//! Binary for humans: turns bytes into short groups of an unambiguous
//! 32-symbol alphabet and back.
//!
//! ```
//! let encoded = bfh::encode(&[167, 13]);
//! assert_eq!(encoded, "3-mw6g-0000");
//! assert_eq!(bfh::decode(&encoded).unwrap(), vec![167, 13]);
//! ```
//!
//! The leading symbol counts the zero bytes added to reach a whole 5-byte
//! block. Strict mode skips it for input that is already block-aligned:
//!
//! ```
//! let encoded = bfh::encode_strict(&[167, 13, 0, 0, 0]).unwrap();
//! assert_eq!(encoded, "mw6g-0000");
//! assert!(bfh::is_strict(&encoded));
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::alphabet::{Alphabet, DIGITS, SEPARATOR};
pub use crate::core::config::{BfhConfig, EncodingMode, Settings};
pub use encoders::algorithms::{DecodeError, EncodeError};
pub use encoders::padding::PaddingRule;
pub use features::{is_acceptable, is_strict, is_well_formatted};

/// Encodes binary data into a padded, human readable string.
///
/// The empty buffer encodes to `""`.
///
/// # Example
///
/// ```
/// assert_eq!(
///     bfh::encode(&[255, 32, 167, 0, 253, 17, 215, 43]),
///     "2-zwga-e07x-27bj-p000"
/// );
/// ```
pub fn encode(data: &[u8]) -> String {
    encoders::codec::encode(data)
}

/// Encodes binary data whose length is a multiple of 5, without a padding
/// indicator.
pub fn encode_strict(data: &[u8]) -> Result<String, EncodeError> {
    encoders::codec::encode_strict(data)
}

/// Decodes a padded string produced by [`encode`].
///
/// Separators are ignored wherever they appear.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    encoders::codec::decode(encoded)
}

/// Decodes a strict string produced by [`encode_strict`].
pub fn decode_strict(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    encoders::codec::decode_strict(encoded)
}

/// Encodes with the given mode.
pub fn encode_with(data: &[u8], mode: EncodingMode) -> Result<String, EncodeError> {
    match mode {
        EncodingMode::Padded => Ok(encode(data)),
        EncodingMode::Strict => encode_strict(data),
    }
}

/// Decodes with the given mode.
pub fn decode_with(encoded: &str, mode: EncodingMode) -> Result<Vec<u8>, DecodeError> {
    match mode {
        EncodingMode::Padded => decode(encoded),
        EncodingMode::Strict => decode_strict(encoded),
    }
}
