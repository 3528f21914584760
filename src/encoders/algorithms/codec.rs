use super::errors::{DecodeError, EncodeError};
use super::{packing, padding};
use crate::core::alphabet::{BLOCK_BYTES, SEPARATOR};
use crate::features::validation::is_strict;

/// Encodes arbitrary bytes, prefixed with the padding indicator.
///
/// An empty buffer encodes to the empty string rather than `"0-"`; decoding
/// still accepts `"0-"` as an empty buffer.
pub fn encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let (padding, padded) = padding::pad(data);
    let mut result = String::with_capacity(2 + packing::packed_len(padded.len()));
    result.push(padding::indicator_symbol(padding));
    result.push(SEPARATOR);
    packing::pack_into(&padded, &mut result);
    result
}

/// Encodes bytes whose length is already a multiple of 5, without a padding
/// indicator.
pub fn encode_strict(data: &[u8]) -> Result<String, EncodeError> {
    if data.len() % BLOCK_BYTES != 0 {
        return Err(EncodeError::LengthNotMultipleOf5 { actual: data.len() });
    }

    let mut result = String::with_capacity(packing::packed_len(data.len()));
    packing::pack_into(data, &mut result);
    Ok(result)
}

/// Decodes a padded encoding. Separators may appear anywhere and are ignored.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let symbols = strip_separators(encoded);
    let Some((&(_, indicator), payload)) = symbols.split_first() else {
        return Err(DecodeError::EmptyInput);
    };

    let pad = padding::parse_indicator(indicator)?;
    let data = packing::unpack(payload, encoded)?;
    padding::strip(data, pad, indicator)
}

/// Decodes a strict encoding, which must be groups of four symbols joined by
/// separators.
pub fn decode_strict(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    if !is_strict(encoded) {
        return Err(DecodeError::StrictFormatInvalid);
    }

    packing::unpack(&strip_separators(encoded), encoded)
}

/// Symbols of `encoded` with their character positions, separators removed.
fn strip_separators(encoded: &str) -> Vec<(usize, char)> {
    encoded
        .chars()
        .enumerate()
        .filter(|&(_, c)| c != SEPARATOR)
        .collect()
}
