//! Padding to whole 5-byte blocks and the leading padding indicator.
//!
//! Padded encodings start with one symbol `0`..`4` giving the number of zero
//! bytes appended before packing. Because those bytes are zero, the tail of a
//! valid encoding is predictable: `p` padding bytes are `8p` zero bits, which
//! cover `8p / 5` whole trailing symbols plus the low `8p % 5` bits of the
//! symbol before them. [`PaddingRule`] captures that layout per `p`.

use std::borrow::Cow;

use super::errors::DecodeError;
use crate::core::alphabet::{Alphabet, BITS_PER_SYMBOL, BLOCK_BYTES};

/// Largest padding a block can need.
pub const MAX_PADDING: usize = BLOCK_BYTES - 1;

/// Number of zero bytes needed to bring `len` to a multiple of 5.
pub fn padding_for(len: usize) -> usize {
    (BLOCK_BYTES - len % BLOCK_BYTES) % BLOCK_BYTES
}

/// Pads `data` with zero bytes to a whole number of blocks.
///
/// Borrows when no padding is required; the caller's buffer is never touched.
pub fn pad(data: &[u8]) -> (usize, Cow<'_, [u8]>) {
    let padding = padding_for(data.len());
    if padding == 0 {
        return (0, Cow::Borrowed(data));
    }

    let mut padded = Vec::with_capacity(data.len() + padding);
    padded.extend_from_slice(data);
    padded.resize(data.len() + padding, 0);
    (padding, Cow::Owned(padded))
}

/// Symbol written at the front of a padded encoding.
pub fn indicator_symbol(padding: usize) -> char {
    debug_assert!(padding <= MAX_PADDING);
    Alphabet::symbol_of(padding as u8)
}

/// Reads a padding indicator symbol.
pub fn parse_indicator(indicator: char) -> Result<usize, DecodeError> {
    match Alphabet::value_of(indicator) {
        Some(value) if value as usize <= MAX_PADDING => Ok(value as usize),
        _ => Err(DecodeError::PaddingOutOfRange { indicator }),
    }
}

/// Removes `padding` trailing bytes from freshly unpacked data.
///
/// The removed bytes must all be zero, otherwise the encoding was not
/// produced from padded input.
pub fn strip(mut data: Vec<u8>, padding: usize, indicator: char) -> Result<Vec<u8>, DecodeError> {
    if padding > data.len() {
        return Err(DecodeError::PaddingOutOfRange { indicator });
    }

    let keep = data.len() - padding;
    if data[keep..].iter().any(|&b| b != 0) {
        return Err(DecodeError::InvalidPadding);
    }

    data.truncate(keep);
    Ok(data)
}

/// Trailing-symbol layout forced by one padding amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingRule {
    padding: usize,
    zero_symbols: usize,
    boundary_bits: u32,
    /// Bit `v` is set when symbol value `v` may sit on the boundary.
    boundary_set: u32,
}

/// One rule per padding amount, indexed by padding.
static PADDING_RULES: [PaddingRule; BLOCK_BYTES] = [
    PaddingRule::derive(0),
    PaddingRule::derive(1),
    PaddingRule::derive(2),
    PaddingRule::derive(3),
    PaddingRule::derive(4),
];

impl PaddingRule {
    const fn derive(padding: usize) -> Self {
        let zero_bits = padding * 8;
        let boundary_bits = (zero_bits % BITS_PER_SYMBOL) as u32;
        let low_mask = (1u32 << boundary_bits) - 1;

        let mut boundary_set = 0u32;
        let mut value = 0u32;
        while value < Alphabet::base() as u32 {
            if value & low_mask == 0 {
                boundary_set |= 1 << value;
            }
            value += 1;
        }

        PaddingRule {
            padding,
            zero_symbols: zero_bits / BITS_PER_SYMBOL,
            boundary_bits,
            boundary_set,
        }
    }

    /// Rule for `padding` zero bytes, if `padding` is in range.
    pub fn for_padding(padding: usize) -> Option<&'static PaddingRule> {
        PADDING_RULES.get(padding)
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Trailing symbols that must be `0`.
    pub fn zero_symbols(&self) -> usize {
        self.zero_symbols
    }

    /// Low bits of the boundary symbol that must be zero.
    pub fn boundary_bits(&self) -> u32 {
        self.boundary_bits
    }

    /// Whether symbol value `value` may precede the zero run.
    pub fn allows_boundary(&self, value: u8) -> bool {
        value < 32 && self.boundary_set & (1 << value) != 0
    }

    /// The symbols allowed on the boundary, in alphabet order.
    pub fn boundary_symbols(&self) -> impl Iterator<Item = char> + '_ {
        (0..Alphabet::base() as u8)
            .filter(move |&value| self.allows_boundary(value))
            .map(Alphabet::symbol_of)
    }

    /// Checks the tail of a separator-free payload (indicator excluded).
    pub fn matches(&self, payload: &str) -> bool {
        let symbols = payload.as_bytes();
        if symbols.len() <= self.zero_symbols {
            return false;
        }

        let (head, zeros) = symbols.split_at(symbols.len() - self.zero_symbols);
        if zeros.iter().any(|&b| b != b'0') {
            return false;
        }

        head.last()
            .and_then(|&b| Alphabet::value_of(b as char))
            .is_some_and(|value| self.allows_boundary(value))
    }
}
