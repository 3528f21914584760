use super::errors::DecodeError;
use crate::core::alphabet::{
    Alphabet, BITS_PER_SYMBOL, BLOCK_BYTES, BLOCK_SYMBOLS, GROUP_SYMBOLS, SEPARATOR,
};

/// Keeps the bits of a byte from position `i` (MSB first) onwards.
const ENCODE_MASKS: [u8; 8] = [0xFF, 0x7F, 0x3F, 0x1F, 0x0F, 0x07, 0x03, 0x01];

/// Low bits of a symbol that spill into the next byte, by spill width - 1.
const DECODE_MASKS: [u8; 4] = [0x01, 0x03, 0x07, 0x0F];

/// Length of the grouped text produced by [`pack_into`] for `byte_len` bytes.
pub fn packed_len(byte_len: usize) -> usize {
    let symbols = byte_len * 8 / BITS_PER_SYMBOL;
    symbols + symbols.saturating_sub(1) / GROUP_SYMBOLS
}

/// Packs whole 5-byte blocks into symbols, appending them to `out`.
///
/// A separator follows every fourth symbol, except after the last one.
pub fn pack_into(data: &[u8], out: &mut String) {
    debug_assert!(data.len() % BLOCK_BYTES == 0);

    let total_bits = data.len() * 8;
    let mut bit_offset = 0;
    let mut emitted = 0;

    while bit_offset < total_bits {
        out.push(Alphabet::symbol_of(read_symbol(data, bit_offset)));
        bit_offset += BITS_PER_SYMBOL;
        emitted += 1;

        if emitted % GROUP_SYMBOLS == 0 && bit_offset < total_bits {
            out.push(SEPARATOR);
        }
    }
}

/// Reads the 5 bits starting at `bit_offset`, which may span two bytes.
fn read_symbol(data: &[u8], bit_offset: usize) -> u8 {
    let index = bit_offset / 8;
    let shift = bit_offset % 8;
    let current = data[index] & ENCODE_MASKS[shift];

    // Fits in the current byte
    if shift <= 8 - BITS_PER_SYMBOL {
        return current >> (8 - BITS_PER_SYMBOL - shift);
    }

    // Straddles: high bits from this byte, the rest from the top of the next
    let high = current << (shift + BITS_PER_SYMBOL - 8);
    let low = data.get(index + 1).map_or(0, |&next| next >> (16 - BITS_PER_SYMBOL - shift));
    high | low
}

/// Unpacks separator-free symbols into bytes.
///
/// `symbols` pairs each symbol with its character position in `input`, which
/// is only used for error reporting. The symbol count must be a whole number
/// of 8-symbol blocks.
pub fn unpack(symbols: &[(usize, char)], input: &str) -> Result<Vec<u8>, DecodeError> {
    if symbols.len() % BLOCK_SYMBOLS != 0 {
        return Err(DecodeError::InvalidLength {
            actual: symbols.len(),
        });
    }

    let mut data = vec![0u8; symbols.len() * BITS_PER_SYMBOL / 8];
    let mut bit_offset = 0;

    for &(position, c) in symbols {
        let value = Alphabet::value_of(c)
            .ok_or_else(|| DecodeError::invalid_character(c, position, input))?;

        let index = bit_offset / 8;
        let (first, second) = split_symbol(value, bit_offset % 8);

        data[index] |= first;
        if second != 0
            && let Some(next) = data.get_mut(index + 1)
        {
            *next |= second;
        }

        bit_offset += BITS_PER_SYMBOL;
    }

    Ok(data)
}

/// Splits a symbol value into the part landing in the current byte and the
/// part spilling into the next one.
fn split_symbol(value: u8, shift: usize) -> (u8, u8) {
    if shift <= 8 - BITS_PER_SYMBOL {
        return (value << (8 - BITS_PER_SYMBOL - shift), 0);
    }

    let spill = shift + BITS_PER_SYMBOL - 8;
    (
        value >> spill,
        (value & DECODE_MASKS[spill - 1]) << (8 - spill),
    )
}
