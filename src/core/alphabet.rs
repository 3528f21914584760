/// The 32 symbols, ordered by the 5-bit value they stand for.
///
/// Lowercase only; `i`, `l`, `o` and `u` are left out so no two symbols are
/// easy to confuse when read aloud or written down.
pub const DIGITS: &str = "0123456789abcdefghjkmnpqrstvwxyz";

/// Grouping character inserted every [`GROUP_SYMBOLS`] symbols.
pub const SEPARATOR: char = '-';

/// Symbols between two separators.
pub const GROUP_SYMBOLS: usize = 4;

/// Bits carried by a single symbol.
pub const BITS_PER_SYMBOL: usize = 5;

/// Bytes in one packing block: the smallest byte count whose bit length
/// divides evenly into symbols (lcm(5, 8) / 8).
pub const BLOCK_BYTES: usize = 5;

/// Symbols in one packing block (lcm(5, 8) / 5).
pub const BLOCK_SYMBOLS: usize = 8;

const SYMBOLS: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";
const INVALID: u8 = 0xFF;

static DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < SYMBOLS.len() {
        table[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// The fixed bfh alphabet.
///
/// Both directions are plain table lookups; the inverse table is computed at
/// compile time, so there is nothing to initialize and nothing to race on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alphabet;

impl Alphabet {
    /// Number of symbols.
    pub const fn base() -> usize {
        SYMBOLS.len()
    }

    /// Returns the symbol for a 5-bit value. Only the low five bits of
    /// `value` are used.
    pub const fn symbol_of(value: u8) -> char {
        SYMBOLS[(value & 0x1F) as usize] as char
    }

    /// Returns the 5-bit value of `c`, or `None` if `c` is not a symbol.
    pub fn value_of(c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match DECODE_TABLE[c as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    /// Whether `c` belongs to the alphabet.
    pub fn contains(c: char) -> bool {
        Self::value_of(c).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_match_table() {
        assert_eq!(DIGITS.as_bytes(), SYMBOLS);
        assert_eq!(Alphabet::base(), 32);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for c in DIGITS.chars() {
            assert!(seen.insert(c), "duplicate symbol {}", c);
        }
    }

    #[test]
    fn test_bijection() {
        for value in 0..32u8 {
            let c = Alphabet::symbol_of(value);
            assert_eq!(Alphabet::value_of(c), Some(value));
        }
    }

    #[test]
    fn test_confusable_letters_excluded() {
        for c in ['i', 'l', 'o', 'u', 'I', 'L', 'O', 'U'] {
            assert_eq!(Alphabet::value_of(c), None);
        }
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert_eq!(Alphabet::value_of('-'), None);
        assert_eq!(Alphabet::value_of('A'), None);
        assert_eq!(Alphabet::value_of('é'), None);
        assert_eq!(Alphabet::value_of('\u{7F}'), None);
        assert!(!Alphabet::contains(' '));
    }

    #[test]
    fn test_block_constants() {
        assert_eq!(BLOCK_BYTES * 8, BLOCK_SYMBOLS * BITS_PER_SYMBOL);
        assert_eq!(1 << BITS_PER_SYMBOL, Alphabet::base());
    }
}
