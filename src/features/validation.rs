//! Cheap validity checks that never decode.
//!
//! Each check pairs a layout pattern with the padding consistency rules from
//! [`PaddingRule`]. They answer yes or no only; use `decode` to learn why a
//! string is rejected.

use regex::Regex;
use std::sync::OnceLock;

use crate::core::alphabet::{BLOCK_SYMBOLS, SEPARATOR};
use crate::encoders::algorithms::padding::{PaddingRule, parse_indicator};

// Encodings never end in a separator; the canonical and strict patterns are
// matched against the input with one appended.
const WELL_FORMATTED_PATTERN: &str = r"^[0-4]-([0123456789abcdefghjkmnpqrstvwxyz]{4}-)*$";
const ACCEPTABLE_PATTERN: &str = r"^[0-4]([0123456789abcdefghjkmnpqrstvwxyz]{4})*$";
const STRICT_PATTERN: &str = r"^([0123456789abcdefghjkmnpqrstvwxyz]{4}-)*$";

static WELL_FORMATTED: OnceLock<Regex> = OnceLock::new();
static ACCEPTABLE: OnceLock<Regex> = OnceLock::new();
static STRICT: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid bfh layout pattern"))
}

/// Whether `encoded` can be decoded, ignoring where separators are placed.
pub fn is_acceptable(encoded: &str) -> bool {
    let stripped = strip_separators(encoded);

    if !compiled(&ACCEPTABLE, ACCEPTABLE_PATTERN).is_match(&stripped) {
        return false;
    }

    is_padding_consistent(&stripped)
}

/// Whether `encoded` has exactly the layout `encode` produces.
pub fn is_well_formatted(encoded: &str) -> bool {
    let terminated = format!("{}{}", encoded, SEPARATOR);

    if !compiled(&WELL_FORMATTED, WELL_FORMATTED_PATTERN).is_match(&terminated) {
        return false;
    }

    is_padding_consistent(&strip_separators(encoded))
}

/// Whether `encoded` has the strict layout: groups of four symbols joined by
/// separators and no padding indicator. The empty string is the strict
/// encoding of an empty buffer and passes.
pub fn is_strict(encoded: &str) -> bool {
    if encoded.is_empty() {
        return true;
    }

    let terminated = format!("{}{}", encoded, SEPARATOR);
    compiled(&STRICT, STRICT_PATTERN).is_match(&terminated)
}

fn strip_separators(encoded: &str) -> String {
    encoded.chars().filter(|&c| c != SEPARATOR).collect()
}

/// Checks a separator-free padded encoding against its padding indicator.
fn is_padding_consistent(stripped: &str) -> bool {
    let mut chars = stripped.chars();
    let Some(padding) = chars.next().and_then(|c| parse_indicator(c).ok()) else {
        return false;
    };
    let payload = chars.as_str();

    if payload.is_empty() {
        return padding == 0;
    }

    if payload.len() < BLOCK_SYMBOLS || payload.len() % BLOCK_SYMBOLS != 0 {
        return false;
    }

    PaddingRule::for_padding(padding).is_some_and(|rule| rule.matches(payload))
}
