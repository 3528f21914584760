use std::fmt;

use crate::core::alphabet::DIGITS;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input string is empty
    EmptyInput,
    /// The leading padding indicator is not one of `0`..`4`, or claims more
    /// padding than the payload holds
    PaddingOutOfRange { indicator: char },
    /// The payload is not a whole number of 8-symbol blocks
    InvalidLength { actual: usize },
    /// The input contains a character not in the alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
    },
    /// The bytes covered by the padding indicator are not zero
    InvalidPadding,
    /// The input is not in strict-mode layout
    StrictFormatInvalid,
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, should_use_color())
    }
}

impl DecodeError {
    fn render<W: fmt::Write>(&self, f: &mut W, use_color: bool) -> fmt::Result {
        match self {
            DecodeError::EmptyInput => write_header(f, use_color, "cannot decode empty input"),
            DecodeError::PaddingOutOfRange { indicator } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid padding indicator '{}'", indicator),
                )?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "non empty input must start with 0, 1, 2, 3 or 4",
                )
            }
            DecodeError::InvalidLength { actual } => {
                write_header(f, use_color, "invalid length for decode")?;
                writeln!(f)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  payload is {} symbols, expected a multiple of 8",
                    actual
                )?;
                writeln!(f)?;
                write_hint(f, use_color, "check for missing or extra characters")
            }
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid character '{}' at position {}", c, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;

                // Show input with caret pointing at error position
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(*position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;
                write_hint(f, use_color, &format!("valid characters: {}", DIGITS))
            }
            DecodeError::InvalidPadding => {
                write_header(f, use_color, "invalid padding")?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "the trailing symbols do not match the padding indicator",
                )
            }
            DecodeError::StrictFormatInvalid => {
                write_header(f, use_color, "invalid encoded string for strict mode")?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "strict input is groups of 4 symbols joined by '-', without a padding indicator",
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Strict encoding needs whole 5-byte blocks
    LengthNotMultipleOf5 { actual: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, should_use_color())
    }
}

impl EncodeError {
    fn render<W: fmt::Write>(&self, f: &mut W, use_color: bool) -> fmt::Result {
        match self {
            EncodeError::LengthNotMultipleOf5 { actual } => {
                write_header(f, use_color, "invalid length for strict encoding")?;
                writeln!(f)?;
                writeln!(f)?;
                writeln!(f, "  input is {} bytes, expected a multiple of 5", actual)?;
                writeln!(f)?;
                write_hint(f, use_color, "use padded encoding for arbitrary lengths")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

fn write_header<W: fmt::Write>(f: &mut W, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint<W: fmt::Write>(f: &mut W, use_color: bool, hint: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(err: &DecodeError) -> String {
        let mut out = String::new();
        err.render(&mut out, false).unwrap();
        out
    }

    #[test]
    fn test_invalid_character_display() {
        let err = DecodeError::invalid_character('u', 6, "0-mw6u-0000");
        let display = plain(&err);

        assert!(display.contains("invalid character 'u' at position 6"));
        assert!(display.contains("0-mw6u-0000"));
        assert!(display.contains("      ^"));
        assert!(display.contains("hint: valid characters: 0123456789abcdefghjkmnpqrstvwxyz"));
    }

    #[test]
    fn test_invalid_character_truncates_long_input() {
        let input = "0".repeat(100);
        match DecodeError::invalid_character('!', 80, &input) {
            DecodeError::InvalidCharacter { input, .. } => {
                assert_eq!(input.len(), 63);
                assert!(input.ends_with("..."));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_invalid_length_display() {
        let display = plain(&DecodeError::InvalidLength { actual: 12 });

        assert!(display.contains("invalid length"));
        assert!(display.contains("12 symbols"));
        assert!(display.contains("multiple of 8"));
    }

    #[test]
    fn test_padding_out_of_range_display() {
        let display = plain(&DecodeError::PaddingOutOfRange { indicator: '7' });

        assert!(display.contains("invalid padding indicator '7'"));
        assert!(display.contains("0, 1, 2, 3 or 4"));
    }

    #[test]
    fn test_encode_error_display() {
        let mut display = String::new();
        EncodeError::LengthNotMultipleOf5 { actual: 7 }
            .render(&mut display, false)
            .unwrap();

        assert!(display.contains("strict encoding"));
        assert!(display.contains("7 bytes"));
        assert!(display.contains("multiple of 5"));
    }

    #[test]
    fn test_color_only_when_requested() {
        let err = DecodeError::invalid_character('u', 6, "0-mw6u-0000");
        assert!(!plain(&err).contains('\x1b'));

        let mut colored = String::new();
        err.render(&mut colored, true).unwrap();
        assert!(colored.contains("\x1b[1;31merror:\x1b[0m"));
        assert!(colored.contains("\x1b[1;36mhint:\x1b[0m"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(DecodeError::EmptyInput, DecodeError::EmptyInput);
        assert_ne!(DecodeError::InvalidPadding, DecodeError::StrictFormatInvalid);
    }
}
