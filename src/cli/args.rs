use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode binary data
    Encode(EncodeArgs),
    /// Decode an encoded string
    Decode(DecodeArgs),
    /// Check whether a string is acceptable, well-formatted or strict
    Check(CheckArgs),
    /// Show effective configuration
    Config(ConfigArgs),
}

/// Mode selection shared by encode and decode
#[derive(Args, Debug)]
pub struct ModeArgs {
    /// Strict mode: no padding indicator, input must be whole 5-byte blocks
    #[arg(long, conflicts_with = "padded")]
    pub strict: bool,

    /// Padded mode: leading padding indicator, any input length
    #[arg(long)]
    pub padded: bool,
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Read input as hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Write decoded bytes as hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for checking an encoded string
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// String to check (reads from stdin if not provided)
    pub input: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for showing configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
