use bfh::{BfhConfig, EncodingMode};
use std::path::PathBuf;

use super::args::ModeArgs;
use super::global::GlobalArgs;

/// Loads the layered configuration, honoring `--config`.
pub fn load_config(global: &GlobalArgs) -> Result<BfhConfig, Box<dyn std::error::Error>> {
    let explicit = global
        .config
        .as_deref()
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()));

    BfhConfig::load_with_overrides(explicit.as_deref(), global.quiet)
}

/// Picks the mode from flags, falling back to the configured default.
pub fn resolve_mode(mode: &ModeArgs, config: &BfhConfig) -> EncodingMode {
    if mode.strict {
        EncodingMode::Strict
    } else if mode.padded {
        EncodingMode::Padded
    } else {
        config.default_mode()
    }
}

/// Size limit from `--max-size`, else from config.
pub fn max_size(global: &GlobalArgs, config: &BfhConfig) -> usize {
    global.max_size.unwrap_or_else(|| config.max_size())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(strict: bool, padded: bool) -> ModeArgs {
        ModeArgs { strict, padded }
    }

    #[test]
    fn test_resolve_mode_flags_win() {
        let config = BfhConfig::from_toml("[settings]\ndefault_mode = \"strict\"").unwrap();
        assert_eq!(resolve_mode(&mode(false, true), &config), EncodingMode::Padded);
        assert_eq!(resolve_mode(&mode(true, false), &config), EncodingMode::Strict);
        assert_eq!(resolve_mode(&mode(false, false), &config), EncodingMode::Strict);
    }

    #[test]
    fn test_resolve_mode_default() {
        let config = BfhConfig::default();
        assert_eq!(resolve_mode(&mode(false, false), &config), EncodingMode::Padded);
    }
}
