use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    config::{max_size, resolve_mode},
    global::GlobalArgs,
};
use bfh::BfhConfig;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &BfhConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global, max_size(global, config))?;

    // Hex input is text; surrounding whitespace (trailing newline) is ignored
    let data = if args.hex {
        let text = String::from_utf8(input).map_err(|_| "Hex input must be valid UTF-8")?;
        hex::decode(text.trim()).map_err(|e| format!("Invalid hex input: {}", e))?
    } else {
        input
    };

    let encoded = bfh::encode_with(&data, resolve_mode(&args.mode, config))?;
    write_output(args.output.as_ref(), encoded.as_bytes(), true)?;
    Ok(())
}
