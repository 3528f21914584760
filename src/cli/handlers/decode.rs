use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    config::{max_size, resolve_mode},
    global::GlobalArgs,
};
use bfh::BfhConfig;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &BfhConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global, max_size(global, config))?;
    let text = String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;

    let data = bfh::decode_with(text.trim(), resolve_mode(&args.mode, config))?;

    if args.hex {
        write_output(args.output.as_ref(), hex::encode(&data).as_bytes(), true)?;
    } else {
        write_output(args.output.as_ref(), &data, false)?;
    }
    Ok(())
}
