use crate::cli::{args::ConfigArgs, config::max_size, global::GlobalArgs};
use bfh::{BfhConfig, DIGITS, SEPARATOR};

pub fn handle(
    args: ConfigArgs,
    global: &GlobalArgs,
    config: &BfhConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = config.default_mode();
    let limit = max_size(global, config);

    if args.json {
        let output = serde_json::json!({
            "default_mode": mode,
            "max_size": limit,
            "alphabet": DIGITS,
            "separator": SEPARATOR.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Default mode: {}", mode.as_str());
    if limit == 0 {
        println!("Max size:     unlimited");
    } else {
        println!("Max size:     {} bytes", limit);
    }
    println!("Alphabet:     {}", DIGITS);
    println!("Separator:    {}", SEPARATOR);
    Ok(())
}
