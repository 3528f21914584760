use crate::cli::{
    args::CheckArgs,
    commands::read_input,
    config::max_size,
    global::GlobalArgs,
};
use bfh::BfhConfig;
use serde::Serialize;
use std::process::ExitCode;

/// Validator results for one input.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct CheckReport<'a> {
    input: &'a str,
    acceptable: bool,
    well_formatted: bool,
    strict: bool,
}

impl<'a> CheckReport<'a> {
    fn new(encoded: &'a str) -> Self {
        CheckReport {
            input: encoded,
            acceptable: bfh::is_acceptable(encoded),
            well_formatted: bfh::is_well_formatted(encoded),
            strict: bfh::is_strict(encoded),
        }
    }

    /// Decodable in at least one mode. `strict` is a layout check only, so
    /// the strict arm has to run the decoder.
    fn is_decodable(&self) -> bool {
        self.acceptable || (self.strict && bfh::decode_strict(self.input).is_ok())
    }
}

/// Prints the report; exits with failure when the input is decodable in
/// neither mode.
pub fn handle(
    args: CheckArgs,
    global: &GlobalArgs,
    config: &BfhConfig,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let input = match args.input {
        Some(input) => input,
        None => {
            let bytes = read_input(None, global, max_size(global, config))?;
            String::from_utf8(bytes).map_err(|_| "Input must be valid UTF-8 for checking")?
        }
    };

    let encoded = input.trim();
    let report = CheckReport::new(encoded);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("acceptable:     {}", yes_no(report.acceptable));
        println!("well-formatted: {}", yes_no(report.well_formatted));
        println!("strict:         {}", yes_no(report.strict));
    }

    if report.is_decodable() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_padded() {
        let report = CheckReport::new("3-mw6g-0000");
        assert_eq!(
            report,
            CheckReport {
                input: "3-mw6g-0000",
                acceptable: true,
                well_formatted: true,
                strict: false,
            }
        );
        assert!(report.is_decodable());
    }

    #[test]
    fn test_report_strict() {
        let report = CheckReport::new("mw6g-0000");
        assert!(!report.acceptable);
        assert!(report.strict);
        assert!(report.is_decodable());
    }

    #[test]
    fn test_report_partial_strict_block() {
        for input in ["mw6g", "abcd-efgh-jkmn"] {
            let report = CheckReport::new(input);
            assert!(report.strict, "{}", input);
            assert!(!report.is_decodable(), "{}", input);
        }
    }

    #[test]
    fn test_report_garbage() {
        assert!(!CheckReport::new("hello world").is_decodable());
    }
}
