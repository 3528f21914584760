use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::global::GlobalArgs;

/// Reads all input from `file` or stdin, enforcing the size limit.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
    max_size: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size before reading
        if max_size > 0 {
            let file_size = fs::metadata(file_path)?.len();
            check_size(file_size, max_size, global)?;
        }

        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    // Check stdin size after reading
    if max_size > 0 {
        check_size(buffer.len() as u64, max_size, global)?;
    }

    Ok(buffer)
}

fn check_size(
    size: u64,
    max_size: usize,
    global: &GlobalArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if size <= max_size as u64 {
        return Ok(());
    }

    if !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            size, max_size
        )
        .into());
    }

    if !global.quiet {
        eprintln!(
            "Warning: Processing large input ({} bytes, limit: {} bytes)",
            size, max_size
        );
    }
    Ok(())
}

/// Writes `data` to `output`, or to stdout with a trailing newline when
/// `line` is set.
pub fn write_output(output: Option<&PathBuf>, data: &[u8], line: bool) -> io::Result<()> {
    if let Some(output_path) = output {
        return fs::write(output_path, data);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(data)?;
    if line {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}
