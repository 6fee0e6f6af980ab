//! Convert command implementation.

use roman_numeral::{Converter, Mode};
use std::io::{self, Read};
use tracing::debug;

use crate::errors::CliError;
use crate::output;

pub fn run(
    numerals: Vec<String>,
    file: Option<String>,
    json: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if strict { Mode::Strict } else { Mode::Permissive };
    let converter = Converter::new(mode);

    // Read numerals from arguments, file, or stdin
    let inputs = if let Some(path) = file {
        let contents = std::fs::read_to_string(&path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        })?;
        split_lines(&contents)
    } else if numerals.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(CliError::Stdin)?;
        split_lines(&buffer)
    } else {
        numerals
    };
    debug!(count = inputs.len(), ?mode, "converting numerals");

    let mut rejected = 0;
    for input in &inputs {
        match converter.convert(input) {
            Ok(report) => {
                if json {
                    println!("{}", output::format_json(&report)?);
                } else {
                    println!("{}", report.decimal());
                    if !report.errors.is_empty() {
                        eprintln!("{}", output::format_warning(&report));
                    }
                }
            }
            Err(e) => {
                rejected += 1;
                debug!(input = input.as_str(), error = %e, "numeral rejected");
                eprintln!("Error: {:?}: {}", input, e);
            }
        }
    }

    if rejected > 0 {
        return Err(CliError::StrictRejections {
            rejected,
            total: inputs.len(),
        }
        .into());
    }
    Ok(())
}

/// One numeral per line; empty lines are skipped, other whitespace is kept.
fn split_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
