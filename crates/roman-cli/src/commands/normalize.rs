//! Normalize command implementation.

use roman_numeral::normalize;
use serde_json::json;

pub fn run(input: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let normalized = normalize(&input);

    if json {
        let errors = normalized
            .errors
            .as_ref()
            .map(|errors| errors.failures().to_vec())
            .unwrap_or_default();
        let output = json!({
            "input": input,
            "canonical": normalized.canonical(),
            "letters": normalized.letters,
            "errors": errors,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", normalized.canonical());
    if let Some(errors) = &normalized.errors {
        eprintln!("warning: {}", errors);
    }
    Ok(())
}
