//! Symbols command implementation.

use roman_numeral::symbol_table;
use serde_json::json;

use crate::output;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let entries: Vec<_> = symbol_table()
            .iter()
            .map(|(symbol, expansion)| {
                json!({
                    "code_point": format!("U+{:04X}", u32::from(*symbol)),
                    "symbol": symbol,
                    "letters": expansion,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    output::print_symbol_header();
    for (symbol, expansion) in symbol_table() {
        println!("{}", output::format_symbol_row(*symbol, expansion));
    }
    Ok(())
}
