//! Output formatting utilities.

use roman_numeral::{letters, ConversionReport, Letter};

/// Formats a report as a single JSON line.
pub fn format_json(report: &ConversionReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Formats a symbol table entry as a table row.
pub fn format_symbol_row(symbol: char, expansion: &[Letter]) -> String {
    format!(
        "U+{:04X}  {:<5} {}",
        u32::from(symbol),
        symbol,
        letters::to_ascii(expansion)
    )
}

/// Prints the symbol table header.
#[allow(clippy::print_literal)]
pub fn print_symbol_header() {
    println!("{:<7} {:<5} {}", "CODE", "GLYPH", "LETTERS");
    println!("{}", "-".repeat(24));
}

/// Formats a warning line for dropped symbols.
pub fn format_warning(report: &ConversionReport) -> String {
    let details: Vec<String> = report.errors.iter().map(|e| e.to_string()).collect();
    format!("warning: {:?}: {}", report.input, details.join(", "))
}
