//! Best-effort conversion of Roman numerals to Arabic integers.
//!
//! Conversion runs in two pure stages over immutable tables:
//! - normalization maps every input code point (ASCII letters, lowercase
//!   letters, Unicode Number Forms glyphs) to canonical letters, dropping and
//!   recording anything it does not recognize;
//! - resolution sums the letters with one-letter lookahead, subtracting any
//!   letter followed by a strictly larger one.
//!
//! The default path never rejects input: a value is always produced, and
//! dropped symbols are reported alongside it. [`Converter`] in
//! [`Mode::Strict`] layers classical validation on top.
//!
#![deny(missing_docs)]

/// Classical numeral validation.
pub mod classical;
/// Top-level conversion, reports, and modes.
pub mod conversion;
/// Error types for dropped symbols and strict rejections.
pub mod error;
/// Canonical letters and the symbol expansion table.
pub mod letters;
/// Code point to canonical letter normalization.
pub mod normalizer;
/// Lookahead value resolution.
pub mod resolver;

pub use classical::is_classical;
pub use conversion::{
    to_arabic, Conversion, ConversionReport, Converter, Mode, ReportStatus, NULLA,
};
pub use error::{StrictError, SymbolErrors, UnexpectedSymbol};
pub use letters::{expand, symbol_table, Letter};
pub use normalizer::{normalize, Normalized};
pub use resolver::resolve;
