use crate::error::{SymbolErrors, UnexpectedSymbol};
use crate::letters::{self, Letter};
use tracing::trace;

/// Output of [`normalize`]: the canonical letters plus any rejected symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Canonical letters in input order.
    pub letters: Vec<Letter>,
    /// Rejected code points, `None` when every symbol was recognized.
    pub errors: Option<SymbolErrors>,
}

impl Normalized {
    /// Canonical letters as an ASCII string.
    pub fn canonical(&self) -> String {
        letters::to_ascii(&self.letters)
    }
}

/// Maps every code point of `input` to canonical letters.
///
/// Unrecognized code points are dropped from the output and recorded with
/// their code-point index. All positions are evaluated; the first failure
/// does not stop the scan. Empty input yields an empty sequence and no error.
pub fn normalize(input: &str) -> Normalized {
    let mut output = Vec::with_capacity(input.len());
    let mut failures = Vec::new();

    for (position, symbol) in input.chars().enumerate() {
        match letters::expand(symbol) {
            Some(expansion) => output.extend_from_slice(expansion),
            None => {
                trace!(position, ?symbol, "dropping unexpected symbol");
                failures.push(UnexpectedSymbol { position, symbol });
            }
        }
    }

    Normalized {
        letters: output,
        errors: SymbolErrors::from_failures(failures),
    }
}
