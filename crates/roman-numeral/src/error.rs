use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single input code point that has no canonical expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("unexpected symbol {symbol:?} at position {position}")]
pub struct UnexpectedSymbol {
    /// Zero-based code-point index in the original input.
    pub position: usize,
    /// The rejected code point.
    pub symbol: char,
}

/// Every unexpected symbol found in one input, in encounter order.
///
/// Never empty: normalization reports `None` instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolErrors(Vec<UnexpectedSymbol>);

impl SymbolErrors {
    /// Builds the compound error, or `None` when there were no failures.
    pub fn from_failures(failures: Vec<UnexpectedSymbol>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self(failures))
        }
    }

    /// Individual failures in encounter order.
    pub fn failures(&self) -> &[UnexpectedSymbol] {
        &self.0
    }

    /// Number of rejected code points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no failures.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Positions of the rejected code points.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|failure| failure.position)
    }
}

impl fmt::Display for SymbolErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, failure) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for SymbolErrors {}

impl<'a> IntoIterator for &'a SymbolErrors {
    type Item = &'a UnexpectedSymbol;
    type IntoIter = std::slice::Iter<'a, UnexpectedSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Rejections raised only by [`Mode::Strict`](crate::Mode::Strict) conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrictError {
    /// The input was empty.
    #[error("input is empty")]
    Empty,
    /// One or more code points had no canonical expansion.
    #[error("{0}")]
    UnexpectedSymbols(SymbolErrors),
    /// All symbols were recognized but do not form a standard numeral.
    #[error("'{canonical}' is not a classical numeral")]
    NonClassical {
        /// Canonical letters that failed the classical pattern.
        canonical: String,
    },
}
