use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classical::is_classical;
use crate::error::{StrictError, SymbolErrors, UnexpectedSymbol};
use crate::normalizer::normalize;
use crate::resolver::resolve;

/// Latin zero, accepted only as the whole, exact input.
pub const NULLA: &str = "nulla";

/// Best-effort result of converting one numeral.
///
/// `errors` being present does not invalidate `value`; it lists the symbols
/// that were dropped before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Resolved integer.
    pub value: i64,
    /// Dropped symbols, if any.
    pub errors: Option<SymbolErrors>,
}

impl Conversion {
    /// Base-10 rendering of the value.
    pub fn decimal(&self) -> String {
        self.value.to_string()
    }
}

/// Converts a Roman numeral to its Arabic value, guessing on malformed input.
///
/// ```rust
/// let conversion = roman_numeral::to_arabic("HELLO");
/// assert_eq!(conversion.decimal(), "100");
/// assert_eq!(
///     conversion.errors.unwrap().to_string(),
///     "unexpected symbol 'H' at position 0, unexpected symbol 'E' at position 1, \
///      unexpected symbol 'O' at position 4"
/// );
/// ```
pub fn to_arabic(roman: &str) -> Conversion {
    if roman == NULLA {
        return Conversion {
            value: 0,
            errors: None,
        };
    }
    let normalized = normalize(roman);
    let value = resolve(&normalized.letters);
    debug!(
        input = roman,
        value,
        dropped = normalized.errors.as_ref().map_or(0, SymbolErrors::len),
        "resolved numeral"
    );
    Conversion {
        value,
        errors: normalized.errors,
    }
}

/// How a conversion relates to the classical numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Every symbol was recognized and the letters form a standard numeral.
    Classical,
    /// Every symbol was recognized but the sequence is non-standard.
    Irregular,
    /// At least one symbol was dropped; the value is a guess.
    Lossy,
}

/// Structured view of a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Original input.
    pub input: String,
    /// Canonical letters that were resolved.
    pub canonical: String,
    /// Resolved integer.
    pub value: i64,
    /// Classification of the input.
    pub status: ReportStatus,
    /// Dropped symbols in encounter order.
    pub errors: Vec<UnexpectedSymbol>,
}

impl ConversionReport {
    /// Builds a report for `input`.
    pub fn new(input: &str) -> Self {
        if input == NULLA {
            return Self {
                input: input.to_string(),
                canonical: String::new(),
                value: 0,
                status: ReportStatus::Classical,
                errors: Vec::new(),
            };
        }

        let normalized = normalize(input);
        let status = match &normalized.errors {
            Some(_) => ReportStatus::Lossy,
            None if is_classical(&normalized.letters) => ReportStatus::Classical,
            None => ReportStatus::Irregular,
        };
        Self {
            input: input.to_string(),
            canonical: normalized.canonical(),
            value: resolve(&normalized.letters),
            status,
            errors: normalized
                .errors
                .map(|errors| errors.failures().to_vec())
                .unwrap_or_default(),
        }
    }

    /// Decimal string of the value.
    pub fn decimal(&self) -> String {
        self.value.to_string()
    }
}

/// Conversion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Always produce a best guess.
    #[default]
    Permissive,
    /// Reject empty, lossy, and non-classical input.
    Strict,
}

/// Converter that applies a [`Mode`] on top of [`ConversionReport`].
///
/// # Example
///
/// ```rust
/// use roman_numeral::{Converter, Mode, StrictError};
///
/// let strict = Converter::new(Mode::Strict);
/// assert_eq!(strict.convert("MCMXCIV")?.value, 1994);
/// assert!(matches!(strict.convert("IIX"), Err(StrictError::NonClassical { .. })));
///
/// let permissive = Converter::default();
/// assert_eq!(permissive.convert("IIX")?.value, 10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    mode: Mode,
}

impl Converter {
    /// Creates a converter for the provided mode.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Mode this converter applies.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Converts `input`, rejecting it in strict mode when it is not a clean
    /// classical numeral.
    ///
    /// # Errors
    ///
    /// Only in [`Mode::Strict`]:
    /// - [`StrictError::Empty`] for empty input
    /// - [`StrictError::UnexpectedSymbols`] when any symbol was dropped
    /// - [`StrictError::NonClassical`] for irregular sequences
    pub fn convert(&self, input: &str) -> Result<ConversionReport, StrictError> {
        let report = ConversionReport::new(input);
        if self.mode == Mode::Permissive {
            return Ok(report);
        }

        if input.is_empty() {
            return Err(StrictError::Empty);
        }
        match report.status {
            ReportStatus::Classical => Ok(report),
            ReportStatus::Lossy => match SymbolErrors::from_failures(report.errors) {
                Some(errors) => Err(StrictError::UnexpectedSymbols(errors)),
                None => Err(StrictError::NonClassical {
                    canonical: report.canonical,
                }),
            },
            ReportStatus::Irregular => Err(StrictError::NonClassical {
                canonical: report.canonical,
            }),
        }
    }
}
