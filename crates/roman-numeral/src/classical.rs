use crate::letters::{self, Letter};
use regex::Regex;
use std::sync::OnceLock;

/// Standard numerals 1..=3999, one subtractive pair per power of ten.
const CLASSICAL_PATTERN: &str = r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$";

fn classical_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(CLASSICAL_PATTERN).expect("invalid regex"))
}

/// Returns true when the letters spell a standard numeral in 1..=3999.
///
/// Empty sequences are not classical.
pub fn is_classical(letters: &[Letter]) -> bool {
    !letters.is_empty() && classical_regex().is_match(&letters::to_ascii(letters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    fn classical(input: &str) -> bool {
        is_classical(&normalize(input).letters)
    }

    #[test]
    fn standard_numerals_match() {
        for input in ["I", "IV", "IX", "XLII", "XCIX", "CDXLIV", "MCMXCIV", "MMMCMXCIX"] {
            assert!(classical(input), "{input} should be classical");
        }
    }

    #[test]
    fn irregular_numerals_do_not_match() {
        for input in ["IIII", "IIX", "ID", "VX", "LDVLIV", "MMMM", "IXI"] {
            assert!(!classical(input), "{input} should not be classical");
        }
    }

    #[test]
    fn empty_sequence_is_not_classical() {
        assert!(!is_classical(&[]));
    }
}
