use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical ASCII numeral letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    /// One.
    I,
    /// Five.
    V,
    /// Ten.
    X,
    /// Fifty.
    L,
    /// One hundred.
    C,
    /// Five hundred.
    D,
    /// One thousand.
    M,
}

impl Letter {
    /// All canonical letters in ascending order of magnitude.
    pub const ALL: [Letter; 7] = [
        Letter::I,
        Letter::V,
        Letter::X,
        Letter::L,
        Letter::C,
        Letter::D,
        Letter::M,
    ];

    /// Magnitude of the letter.
    pub const fn value(self) -> u16 {
        match self {
            Letter::I => 1,
            Letter::V => 5,
            Letter::X => 10,
            Letter::L => 50,
            Letter::C => 100,
            Letter::D => 500,
            Letter::M => 1000,
        }
    }

    /// ASCII uppercase form of the letter.
    pub const fn as_char(self) -> char {
        match self {
            Letter::I => 'I',
            Letter::V => 'V',
            Letter::X => 'X',
            Letter::L => 'L',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::M => 'M',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Renders a letter sequence as its ASCII string.
pub fn to_ascii(letters: &[Letter]) -> String {
    letters.iter().map(|letter| letter.as_char()).collect()
}

use Letter::{C, D, I, L, M, V, X};

/// Accepted input code points and their canonical expansions, sorted by code point.
///
/// Extend by inserting a row at its sorted position; lookups binary-search this slice.
static SYMBOL_TABLE: &[(char, &[Letter])] = &[
    ('C', &[C]),
    ('D', &[D]),
    ('I', &[I]),
    ('L', &[L]),
    ('M', &[M]),
    ('V', &[V]),
    ('X', &[X]),
    ('c', &[C]),
    ('d', &[D]),
    ('i', &[I]),
    ('l', &[L]),
    ('m', &[M]),
    ('v', &[V]),
    ('x', &[X]),
    // Number Forms, capital numerals (U+2160..U+216F)
    ('\u{2160}', &[I]),
    ('\u{2161}', &[I, I]),
    ('\u{2162}', &[I, I, I]),
    ('\u{2163}', &[I, V]),
    ('\u{2164}', &[V]),
    ('\u{2165}', &[V, I]),
    ('\u{2166}', &[V, I, I]),
    ('\u{2167}', &[V, I, I, I]),
    ('\u{2168}', &[I, X]),
    ('\u{2169}', &[X]),
    ('\u{216A}', &[X, I]),
    ('\u{216B}', &[X, I, I]),
    ('\u{216C}', &[L]),
    ('\u{216D}', &[C]),
    ('\u{216E}', &[D]),
    ('\u{216F}', &[M]),
    // Number Forms, small numerals (U+2170..U+217F)
    ('\u{2170}', &[I]),
    ('\u{2171}', &[I, I]),
    ('\u{2172}', &[I, I, I]),
    ('\u{2173}', &[I, V]),
    ('\u{2174}', &[V]),
    ('\u{2175}', &[V, I]),
    ('\u{2176}', &[V, I, I]),
    ('\u{2177}', &[V, I, I, I]),
    ('\u{2178}', &[I, X]),
    ('\u{2179}', &[X]),
    ('\u{217A}', &[X, I]),
    ('\u{217B}', &[X, I, I]),
    ('\u{217C}', &[L]),
    ('\u{217D}', &[C]),
    ('\u{217E}', &[D]),
    ('\u{217F}', &[M]),
];

/// Looks up the canonical expansion of a single input code point.
pub fn expand(symbol: char) -> Option<&'static [Letter]> {
    SYMBOL_TABLE
        .binary_search_by_key(&symbol, |(c, _)| *c)
        .ok()
        .map(|idx| SYMBOL_TABLE[idx].1)
}

/// Returns every accepted code point with its expansion, in code-point order.
pub fn symbol_table() -> &'static [(char, &'static [Letter])] {
    SYMBOL_TABLE
}
