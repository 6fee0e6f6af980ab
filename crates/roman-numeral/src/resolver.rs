use crate::letters::Letter;

/// Resolves canonical letters to an integer using one-letter lookahead.
///
/// A letter immediately followed by a strictly larger one is subtracted,
/// otherwise it is added. This accepts irregular subtractive forms such as
/// `IIX` or `LDVLIV` alongside classical numerals.
pub fn resolve(letters: &[Letter]) -> i64 {
    let mut result: i64 = 0;
    for (idx, letter) in letters.iter().enumerate() {
        let current = i64::from(letter.value());
        let next = letters
            .get(idx + 1)
            .map_or(0, |next| i64::from(next.value()));
        if next != 0 && current < next {
            result -= current;
        } else {
            result += current;
        }
    }
    result
}
