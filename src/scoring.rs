//! Word scoring.

/// Point value of each letter `A..=Z`.
const LETTER_VALUES: [i64; 26] = [
    1,  // A
    4,  // B
    4,  // C
    3,  // D
    1,  // E
    5,  // F
    3,  // G
    5,  // H
    1,  // I
    9,  // J
    6,  // K
    2,  // L
    4,  // M
    2,  // N
    1,  // O
    4,  // P
    12, // Q
    2,  // R
    1,  // S
    2,  // T
    1,  // U
    5,  // V
    5,  // W
    9,  // X
    5,  // Y
    11, // Z
];

/// Point value of a single letter; anything outside `A..=Z` (after
/// uppercasing) is worth nothing.
pub fn letter_value(letter: char) -> i64 {
    match letter.to_ascii_uppercase() {
        upper @ 'A'..='Z' => LETTER_VALUES[(upper as u8 - b'A') as usize],
        _ => 0,
    }
}

/// Score of a word: letter sum, times length, times `max(1, length - 3)`.
pub fn score(word: &str) -> i64 {
    let word = word.to_uppercase();
    let length = word.chars().count() as i64;
    let letter_sum: i64 = word.chars().map(letter_value).sum();
    letter_sum
        .saturating_mul(length)
        .saturating_mul((length - 3).max(1))
}
