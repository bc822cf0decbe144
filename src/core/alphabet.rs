//! Letter classification and modulo-26 arithmetic shared by every cipher.
//!
//! Only ASCII `A-Z` / `a-z` count as letters. Anything else is passed
//! through untouched by the shift ciphers.

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Case of an ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    fn base(self) -> u8 {
        match self {
            LetterCase::Upper => b'A',
            LetterCase::Lower => b'a',
        }
    }
}

/// Classify a character as an ASCII letter.
///
/// Returns its case and zero-based index (`A`/`a` = 0 … `Z`/`z` = 25),
/// or `None` for anything that is not an ASCII letter.
pub fn classify(c: char) -> Option<(LetterCase, u8)> {
    match c {
        'A'..='Z' => Some((LetterCase::Upper, c as u8 - b'A')),
        'a'..='z' => Some((LetterCase::Lower, c as u8 - b'a')),
        _ => None,
    }
}

/// Letter at `index` in the alphabet of the given case.
///
/// `index` is reduced modulo 26.
pub fn letter_at(index: u8, case: LetterCase) -> char {
    (case.base() + index % ALPHABET_LEN) as char
}

/// Shift an alphabet index by any (possibly negative) amount, wrapping
/// into `0..26`.
pub fn shift_index(index: u8, shift: i64) -> u8 {
    (i64::from(index) + shift).rem_euclid(i64::from(ALPHABET_LEN)) as u8
}

/// Shift a letter within its own case. Non-letters come back unchanged.
pub fn shift_char(c: char, shift: i64) -> char {
    match classify(c) {
        Some((case, index)) => letter_at(shift_index(index, shift), case),
        None => c,
    }
}
