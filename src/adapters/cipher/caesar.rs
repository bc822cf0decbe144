use crate::core::alphabet::{self, ALPHABET_LEN};
use crate::core::models::cipher_kind::{CipherKind, Operation};
use crate::core::models::trace::{Trace, TraceRecorder, TraceUnit};
use crate::core::traits::cipher::ClassicalCipher;

/// Encrypt by shifting every letter forward `key mod 26` places.
///
/// Case is preserved and non-letters stay where they are, so the output
/// has as many characters as the input. Any integer key is accepted;
/// the 1-25 range is enforced by the caller.
pub fn encrypt(text: &str, key: i64) -> String {
    shift_text(text, encrypt_shift(key), &mut TraceRecorder::disabled())
}

/// Inverse of [`encrypt`] for the same key.
///
/// Encrypts with `26 - (key mod 26)`; a key that is a multiple of 26
/// becomes a shift of 26, which wraps back to 0.
pub fn decrypt(text: &str, key: i64) -> String {
    shift_text(text, decrypt_shift(key), &mut TraceRecorder::disabled())
}

fn encrypt_shift(key: i64) -> u8 {
    key.rem_euclid(i64::from(ALPHABET_LEN)) as u8
}

fn decrypt_shift(key: i64) -> u8 {
    (ALPHABET_LEN - encrypt_shift(key)) % ALPHABET_LEN
}

fn shift_text(text: &str, shift: u8, recorder: &mut TraceRecorder) -> String {
    text.chars()
        .enumerate()
        .map(|(position, c)| {
            let is_letter = alphabet::classify(c).is_some();
            let result = alphabet::shift_char(c, i64::from(shift));
            recorder.record(
                position,
                TraceUnit::Char {
                    original: c,
                    key: None,
                    shift: is_letter.then_some(shift),
                    result,
                },
            );
            result
        })
        .collect()
}

/// Caesar cipher with a fixed shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    key: i64,
}

impl Caesar {
    pub fn new(key: i64) -> Self {
        Self { key }
    }
}

impl ClassicalCipher for Caesar {
    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }

    fn encrypt(&self, text: &str) -> String {
        encrypt(text, self.key)
    }

    fn decrypt(&self, text: &str) -> String {
        decrypt(text, self.key)
    }

    fn trace(&self, operation: Operation, text: &str) -> Trace {
        let shift = match operation {
            Operation::Encrypt => encrypt_shift(self.key),
            Operation::Decrypt => decrypt_shift(self.key),
        };
        let mut recorder = TraceRecorder::enabled();
        shift_text(text, shift, &mut recorder);
        Trace::new(CipherKind::Caesar, operation, recorder.into_steps())
    }
}
