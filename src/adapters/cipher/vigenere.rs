use crate::core::alphabet::{self, LetterCase};
use crate::core::models::cipher_kind::{CipherKind, Operation};
use crate::core::models::trace::{Trace, TraceRecorder, TraceUnit};
use crate::core::traits::cipher::ClassicalCipher;

/// Encrypt with a repeating keyword.
///
/// Each letter of `text` is shifted forward by the alphabet index of the
/// current key letter; only letters advance the key position. Case of the
/// text is kept, case of the key is irrelevant. Returns an empty string
/// when `text` or `key` is empty.
pub fn encrypt(text: &str, key: &str) -> String {
    Vigenere::new(key).run(Operation::Encrypt, text, &mut TraceRecorder::disabled())
}

/// Exact inverse of [`encrypt`] for the same key.
pub fn decrypt(text: &str, key: &str) -> String {
    Vigenere::new(key).run(Operation::Decrypt, text, &mut TraceRecorder::disabled())
}

/// Vigenère cipher over an uppercased keyword.
///
/// Non-letters in the keyword carry no shift and are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: Vec<u8>,
}

impl Vigenere {
    pub fn new(key: &str) -> Self {
        let key = key
            .chars()
            .filter_map(alphabet::classify)
            .map(|(_, index)| index)
            .collect();
        Self { key }
    }

    /// The keyword as used for shifting (uppercase letters only).
    pub fn keyword(&self) -> String {
        self.key
            .iter()
            .map(|&i| alphabet::letter_at(i, LetterCase::Upper))
            .collect()
    }

    fn run(&self, operation: Operation, text: &str, recorder: &mut TraceRecorder) -> String {
        if text.is_empty() || self.key.is_empty() {
            return String::new();
        }

        let mut key_pos = 0usize;
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                if alphabet::classify(c).is_none() {
                    recorder.record(
                        position,
                        TraceUnit::Char {
                            original: c,
                            key: None,
                            shift: None,
                            result: c,
                        },
                    );
                    return c;
                }

                let shift = self.key[key_pos % self.key.len()];
                key_pos += 1;
                let signed = match operation {
                    Operation::Encrypt => i64::from(shift),
                    Operation::Decrypt => -i64::from(shift),
                };
                let result = alphabet::shift_char(c, signed);
                recorder.record(
                    position,
                    TraceUnit::Char {
                        original: c,
                        key: Some(alphabet::letter_at(shift, LetterCase::Upper)),
                        shift: Some(shift),
                        result,
                    },
                );
                result
            })
            .collect()
    }
}

impl ClassicalCipher for Vigenere {
    fn kind(&self) -> CipherKind {
        CipherKind::Vigenere
    }

    fn encrypt(&self, text: &str) -> String {
        self.run(Operation::Encrypt, text, &mut TraceRecorder::disabled())
    }

    fn decrypt(&self, text: &str) -> String {
        self.run(Operation::Decrypt, text, &mut TraceRecorder::disabled())
    }

    fn trace(&self, operation: Operation, text: &str) -> Trace {
        let mut recorder = TraceRecorder::enabled();
        self.run(operation, text, &mut recorder);
        Trace::new(CipherKind::Vigenere, operation, recorder.into_steps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lemon_reference_vector() {
        assert_eq!(encrypt("ATTACKATDAWN", "LEMON"), "LXFOPVEFRNHR");
        assert_eq!(decrypt("LXFOPVEFRNHR", "LEMON"), "ATTACKATDAWN");
    }

    #[test]
    fn key_case_is_irrelevant() {
        assert_eq!(encrypt("ATTACKATDAWN", "lemon"), "LXFOPVEFRNHR");
    }

    #[test]
    fn text_case_is_preserved() {
        assert_eq!(encrypt("attack at dawn", "LEMON"), "lxfopv ef rnhr");
    }

    #[test]
    fn non_letters_do_not_consume_key() {
        assert_eq!(encrypt("AT-TA CK!", "LEMON"), "LX-FO PV!");
    }

    #[test]
    fn empty_inputs_give_empty_output() {
        assert_eq!(encrypt("", "KEY"), "");
        assert_eq!(encrypt("TEXT", ""), "");
        assert_eq!(decrypt("", "KEY"), "");
        assert_eq!(decrypt("TEXT", ""), "");
    }

    #[test]
    fn key_without_letters_behaves_like_empty_key() {
        assert_eq!(encrypt("TEXT", "123"), "");
    }

    #[test]
    fn non_letters_in_key_are_dropped() {
        assert_eq!(encrypt("ATTACKATDAWN", "LE-MON 1"), "LXFOPVEFRNHR");
        assert_eq!(Vigenere::new("le-mon 1").keyword(), "LEMON");
    }

    #[test]
    fn decrypt_inverts_encrypt_on_mixed_text() {
        let text = "The quick brown fox, 1999 edition: jumps!";
        assert_eq!(decrypt(&encrypt(text, "Vigenere"), "Vigenere"), text);
    }

    #[test]
    fn trace_shows_key_letter_and_shift() {
        let cipher = Vigenere::new("lemon");
        let trace = cipher.trace(Operation::Encrypt, "a t");
        assert_eq!(trace.len(), 3);
        assert_eq!(
            trace.steps[0].unit,
            TraceUnit::Char {
                original: 'a',
                key: Some('L'),
                shift: Some(11),
                result: 'l'
            }
        );
        assert_eq!(
            trace.steps[1].unit,
            TraceUnit::Char {
                original: ' ',
                key: None,
                shift: None,
                result: ' '
            }
        );
        assert_eq!(
            trace.steps[2].unit,
            TraceUnit::Char {
                original: 't',
                key: Some('E'),
                shift: Some(4),
                result: 'x'
            }
        );
    }

    #[test]
    fn trace_of_empty_text_is_empty() {
        let trace = Vigenere::new("KEY").trace(Operation::Decrypt, "");
        assert!(trace.is_empty());
        assert_eq!(trace.operation, Operation::Decrypt);
    }
}
