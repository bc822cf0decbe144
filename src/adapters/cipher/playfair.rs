//! Playfair digraph cipher over a 5x5 key matrix.
//!
//! Encryption normalizes its input first (uppercase, `J` to `I`, letters
//! only, `X` between doubled letters, `X` to even length). Decryption does
//! not: it only pads an odd-length input with `X` and works on the
//! characters as given, so ciphertext pairs with repeated letters survive.
//! Pairs holding a character that is not in the matrix are dropped.

use crate::core::models::cipher_kind::{CipherKind, Operation};
use crate::core::models::key_matrix::{KeyMatrix, MATRIX_SIZE, MERGED_LETTER};
use crate::core::models::trace::{PairRule, Trace, TraceRecorder, TraceUnit};
use crate::core::traits::cipher::ClassicalCipher;

/// Letter used to split doubled letters and pad odd lengths.
pub const FILLER: char = 'X';

/// Build the key matrix for `key`; `None` when the key is empty.
pub fn build_matrix(key: &str) -> Option<KeyMatrix> {
    KeyMatrix::from_key(key)
}

/// Row and column of `letter` in `matrix`, treating `J` as `I`.
pub fn locate(matrix: &KeyMatrix, letter: char) -> Option<(usize, usize)> {
    matrix.locate(letter)
}

/// Prepare plaintext for pairing.
///
/// Uppercases, maps `J` to `I`, drops everything but `A-Z`, inserts a
/// filler after any letter followed by the same letter, then appends a
/// filler if the length is odd. The result always has even length.
pub fn normalize(text: &str) -> String {
    let letters: Vec<char> = text
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .map(|c| if c == 'J' { MERGED_LETTER } else { c })
        .filter(char::is_ascii_uppercase)
        .collect();

    let mut prepared = String::with_capacity(letters.len() * 2);
    for (i, &c) in letters.iter().enumerate() {
        prepared.push(c);
        if letters.get(i + 1) == Some(&c) {
            prepared.push(FILLER);
        }
    }
    if prepared.len() % 2 != 0 {
        prepared.push(FILLER);
    }
    prepared
}

/// Encrypt already-normalized text pair by pair.
pub fn encrypt_pairs(normalized: &str, matrix: &KeyMatrix) -> String {
    transform_pairs(normalized, matrix, Direction::Forward, &mut TraceRecorder::disabled())
}

/// Decrypt text pair by pair, moving left/up instead of right/down.
///
/// Pairs with an unmapped character are skipped. A dangling last
/// character is ignored; [`decrypt`] pads before calling this.
pub fn decrypt_pairs(text: &str, matrix: &KeyMatrix) -> String {
    transform_pairs(text, matrix, Direction::Backward, &mut TraceRecorder::disabled())
}

/// Normalize `text` and encrypt it with the matrix for `key`.
///
/// Empty text or an empty key gives an empty string.
pub fn encrypt(text: &str, key: &str) -> String {
    Playfair::new(key).encrypt(text)
}

/// Decrypt `text` with the matrix for `key`.
///
/// Empty text or an empty key gives an empty string.
pub fn decrypt(text: &str, key: &str) -> String {
    Playfair::new(key).decrypt(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self, idx: usize) -> usize {
        match self {
            Direction::Forward => (idx + 1) % MATRIX_SIZE,
            Direction::Backward => (idx + MATRIX_SIZE - 1) % MATRIX_SIZE,
        }
    }
}

/// Transform one pair. `None` if either letter is not in the matrix.
fn transform_pair(
    matrix: &KeyMatrix,
    a: char,
    b: char,
    direction: Direction,
) -> Option<([char; 2], PairRule)> {
    let (r1, c1) = matrix.locate(a)?;
    let (r2, c2) = matrix.locate(b)?;

    let out = if r1 == r2 {
        (
            [
                matrix.at(r1, direction.step(c1)),
                matrix.at(r2, direction.step(c2)),
            ],
            PairRule::SameRow,
        )
    } else if c1 == c2 {
        (
            [
                matrix.at(direction.step(r1), c1),
                matrix.at(direction.step(r2), c2),
            ],
            PairRule::SameColumn,
        )
    } else {
        ([matrix.at(r1, c2), matrix.at(r2, c1)], PairRule::Rectangle)
    };
    Some(out)
}

fn transform_pairs(
    text: &str,
    matrix: &KeyMatrix,
    direction: Direction,
    recorder: &mut TraceRecorder,
) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len());

    for (position, pair) in chars.chunks_exact(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        match transform_pair(matrix, a, b, direction) {
            Some((result, rule)) => {
                out.extend(result);
                recorder.record(
                    position,
                    TraceUnit::Pair {
                        original: [a, b],
                        rule,
                        result: Some(result),
                    },
                );
            }
            None => recorder.record(
                position,
                TraceUnit::Pair {
                    original: [a, b],
                    rule: PairRule::Unmapped,
                    result: None,
                },
            ),
        }
    }
    out
}

/// Number of pairs [`decrypt`] would drop from `text` under `key`.
///
/// Counts over the padded ciphertext, so a dangling last character
/// paired with the filler is counted too. Always 0 for an empty key.
pub fn count_unmapped_pairs(text: &str, key: &str) -> usize {
    let Some(matrix) = build_matrix(key) else {
        return 0;
    };
    let chars: Vec<char> = pad_ciphertext(text).chars().collect();
    chars
        .chunks_exact(2)
        .filter(|pair| matrix.locate(pair[0]).is_none() || matrix.locate(pair[1]).is_none())
        .count()
}

/// Pad ciphertext to even length without any other normalization.
fn pad_ciphertext(text: &str) -> String {
    let mut padded = text.to_string();
    if padded.chars().count() % 2 != 0 {
        padded.push(FILLER);
    }
    padded
}

/// Playfair cipher with its key matrix built once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    matrix: Option<KeyMatrix>,
}

impl Playfair {
    pub fn new(key: &str) -> Self {
        Self {
            matrix: build_matrix(key),
        }
    }

    /// The key matrix, or `None` for an empty key.
    pub fn matrix(&self) -> Option<&KeyMatrix> {
        self.matrix.as_ref()
    }

    /// The text as it will be split into pairs for `operation`.
    pub fn prepare(&self, operation: Operation, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match operation {
            Operation::Encrypt => normalize(text),
            Operation::Decrypt => pad_ciphertext(text),
        }
    }

    fn run(&self, operation: Operation, text: &str, recorder: &mut TraceRecorder) -> String {
        let Some(matrix) = &self.matrix else {
            return String::new();
        };
        let prepared = self.prepare(operation, text);
        let direction = match operation {
            Operation::Encrypt => Direction::Forward,
            Operation::Decrypt => Direction::Backward,
        };
        transform_pairs(&prepared, matrix, direction, recorder)
    }
}

impl ClassicalCipher for Playfair {
    fn kind(&self) -> CipherKind {
        CipherKind::Playfair
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

        // Steps cover the text each direction actually pairs up; `prepared`
        // is always the normalized text.
        let mut trace = Trace::new(CipherKind::Playfair, operation, recorder.into_steps());
        trace.matrix = self.matrix.clone();
        if self.matrix.is_some() {
            trace.prepared = Some(normalize(text));
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_splits_doubles_and_pads() {
        assert_eq!(normalize("BALLOON"), "BALXLOXONX");
        assert_eq!(normalize("hide the gold"), "HIDETHEGOLDX");
        assert_eq!(normalize("Jump!"), "IUMP");
    }

    #[test]
    fn normalize_always_even_and_letters_only() {
        for input in ["", "a", "aa", "aaa", "x y z", "J.J.J", "Tree 2 see", "ñandú"] {
            let out = normalize(input);
            assert_eq!(out.len() % 2, 0, "{input:?} -> {out:?}");
            assert!(out.chars().all(|c| c.is_ascii_uppercase() && c != 'J'));
        }
    }

    #[test]
    fn normalize_scans_whole_text_not_pairs() {
        // "AB" + "BC": the doubled B straddles a pair boundary and still gets a filler.
        assert_eq!(normalize("ABBC"), "ABXBCX");
    }

    #[test]
    fn wikipedia_reference_vector() {
        let key = "playfair example";
        let cipher = encrypt("Hide the gold in the tree stump", key);
        assert_eq!(cipher, "BMODZBXDNABEKUDMUIXMMOUVIF");
    }

    #[test]
    fn same_row_same_column_and_rectangle_rules() {
        let m = build_matrix("MONARCHY").unwrap();
        // M and O share row 0: shift right.
        assert_eq!(encrypt_pairs("MO", &m), "ON");
        // R at end of row wraps to M.
        assert_eq!(encrypt_pairs("AR", &m), "RM");
        // M and C share column 0: shift down.
        assert_eq!(encrypt_pairs("MC", &m), "CE");
        // U at bottom of column 0 wraps to M.
        assert_eq!(encrypt_pairs("LU", &m), "UM");
        // H (1,1) and S (3,3) form a rectangle.
        assert_eq!(encrypt_pairs("HS", &m), "BP");
    }

    #[test]
    fn decrypt_pairs_mirrors_encrypt_pairs() {
        let m = build_matrix("MONARCHY").unwrap();
        for pair in ["MO", "AR", "MC", "LU", "HS", "IX", "KE"] {
            let enc = encrypt_pairs(pair, &m);
            assert_eq!(decrypt_pairs(&enc, &m), pair);
        }
    }

    #[test]
    fn round_trip_without_filler_ambiguity() {
        let key = "MONARCHY";
        let plain = "INSTRUMENTS";
        let enc = encrypt(plain, key);
        assert_eq!(enc, "GATLMZCLRQXA");
        assert_eq!(decrypt(&enc, key), "INSTRUMENTSX");
    }

    #[test]
    fn decrypt_does_not_split_repeated_letters() {
        let m = build_matrix("MONARCHY").unwrap();
        // "EE" is a legal ciphertext pair; it must not gain a filler.
        let plain = decrypt("EE", "MONARCHY");
        assert_eq!(plain.len(), 2);
        assert_eq!(plain, decrypt_pairs("EE", &m));
    }

    #[test]
    fn decrypt_pads_odd_length() {
        let key = "MONARCHY";
        assert_eq!(decrypt("GAT", key), decrypt("GATX", key));
    }

    #[test]
    fn decrypt_skips_unmapped_pairs() {
        let key = "MONARCHY";
        // "ga" is lowercase, "T " holds a space: both pairs are dropped.
        assert_eq!(decrypt("gaT LM", key), decrypt("LM", key));
        assert_eq!(decrypt("12", key), "");
    }

    #[test]
    fn j_is_read_as_i_when_decrypting() {
        let key = "MONARCHY";
        assert_eq!(decrypt("JK", key), decrypt("IK", key));
    }

    #[test]
    fn i_and_j_in_one_pair_decrypt_as_same_row() {
        let m = build_matrix("MONARCHY").unwrap();
        // I and J share cell (2,3); same-row rule moves both left to G.
        assert_eq!(decrypt_pairs("IJ", &m), "GG");
        assert_eq!(decrypt("JI", "MONARCHY"), "GG");
    }

    #[test]
    fn empty_key_or_text_gives_empty_output() {
        assert_eq!(encrypt("hello", ""), "");
        assert_eq!(decrypt("HELLO", ""), "");
        assert_eq!(encrypt("", "KEY"), "");
        assert_eq!(decrypt("", "KEY"), "");
        assert!(build_matrix("").is_none());
    }

    #[test]
    fn encrypt_output_is_even_and_upper() {
        let out = encrypt("Attack at 3pm, bring the balloons!", "secret");
        assert_eq!(out.len() % 2, 0);
        assert!(out.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn trace_has_one_step_per_pair() {
        let cipher = Playfair::new("MONARCHY");
        let trace = cipher.trace(Operation::Encrypt, "balloon");
        assert_eq!(trace.prepared.as_deref(), Some("BALXLOXONX"));
        assert_eq!(trace.len(), 5);
        assert!(trace.matrix.is_some());
        assert_eq!(trace.steps[4].position, 4);
        assert!(matches!(
            trace.steps[0].unit,
            TraceUnit::Pair {
                original: ['B', 'A'],
                ..
            }
        ));
    }

    #[test]
    fn decrypt_trace_marks_skipped_pairs() {
        let trace = Playfair::new("MONARCHY").trace(Operation::Decrypt, "ga");
        assert_eq!(trace.prepared.as_deref(), Some("GA"));
        assert_eq!(
            trace.steps[0].unit,
            TraceUnit::Pair {
                original: ['g', 'a'],
                rule: PairRule::Unmapped,
                result: None
            }
        );
    }

    #[test]
    fn decrypt_trace_shows_normalized_text() {
        let trace = Playfair::new("MONARCHY").trace(Operation::Decrypt, "balloon");
        assert_eq!(trace.prepared.as_deref(), Some("BALXLOXONX"));
        // The steps still cover the raw padded input "balloonX".
        assert_eq!(trace.len(), 4);
        assert!(matches!(
            trace.steps[3].unit,
            TraceUnit::Pair {
                original: ['n', 'X'],
                rule: PairRule::Unmapped,
                result: None
            }
        ));
    }

    #[test]
    fn counts_pairs_decrypt_would_drop() {
        // "ga", " L", "M1" and "2X" are all unmapped.
        assert_eq!(count_unmapped_pairs("ga LM12", "MONARCHY"), 4);
        assert_eq!(count_unmapped_pairs("GATL", "MONARCHY"), 0);
        assert_eq!(count_unmapped_pairs("ga", ""), 0);
        assert_eq!(count_unmapped_pairs("", "MONARCHY"), 0);
    }

    #[test]
    fn trace_without_key_is_empty() {
        let trace = Playfair::new("").trace(Operation::Encrypt, "hello");
        assert!(trace.is_empty());
        assert!(trace.matrix.is_none());
        assert!(trace.prepared.is_none());
    }

    #[test]
    fn trace_result_matches_cipher_output() {
        let cipher = Playfair::new("keyword");
        let text = "Meet me at the bridge";
        let trace = cipher.trace(Operation::Encrypt, text);
        let joined: String = trace
            .steps
            .iter()
            .filter_map(|s| match &s.unit {
                TraceUnit::Pair { result, .. } => *result,
                TraceUnit::Char { .. } => None,
            })
            .flatten()
            .collect();
        assert_eq!(joined, cipher.encrypt(text));
    }
}
