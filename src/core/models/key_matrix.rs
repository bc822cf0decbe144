use std::fmt;

use serde::{Serialize, Serializer};

/// Side length of the Playfair grid.
pub const MATRIX_SIZE: usize = 5;

/// Letter stored in place of `J`.
pub const MERGED_LETTER: char = 'I';

/// Playfair 5x5 key matrix.
///
/// Holds every letter `A-Z` except `J` exactly once, row-major.
/// `J` is never stored and is looked up as `I`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    cells: [[char; MATRIX_SIZE]; MATRIX_SIZE],
    positions: [Option<(usize, usize)>; 26],
}

impl KeyMatrix {
    /// Build the matrix for a keyword.
    ///
    /// The key is uppercased, `J` becomes `I`, non-letters are dropped and
    /// duplicates keep their first occurrence. The rest of the alphabet
    /// (minus `J`) follows in order. An empty key yields `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        if key.is_empty() {
            return None;
        }

        let mut set = LetterSet::new();
        key.chars()
            .map(|c| merge_j(c.to_ascii_uppercase()))
            .filter(char::is_ascii_uppercase)
            .for_each(|c| {
                set.insert(c);
            });
        ('A'..='Z').filter(|&c| c != 'J').for_each(|c| {
            set.insert(c);
        });

        let mut cells = [[' '; MATRIX_SIZE]; MATRIX_SIZE];
        let mut positions = [None; 26];
        for (i, &c) in set.order.iter().enumerate() {
            let (row, col) = (i / MATRIX_SIZE, i % MATRIX_SIZE);
            cells[row][col] = c;
            positions[(c as u8 - b'A') as usize] = Some((row, col));
        }

        Some(Self { cells, positions })
    }

    /// The grid, row by row.
    pub fn rows(&self) -> &[[char; MATRIX_SIZE]; MATRIX_SIZE] {
        &self.cells
    }

    /// Letter at the given cell. Both coordinates wrap modulo 5.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % MATRIX_SIZE][col % MATRIX_SIZE]
    }

    /// Row and column of a letter. `J` is found where `I` is.
    ///
    /// Only uppercase ASCII letters are present; anything else is `None`.
    pub fn locate(&self, c: char) -> Option<(usize, usize)> {
        let c = merge_j(c);
        if !c.is_ascii_uppercase() {
            return None;
        }
        self.positions[(c as u8 - b'A') as usize]
    }

    /// All 25 letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flatten().copied()
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl Serialize for KeyMatrix {
    /// Serialized as five row strings, e.g. `["MONAR", "CHYBD", ...]`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter().map(|row| row.iter().collect::<String>()))
    }
}

fn merge_j(c: char) -> char {
    if c == 'J' { MERGED_LETTER } else { c }
}

/// Insertion-ordered set of uppercase letters, bounded at 25 entries.
struct LetterSet {
    seen: u32,
    order: Vec<char>,
}

impl LetterSet {
    const CAPACITY: usize = MATRIX_SIZE * MATRIX_SIZE;

    fn new() -> Self {
        Self {
            seen: 0,
            order: Vec::with_capacity(Self::CAPACITY),
        }
    }

    /// Insert `c` if absent and there is room. Returns whether it was added.
    fn insert(&mut self, c: char) -> bool {
        let bit = 1u32 << (c as u8 - b'A');
        if self.seen & bit != 0 || self.order.len() == Self::CAPACITY {
            return false;
        }
        self.seen |= bit;
        self.order.push(c);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_strings(m: &KeyMatrix) -> Vec<String> {
        m.rows().iter().map(|r| r.iter().collect()).collect()
    }

    #[test]
    fn monarchy_reference_matrix() {
        let m = KeyMatrix::from_key("MONARCHY").unwrap();
        assert_eq!(
            row_strings(&m),
            vec!["MONAR", "CHYBD", "EFGIK", "LPQST", "UVWXZ"]
        );
    }

    #[test]
    fn empty_key_has_no_matrix() {
        assert!(KeyMatrix::from_key("").is_none());
    }

    #[test]
    fn key_without_letters_gives_plain_alphabet() {
        let m = KeyMatrix::from_key("123 !").unwrap();
        assert_eq!(
            row_strings(&m),
            vec!["ABCDE", "FGHIK", "LMNOP", "QRSTU", "VWXYZ"]
        );
    }

    #[test]
    fn key_is_case_insensitive_and_merges_j() {
        let lower = KeyMatrix::from_key("jazz hands").unwrap();
        let upper = KeyMatrix::from_key("IAZZHANDS").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(row_strings(&lower)[0], "IAZHN");
    }

    #[test]
    fn every_letter_but_j_appears_once() {
        let m = KeyMatrix::from_key("Playfair Example").unwrap();
        let mut letters: Vec<char> = m.letters().collect();
        letters.sort_unstable();
        let expected: Vec<char> = ('A'..='Z').filter(|&c| c != 'J').collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn locate_finds_letters_and_treats_j_as_i() {
        let m = KeyMatrix::from_key("MONARCHY").unwrap();
        assert_eq!(m.locate('M'), Some((0, 0)));
        assert_eq!(m.locate('Z'), Some((4, 4)));
        assert_eq!(m.locate('I'), Some((2, 3)));
        assert_eq!(m.locate('J'), Some((2, 3)));
    }

    #[test]
    fn locate_rejects_non_uppercase() {
        let m = KeyMatrix::from_key("MONARCHY").unwrap();
        assert_eq!(m.locate('m'), None);
        assert_eq!(m.locate(' '), None);
        assert_eq!(m.locate('7'), None);
    }

    #[test]
    fn at_wraps_coordinates() {
        let m = KeyMatrix::from_key("MONARCHY").unwrap();
        assert_eq!(m.at(0, 5), 'M');
        assert_eq!(m.at(5, 1), 'O');
    }

    #[test]
    fn display_prints_grid() {
        let m = KeyMatrix::from_key("MONARCHY").unwrap();
        let text = m.to_string();
        assert_eq!(text.lines().next(), Some("M O N A R"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn serializes_as_row_strings() {
        let m = KeyMatrix::from_key("MONARCHY").unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json[1], "CHYBD");
    }

    #[test]
    fn letter_set_ignores_duplicates() {
        let mut set = LetterSet::new();
        assert!(set.insert('A'));
        assert!(!set.insert('A'));
        assert_eq!(set.order, vec!['A']);
    }
}
