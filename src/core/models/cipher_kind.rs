use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::CipherError;

/// The classical ciphers cipherplay knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Caesar,
    #[serde(alias = "vigenère")]
    Vigenere,
    Playfair,
}

impl CipherKind {
    pub const ALL: [CipherKind; 3] = [CipherKind::Caesar, CipherKind::Vigenere, CipherKind::Playfair];

    /// Lowercase name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            CipherKind::Caesar => "caesar",
            CipherKind::Vigenere => "vigenere",
            CipherKind::Playfair => "playfair",
        }
    }

    /// One-line description of how the cipher works.
    pub fn description(self) -> &'static str {
        match self {
            CipherKind::Caesar => {
                "Shifts each letter by a fixed number of positions in the alphabet"
            }
            CipherKind::Vigenere => "Uses a repeating keyword to shift letters by varying amounts",
            CipherKind::Playfair => "Uses a 5x5 grid of letters to encrypt pairs of characters",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "caesar" => Ok(CipherKind::Caesar),
            "vigenere" | "vigenère" => Ok(CipherKind::Vigenere),
            "playfair" => Ok(CipherKind::Playfair),
            _ => Err(CipherError::UnknownCipher { name: s.to_string() }),
        }
    }
}

/// Direction of a cipher invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
