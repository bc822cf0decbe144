use serde::Serialize;

use crate::adapters::cipher::caesar::Caesar;
use crate::adapters::cipher::playfair::Playfair;
use crate::adapters::cipher::vigenere::Vigenere;
use crate::core::errors::{CipherError, Result};
use crate::core::models::cipher_kind::{CipherKind, Operation};
use crate::core::models::trace::Trace;
use crate::core::traits::cipher::ClassicalCipher;

/// Valid Caesar keys accepted at the boundary.
pub const CAESAR_KEY_RANGE: std::ops::RangeInclusive<i64> = 1..=25;

/// Everything needed for one cipher invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    pub kind: CipherKind,
    pub operation: Operation,
    pub text: String,
    pub key: String,
    pub trace: bool,
}

/// Result of one invocation, ready for display or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherOutcome {
    pub cipher: CipherKind,
    pub operation: Operation,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Trace>,
}

/// Parse and range-check a Caesar key.
pub fn parse_caesar_key(key: &str) -> Result<i64> {
    key.trim()
        .parse::<i64>()
        .ok()
        .filter(|k| CAESAR_KEY_RANGE.contains(k))
        .ok_or_else(|| CipherError::InvalidCaesarKey {
            key: key.to_string(),
        })
}

/// Check that a keyword holds at least one ASCII letter.
pub fn validate_keyword(kind: CipherKind, key: &str) -> Result<()> {
    if key.chars().any(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(CipherError::InvalidKeyword {
            cipher: kind.to_string(),
            key: key.to_string(),
        })
    }
}

/// Build the cipher adapter for `kind` from a raw key string.
///
/// Rejects an empty key, a Caesar key that is not an integer in 1-25,
/// and a keyword without letters.
pub fn build_cipher(kind: CipherKind, key: &str) -> Result<Box<dyn ClassicalCipher>> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey {
            cipher: kind.to_string(),
        });
    }

    let cipher: Box<dyn ClassicalCipher> = match kind {
        CipherKind::Caesar => Box::new(Caesar::new(parse_caesar_key(key)?)),
        CipherKind::Vigenere => {
            validate_keyword(kind, key)?;
            Box::new(Vigenere::new(key))
        }
        CipherKind::Playfair => {
            validate_keyword(kind, key)?;
            Box::new(Playfair::new(key))
        }
    };
    Ok(cipher)
}

/// Validates requests and runs them through the right cipher.
pub struct CipherService;

impl CipherService {
    /// Run one request.
    ///
    /// The trace, when asked for, is computed separately from the result
    /// and never affects it.
    pub fn run(&self, request: &CipherRequest) -> Result<CipherOutcome> {
        if request.text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        let cipher = build_cipher(request.kind, &request.key)?;

        tracing::debug!(
            cipher = %request.kind,
            operation = %request.operation,
            chars = request.text.chars().count(),
            "running cipher"
        );

        let result = cipher.apply(request.operation, &request.text);
        let trace = request
            .trace
            .then(|| cipher.trace(request.operation, &request.text));

        if let Some(t) = &trace {
            tracing::debug!(steps = t.len(), "trace recorded");
        }

        Ok(CipherOutcome {
            cipher: request.kind,
            operation: request.operation,
            result,
            trace,
        })
    }
}
