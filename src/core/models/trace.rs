use serde::Serialize;

use crate::core::models::cipher_kind::{CipherKind, Operation};
use crate::core::models::key_matrix::KeyMatrix;

/// How a Playfair pair was transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairRule {
    SameRow,
    SameColumn,
    Rectangle,
    /// A character of the pair is not in the matrix; the pair was dropped.
    Unmapped,
}

/// The unit a single trace step worked on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum TraceUnit {
    /// One character of a Caesar or Vigenère text.
    ///
    /// `key` and `shift` are `None` for characters passed through unchanged.
    Char {
        original: char,
        key: Option<char>,
        shift: Option<u8>,
        result: char,
    },
    /// One digraph of a Playfair text. `result` is `None` when skipped.
    Pair {
        original: [char; 2],
        rule: PairRule,
        result: Option<[char; 2]>,
    },
}

/// One recorded transformation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// Character index in the input (shift ciphers) or pair index (Playfair).
    pub position: usize,
    #[serde(flatten)]
    pub unit: TraceUnit,
}

/// Ordered record of one cipher invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub cipher: CipherKind,
    pub operation: Operation,
    pub steps: Vec<TraceStep>,
    /// Playfair key matrix, when one was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<KeyMatrix>,
    /// Playfair input after normalization, for either operation.
    ///
    /// Encryption pairs exactly this text. Decryption pairs the raw input
    /// padded to even length, which is what `steps` records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepared: Option<String>,
}

impl Trace {
    pub fn new(cipher: CipherKind, operation: Operation, steps: Vec<TraceStep>) -> Self {
        Self {
            cipher,
            operation,
            steps,
            matrix: None,
            prepared: None,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Append-only collector of trace steps.
///
/// A disabled recorder drops everything, so ciphers can share one
/// traversal for plain runs and traced runs.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    enabled: bool,
    steps: Vec<TraceStep>,
}

impl TraceRecorder {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            steps: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn record(&mut self, position: usize, unit: TraceUnit) {
        if self.enabled {
            self.steps.push(TraceStep { position, unit });
        }
    }

    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }
}
