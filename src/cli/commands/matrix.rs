use serde::Serialize;

use crate::adapters::cipher::playfair;
use crate::cli::output;
use crate::core::errors::{CipherError, Result};
use crate::core::models::cipher_kind::CipherKind;
use crate::core::models::key_matrix::KeyMatrix;
use crate::core::services::cipher_service::validate_keyword;

use super::crypto_helpers::split_pairs;

/// JSON shape of `cipherplay matrix --json`.
#[derive(Debug, Serialize)]
struct MatrixReport<'a> {
    key: &'a str,
    matrix: &'a KeyMatrix,
    #[serde(skip_serializing_if = "Option::is_none")]
    prepared: Option<String>,
}

/// Execute the `cipherplay matrix` command.
///
/// Prints the Playfair key matrix and, with `--text`, the normalized
/// plaintext split into pairs.
pub fn execute(key: &str, text: Option<&str>, json: bool) -> Result<()> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey {
            cipher: CipherKind::Playfair.to_string(),
        });
    }
    validate_keyword(CipherKind::Playfair, key)?;

    let matrix = playfair::build_matrix(key).ok_or_else(|| CipherError::EmptyKey {
        cipher: CipherKind::Playfair.to_string(),
    })?;
    let prepared = text.map(playfair::normalize);
    tracing::debug!(
        key_len = key.chars().count(),
        pairs = ?prepared.as_ref().map(|p| p.len() / 2),
        "built playfair key matrix"
    );

    if json {
        let report = MatrixReport {
            key,
            matrix: &matrix,
            prepared,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::header("5x5 key matrix");
    for line in matrix.to_string().lines() {
        output::result(line);
    }
    output::success("25 letters, J shares a cell with I");

    if let Some(prepared) = prepared {
        output::header("Processed text (pairs)");
        output::result(&split_pairs(&prepared));
    }
    Ok(())
}
