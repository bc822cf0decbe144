use crate::adapters::cipher::playfair;
use crate::cli::{CipherArgs, output};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::cipher_kind::{CipherKind, Operation};

use super::crypto_helpers;

/// Execute the `cipherplay decrypt` command.
///
/// Playfair drops pairs it cannot find in the key matrix; the number of
/// dropped pairs is reported as a warning.
pub fn execute(args: &CipherArgs, config: &AppConfig, json: bool) -> Result<()> {
    let request = crypto_helpers::build_request(Operation::Decrypt, args, config)?;
    let outcome = crypto_helpers::run(&request)?;

    if !json && request.kind == CipherKind::Playfair {
        let skipped = playfair::count_unmapped_pairs(&request.text, &request.key);
        tracing::debug!(skipped, "playfair decrypt finished");
        if skipped > 0 {
            output::warning(&format!(
                "Skipped {skipped} pair(s) with characters outside the key matrix \
                 (Playfair ciphertext is uppercase A-Z)"
            ));
        }
    }

    crypto_helpers::print_outcome(&outcome, json)
}
