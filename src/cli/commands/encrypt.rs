use crate::cli::{CipherArgs, output};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::cipher_kind::{CipherKind, Operation};

use super::crypto_helpers;

/// Execute the `cipherplay encrypt` command.
///
/// Playfair only keeps letters, so a note is shown when the input had
/// anything else in it.
pub fn execute(args: &CipherArgs, config: &AppConfig, json: bool) -> Result<()> {
    let request = crypto_helpers::build_request(Operation::Encrypt, args, config)?;
    let outcome = crypto_helpers::run(&request)?;

    if !json
        && request.kind == CipherKind::Playfair
        && request.text.chars().any(|c| !c.is_ascii_alphabetic())
    {
        output::warning("Playfair keeps letters only: spaces, digits and punctuation were removed");
    }

    crypto_helpers::print_outcome(&outcome, json)
}
