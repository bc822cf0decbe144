use std::path::PathBuf;

/// All domain errors for cipherplay.
///
/// The cipher engine itself never fails; these come from the calling
/// boundary (key validation, config, file input).
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    #[error(
        "Invalid Caesar key: '{key}'\n\n  \
         The Caesar cipher needs a whole number between 1 and 25.\n  \
         Example: cipherplay encrypt --cipher caesar --key 3 \"Hello\""
    )]
    InvalidCaesarKey { key: String },

    #[error(
        "No key given for the {cipher} cipher\n\n  \
         Pass one with --key <KEY> or set CIPHERPLAY_KEY."
    )]
    EmptyKey { cipher: String },

    #[error(
        "Invalid keyword for the {cipher} cipher: '{key}'\n\n  \
         A keyword needs at least one letter (A-Z). Other characters are ignored."
    )]
    InvalidKeyword { cipher: String, key: String },

    #[error(
        "No text to process\n\n  \
         Pass the text as an argument, with --file <PATH>, or on stdin."
    )]
    EmptyText,

    #[error("Unknown cipher: '{name}'. Use 'caesar', 'vigenere' or 'playfair'.")]
    UnknownCipher { name: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
