pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

use clap::{Args, Parser, Subcommand};

use crate::core::models::cipher_kind::CipherKind;

/// Classical ciphers with step-by-step traces.
#[derive(Parser, Debug)]
#[command(name = "cipherplay", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors and the result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text
    Encrypt(CipherArgs),

    /// Decrypt text
    Decrypt(CipherArgs),

    /// Show the Playfair key matrix for a keyword
    Matrix {
        /// Keyword to build the matrix from
        #[arg(short, long, env = "CIPHERPLAY_KEY")]
        key: String,

        /// Also show how this text is split into pairs
        #[arg(long)]
        text: Option<String>,
    },
}

/// Arguments shared by `encrypt` and `decrypt`.
#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Cipher to use: caesar, vigenere or playfair (default from config)
    #[arg(short, long)]
    pub cipher: Option<CipherKind>,

    /// Key: a number 1-25 for caesar, a keyword otherwise
    #[arg(short, long, env = "CIPHERPLAY_KEY")]
    pub key: String,

    /// Text to process (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    pub file: Option<String>,

    /// Show the step-by-step trace
    #[arg(short, long)]
    pub trace: bool,
}
