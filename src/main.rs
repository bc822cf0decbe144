use std::path::{Path, PathBuf};

use clap::Parser;

use cipherplay::cli::{self, Cli, Commands};
use cipherplay::config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();

    cli::logging::init(args.verbose);
    cli::context::init(args.verbose, args.quiet);

    let config_path = args.config.as_deref().map(PathBuf::from);
    let result = AppConfig::load(config_path.as_deref(), Path::new(".")).and_then(|config| {
        let json = args.json || config.defaults.json;
        match &args.command {
            Commands::Encrypt(cipher_args) => {
                cli::commands::encrypt::execute(cipher_args, &config, json)
            }
            Commands::Decrypt(cipher_args) => {
                cli::commands::decrypt::execute(cipher_args, &config, json)
            }
            Commands::Matrix { key, text } => {
                cli::commands::matrix::execute(key, text.as_deref(), json)
            }
        }
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
