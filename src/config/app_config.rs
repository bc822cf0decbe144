use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{CipherError, Result};
use crate::core::models::cipher_kind::CipherKind;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "cipherplay.toml";

/// Top-level cipherplay configuration.
///
/// Every field is optional; a missing file means built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// The `[defaults]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Cipher used when `--cipher` is not given.
    #[serde(default = "default_cipher")]
    pub cipher: CipherKind,
    /// Always print the step-by-step trace.
    #[serde(default)]
    pub trace: bool,
    /// Always print JSON instead of text.
    #[serde(default)]
    pub json: bool,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            cipher: default_cipher(),
            trace: false,
            json: false,
        }
    }
}

fn default_cipher() -> CipherKind {
    CipherKind::Caesar
}

impl AppConfig {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one,
    /// `cipherplay.toml` in `dir` is used when present.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) if !p.exists() => {
                return Err(CipherError::FileNotFound {
                    path: p.to_path_buf(),
                });
            }
            Some(p) => p.to_path_buf(),
            None => {
                let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content).map_err(|e| match e {
            CipherError::InvalidConfig { detail } => CipherError::InvalidConfig {
                detail: format!("{}: {detail}", path.display()),
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CipherError::InvalidConfig {
            detail: format!("Failed to parse config: {e}"),
        })
    }
}
