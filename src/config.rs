use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Deserialize;

use crate::core::StripMode;

pub const CONFIG_FILE_NAME: &str = ".decommentrc.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned when no root is given on the command line.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Extensions of files that get stripped.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns excluded from the walk.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub mode: StripMode,
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    ["kt", "kts", "java"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            mode: StripMode::default(),
        }
    }
}

impl Config {
    /// Load `.decommentrc.json` from the working directory, falling back to
    /// defaults when the file does not exist. A present-but-broken config is
    /// an error rather than a silent fallback.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}
