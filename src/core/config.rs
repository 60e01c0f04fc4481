use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::encoders::algorithms::errors::Error;
use crate::features::hashing::Argon2Params;

/// Default file names used when a path is not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    pub message: String,
    pub nonce: String,
    pub secret: String,
    pub data: String,
    pub alphabet: String,
    pub output: String,
}

/// Argon2id defaults. `memory_kib` falls back to 4 MiB per lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashSettings {
    pub tag_length: u32,
    pub iterations: u32,
    pub parallelism: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_kib: Option<u32>,
}

impl HashSettings {
    pub fn params(&self) -> Argon2Params {
        Argon2Params {
            tag_length: self.tag_length,
            iterations: self.iterations,
            parallelism: self.parallelism,
            memory_kib: self
                .memory_kib
                .unwrap_or_else(|| Argon2Params::default_memory_kib(self.parallelism)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Prefix rendered output with a `Found N characters` line.
    #[serde(default)]
    pub header: bool,
}

/// Effective configuration after all override layers are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub files: FileSettings,
    pub argon2: HashSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    /// Parses a complete configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Loads the built-in defaults bundled with the library.
    pub fn load_default() -> Result<Self, Error> {
        Self::from_toml(DEFAULTS)
    }

    /// Loads configuration with overrides from standard locations.
    ///
    /// Layers, later wins per field:
    /// 1. Built-in defaults
    /// 2. `~/.config/tagbase/config.toml`
    /// 3. `./tagbase.toml`
    /// 4. `explicit`, if given
    ///
    /// Broken files in the standard locations are skipped with a warning; a
    /// broken explicit file is an error.
    pub fn load_with_overrides(explicit: Option<&Path>) -> Result<Self, Error> {
        let mut table = parse_table(DEFAULTS)?;

        let mut candidates = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("tagbase").join("config.toml"));
        }
        candidates.push(PathBuf::from("tagbase.toml"));

        for path in candidates.iter().filter(|p| p.exists()) {
            match load_table(path) {
                Ok(overrides) => {
                    tracing::debug!(path = %path.display(), "applying config overrides");
                    merge(&mut table, overrides);
                }
                Err(e) => tracing::warn!(path = %path.display(), "ignoring config file: {e}"),
            }
        }

        if let Some(path) = explicit {
            merge(&mut table, load_table(path)?);
        }

        toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| Error::Config(e.to_string()))
    }

    /// Expands `~` and environment variables in a configured file name.
    pub fn resolve(name: &str) -> PathBuf {
        match shellexpand::full(name) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => PathBuf::from(name),
        }
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}

const DEFAULTS: &str = include_str!("../../defaults.toml");

fn parse_table(content: &str) -> Result<toml::Table, Error> {
    toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
}

fn load_table(path: &Path) -> Result<toml::Table, Error> {
    let content = std::fs::read_to_string(path).map_err(Error::io(path))?;
    parse_table(&content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
}

/// Recursively overlays `other` onto `base`; nested tables merge key by key.
fn merge(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
