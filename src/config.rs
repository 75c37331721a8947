//! Configuration management
//!
//! The sorter reads `configuration.json` from the working directory. When the
//! file is missing, the defaults are written out and used.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ConfigError;
use crate::keymap;
use crate::state::data::Binding;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "configuration.json";

/// Contents of `configuration.json`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Folder holding the images to sort
    pub source_folder: PathBuf,

    /// Key -> destination, in the order the key guide lists them
    pub destination_folders: IndexMap<String, Destination>,
}

/// A labeled sub-folder of the source folder
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Destination {
    pub label: String,
    pub path: String,
}

impl Destination {
    fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut destination_folders = IndexMap::new();
        destination_folders.insert("1".to_string(), Destination::new("Accept", "accept"));
        destination_folders.insert(
            "2".to_string(),
            Destination::new("Needs Cropping", "needs_cropping"),
        );
        destination_folders.insert(
            "3".to_string(),
            Destination::new("Needs Further Review", "needs_review"),
        );
        destination_folders.insert("4".to_string(), Destination::new("Reject", "reject"));

        Self {
            source_folder: PathBuf::from("images"),
            destination_folders,
        }
    }
}

impl AppConfig {
    /// Load the configuration at `path`, writing the defaults there first if
    /// the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let config: AppConfig = serde_json::from_str(&json)?;
                info!(
                    path = %path.display(),
                    destinations = config.destination_folders.len(),
                    "Configuration loaded"
                );
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                config.save(path)?;
                info!(path = %path.display(), "Wrote default configuration");
                Ok(config)
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check every destination key and resolve it to a key binding.
    ///
    /// Keys must be exactly one alphanumeric character. Letters are folded to
    /// lower case, so "A" and "a" count as the same key.
    pub fn bindings(&self) -> Result<Vec<Binding>, ConfigError> {
        let mut bindings: Vec<Binding> = Vec::with_capacity(self.destination_folders.len());

        for (key, destination) in &self.destination_folders {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_ascii_lowercase(),
                _ => return Err(ConfigError::InvalidKey(key.clone())),
            };

            let key_id = keymap::to_key_id(c)?;

            if bindings.iter().any(|b| b.key == c) {
                return Err(ConfigError::DuplicateKey(c));
            }

            bindings.push(Binding {
                key: c,
                key_id,
                label: destination.label.clone(),
                folder: PathBuf::from(&destination.path),
            });
        }

        Ok(bindings)
    }
}
