//! Format-agnostic configuration loading and saving

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = path.extension().unwrap_or_default();

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error(path, "TOML", e)),
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(path, "JSON", e)),
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(path, "YAML", e))
            }
            _ => Err(Error::UnsupportedFormat {
                extension: extension.clone(),
            }),
        }
    }

    /// Save configuration to a file atomically.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let extension = path.extension().unwrap_or_default();

        let content = match extension.as_str() {
            "toml" => {
                toml::to_string_pretty(value).map_err(|e| serialize_error(path, "TOML", e))?
            }
            "json" => serde_json::to_string_pretty(value)
                .map_err(|e| serialize_error(path, "JSON", e))?,
            "yaml" | "yml" => {
                serde_yaml::to_string(value).map_err(|e| serialize_error(path, "YAML", e))?
            }
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.clone(),
                });
            }
        };

        io::write_atomic(path, content.as_bytes())
    }
}

fn parse_error(path: &NormalizedPath, format: &str, e: impl std::fmt::Display) -> Error {
    Error::ConfigParse {
        path: path.to_native(),
        format: format.into(),
        message: e.to_string(),
    }
}

fn serialize_error(path: &NormalizedPath, format: &str, e: impl std::fmt::Display) -> Error {
    Error::ConfigSerialize {
        path: path.to_native(),
        format: format.into(),
        message: e.to_string(),
    }
}
