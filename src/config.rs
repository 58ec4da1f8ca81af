use std::path::Path;

use eyre::{Result, WrapErr};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub const CONFIG_FILE: &str = "config.json";
pub const INPUT_FILE: &str = "input.json";
pub const OUTPUT_FILE: &str = "output.json";
pub const LOG_FILE: &str = "output.log";

pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    #[serde(deserialize_with = "lang_or_default")]
    pub lang: String,
}

// A null "lang" falls back to the default like an absent one
fn lang_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| DEFAULT_LANG.to_string()))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl Config {
    /// Load the configuration file; a missing or malformed file is an error
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path).wrap_err("failed to load configuration")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Input {
    pub url: Option<String>,
}

impl Input {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path).wrap_err("failed to load input")
    }

    /// The URL, if present and not blank
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {}", path.display());
    let content = std::fs::read_to_string(path).wrap_err_with(|| format!("could not read {}", path.display()))?;
    let value = serde_json::from_str(&content).wrap_err_with(|| format!("could not parse {}", path.display()))?;
    Ok(value)
}
