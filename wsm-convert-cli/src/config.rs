//! Job file loading and parsing
//!
//! A job file is a small TOML document naming the input and (optionally)
//! the output path, so a recurring conversion can be rerun without
//! retyping paths.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A conversion job (loaded from a TOML file)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// WSM export to convert
    pub file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Destination for the WWB import file
    pub file: PathBuf,
}

pub fn load_config(path: &Path) -> Result<JobConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file: {:?}", path))?;

    let config: JobConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse job file: {:?}", path))?;

    Ok(config)
}
