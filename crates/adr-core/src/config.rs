use crate::error::Result;
use crate::paths;
use crate::template::MissingTemplate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigSource
// ---------------------------------------------------------------------------

/// Where a loaded [`Config`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_adr_directory")]
    pub adr_directory: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adr_template: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_template: Option<PathBuf>,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Fail instead of falling back to the built-in when an override
    /// template cannot be read.
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict_templates: bool,
}

fn default_adr_directory() -> PathBuf {
    PathBuf::from(paths::RECORD_DIR)
}

fn default_date_format() -> String {
    "%Y/%m/%d".to_string()
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adr_directory: default_adr_directory(),
            adr_template: None,
            toc_template: None,
            date_format: default_date_format(),
            strict_templates: false,
        }
    }
}

impl Config {
    /// Read the config at `path`. `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if data.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(Some(cfg))
    }

    /// Read the config at `path`, falling back to defaults when it is missing.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource)> {
        match Self::load(path)? {
            Some(cfg) => Ok((cfg, ConfigSource::File)),
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }

    /// The record directory, resolved against `base` when relative.
    pub fn record_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.adr_directory)
    }

    pub fn missing_template_policy(&self) -> MissingTemplate {
        if self.strict_templates {
            MissingTemplate::Fail
        } else {
            MissingTemplate::UseBuiltin
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
