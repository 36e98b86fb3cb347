pub mod init;
pub mod list;
pub mod new;
pub mod toc;
pub mod version;

use adr_core::config::{Config, ConfigSource};
use anyhow::Context as _;
use std::path::{Path, PathBuf};

/// Per-invocation inputs shared by every command.
pub struct Context {
    pub config_path: PathBuf,
    pub cwd: PathBuf,
    pub json: bool,
}

impl Context {
    /// Config path as given, resolved against the working directory.
    pub fn config_file(&self) -> PathBuf {
        self.cwd.join(&self.config_path)
    }

    /// Load the config, or defaults with a notice when the file is missing.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let path = self.config_file();
        let (config, source) = Config::load_or_default(&path)
            .with_context(|| format!("failed to load {}", self.config_path.display()))?;
        if source == ConfigSource::Defaults {
            println!("no config found, using defaults");
        }
        Ok(config)
    }

    /// Load the config, failing when the file is missing.
    pub fn require_config(&self) -> anyhow::Result<Config> {
        let path = self.config_file();
        Config::load(&path)
            .with_context(|| format!("failed to load {}", self.config_path.display()))?
            .ok_or_else(|| adr_core::AdrError::NotInitialized(self.config_path.clone()).into())
    }

    pub fn record_dir(&self, config: &Config) -> PathBuf {
        config.record_dir(&self.cwd)
    }

    /// Optional config path (a template override), resolved against the
    /// working directory.
    pub fn resolve_path(&self, path: Option<&Path>) -> Option<PathBuf> {
        path.filter(|p| !p.as_os_str().is_empty())
            .map(|p| self.cwd.join(p))
    }
}

/// `path` relative to the working directory when it lies inside it.
pub fn display_path<'a>(cwd: &Path, path: &'a Path) -> std::path::Display<'a> {
    path.strip_prefix(cwd).unwrap_or(path).display()
}
