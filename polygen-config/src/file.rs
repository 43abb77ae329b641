use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "polygen.toml";

/// A polygen.toml file with both raw content and parsed configuration.
#[derive(Debug)]
pub struct PolygenToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl PolygenToml {
    /// Open and parse a polygen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Load the configuration at `path`, or the defaults if no file exists.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if path.exists() {
            Ok(Self::open(path)?.into_config())
        } else {
            Ok(Config::default())
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take the parsed configuration.
    pub fn into_config(self) -> Config {
        self.config
    }
}
