use escala_core::error::EscalaError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3333;

/// Settings for `escala serve`. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
    /// Directory served at `/` (index.html and assets).
    pub static_dir: Option<PathBuf>,
    pub filter_to_reference_month: bool,
    /// Largest accepted request body, both uploads together.
    pub max_upload_bytes: usize,
    /// Run pdftotext in `-layout` mode.
    pub layout: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        ServeConfig {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
            filter_to_reference_month: false,
            max_upload_bytes: 20 * 1024 * 1024,
            layout: false,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub filter_to_reference_month: bool,
    pub max_upload_bytes: Option<usize>,
    pub layout: bool,
}

impl ServeConfig {
    /// Load from an optional TOML file, then apply overrides and validate.
    pub fn load(path: Option<&Path>, overrides: ServeOverrides) -> Result<Self, EscalaError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => ServeConfig::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, EscalaError> {
        let content = std::fs::read_to_string(path).map_err(|e| EscalaError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| EscalaError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn apply(&mut self, o: ServeOverrides) {
        if let Some(host) = o.host {
            self.host = host;
        }
        if let Some(port) = o.port {
            self.port = port;
        }
        if o.static_dir.is_some() {
            self.static_dir = o.static_dir;
        }
        if let Some(max) = o.max_upload_bytes {
            self.max_upload_bytes = max;
        }
        self.filter_to_reference_month |= o.filter_to_reference_month;
        self.layout |= o.layout;
    }

    pub fn validate(&self) -> Result<(), EscalaError> {
        if self.port == 0 {
            return Err(EscalaError::ConfigInvalid("port must not be 0".into()));
        }
        if self.max_upload_bytes == 0 {
            return Err(EscalaError::ConfigInvalid(
                "max_upload_bytes must be greater than 0".into(),
            ));
        }
        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                return Err(EscalaError::ConfigInvalid(format!(
                    "static_dir '{}' is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
