//! The `valmod.toml` project file.
//!
//! ```toml
//! [compile]
//! name = "config"
//! module = "cjs"
//! layout = "inline"
//! ```

use std::path::Path;

use eyre::{Context, Result};
use serde::Deserialize;
use tracing::debug;
use valmod_compiler::CompileOptions;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "valmod.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValmodToml {
    #[serde(default)]
    pub compile: CompileOptions,
}

impl ValmodToml {
    pub fn parse(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&src).wrap_err_with(|| format!("Invalid {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load an explicitly named file, or `valmod.toml` if present, or
    /// fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::open(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.is_file() {
                    Self::open(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
