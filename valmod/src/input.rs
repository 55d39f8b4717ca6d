//! Reading input documents.

use std::{
    fmt,
    io::{self, Read},
    path::Path,
    str::FromStr,
};

use eyre::{Context, Result};
use tracing::debug;
use valmod_value::{Value, from_json_str, from_toml_str};

/// Path that selects standard input.
pub const STDIN: &str = "-";

/// Supported input document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Json => "json",
            InputFormat::Toml => "toml",
        }
    }

    /// Guess the format from a file extension, defaulting to JSON.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }

    pub fn parse(&self, src: &str) -> Result<Value> {
        let value = match self {
            InputFormat::Json => from_json_str(src)?,
            InputFormat::Toml => from_toml_str(src)?,
        };
        Ok(value)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "toml" => Ok(InputFormat::Toml),
            _ => Err(format!("unknown input format '{}', expected 'json' or 'toml'", s)),
        }
    }
}

/// Read and parse the document at `path`, or stdin for `-`.
pub fn read(path: &Path, format: Option<InputFormat>) -> Result<Value> {
    let format = format.unwrap_or_else(|| InputFormat::detect(path));

    let src = if path.as_os_str() == STDIN {
        let mut src = String::new();
        io::stdin()
            .read_to_string(&mut src)
            .wrap_err("Failed to read standard input")?;
        src
    } else {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?
    };
    debug!(path = %path.display(), %format, bytes = src.len(), "read input");

    format
        .parse(&src)
        .wrap_err_with(|| format!("Failed to parse {} as {}", path.display(), format))
}
