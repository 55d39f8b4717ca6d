//! Compiler configuration.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use valmod_codegen::js::{is_common_js_binding, is_identifier_name, is_reserved_word};

use crate::{Error, Result};

/// Default base name for the root declaration.
pub const DEFAULT_NAME: &str = "value";

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How the root value is exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// `export default value;`
    #[default]
    Esm,
    /// `module.exports = value;`
    #[serde(rename = "cjs", alias = "commonjs")]
    CommonJs,
}

impl ModuleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleFormat::Esm => "esm",
            ModuleFormat::CommonJs => "cjs",
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "esm" | "es" | "module" => Ok(ModuleFormat::Esm),
            "cjs" | "commonjs" => Ok(ModuleFormat::CommonJs),
            _ => Err(format!("unknown module format '{}', expected 'esm' or 'cjs'", s)),
        }
    }
}

/// Which compound values get their own declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Every array and object is declared. Plain lists and objects holding
    /// only primitives are initialized with a literal, everything else is
    /// built up with one assignment per slot.
    #[default]
    Hoisted,
    /// Only shared, sparse, property-carrying, or cycle-involved containers
    /// are declared; everything else is written inline where it is used.
    Inline,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Hoisted => "hoisted",
            Layout::Inline => "inline",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hoisted" => Ok(Layout::Hoisted),
            "inline" => Ok(Layout::Inline),
            _ => Err(format!("unknown layout '{}', expected 'hoisted' or 'inline'", s)),
        }
    }
}

/// What to do when a container is reachable from itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Fail with [`Error::CircularReference`].
    #[default]
    Reject,
    /// Declare the container first and assign the back reference after it.
    Patch,
}

impl CyclePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePolicy::Reject => "reject",
            CyclePolicy::Patch => "patch",
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(CyclePolicy::Reject),
            "patch" => Ok(CyclePolicy::Patch),
            _ => Err(format!("unknown cycle policy '{}', expected 'reject' or 'patch'", s)),
        }
    }
}

/// Options for one compilation.
///
/// Deserializable from a table like:
///
/// ```toml
/// name = "config"
/// module = "cjs"
/// layout = "inline"
/// cycles = "patch"
/// max-depth = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CompileOptions {
    /// Binding name of the root declaration; other declarations are
    /// `<name>_1`, `<name>_2`, and so on.
    pub name: String,
    pub module: ModuleFormat,
    pub layout: Layout,
    pub cycles: CyclePolicy,
    /// Maximum number of nested containers.
    pub max_depth: usize,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn module(mut self, module: ModuleFormat) -> Self {
        self.module = module;
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn cycles(mut self, cycles: CyclePolicy) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check that the base name can be used as a top-level binding in the
    /// chosen module format.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier_name(&self.name) {
            return Err(Error::invalid_name(
                &self.name,
                "use only letters, digits, '_' and '$', starting with a letter, '_' or '$'",
            ));
        }
        if is_reserved_word(&self.name) {
            return Err(Error::invalid_name(
                &self.name,
                format!("'{}' is reserved in JavaScript modules", self.name),
            ));
        }
        if self.module == ModuleFormat::CommonJs && is_common_js_binding(&self.name) {
            return Err(Error::invalid_name(
                &self.name,
                format!("'{}' is bound by the CommonJS module wrapper", self.name),
            ));
        }
        Ok(())
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            module: ModuleFormat::default(),
            layout: Layout::default(),
            cycles: CyclePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
