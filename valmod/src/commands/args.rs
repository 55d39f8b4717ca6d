//! Arguments shared by commands that compile a document.

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use valmod_compiler::{CompileOptions, CyclePolicy, Layout, ModuleFormat};
use valmod_value::Value;

use crate::{
    config::ValmodToml,
    input::{self, InputFormat},
};

#[derive(Args)]
pub struct CompileArgs {
    /// Input document (`-` reads stdin)
    pub input: PathBuf,

    /// Input format (defaults to the file extension, then json)
    #[arg(short, long)]
    pub format: Option<InputFormat>,

    /// Path to valmod.toml (defaults to ./valmod.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Binding name of the root declaration
    #[arg(long)]
    pub name: Option<String>,

    /// Module format: esm or cjs
    #[arg(short, long)]
    pub module: Option<ModuleFormat>,

    /// Declaration layout: hoisted or inline
    #[arg(long)]
    pub layout: Option<Layout>,

    /// Cycle handling: reject or patch
    #[arg(long)]
    pub cycles: Option<CyclePolicy>,

    /// Maximum container nesting
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl CompileArgs {
    /// Options from the config file with command-line flags applied on top.
    pub fn options(&self) -> Result<CompileOptions> {
        let config = ValmodToml::load(self.config.as_deref())?;
        Ok(self.apply(config.compile))
    }

    fn apply(&self, mut options: CompileOptions) -> CompileOptions {
        if let Some(name) = &self.name {
            options = options.name(name);
        }
        if let Some(module) = self.module {
            options = options.module(module);
        }
        if let Some(layout) = self.layout {
            options = options.layout(layout);
        }
        if let Some(cycles) = self.cycles {
            options = options.cycles(cycles);
        }
        if let Some(max_depth) = self.max_depth {
            options = options.max_depth(max_depth);
        }
        options
    }

    pub fn value(&self) -> Result<Value> {
        input::read(&self.input, self.format)
    }
}
