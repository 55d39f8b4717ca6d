use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tracing::info;
use valmod_compiler::{CompileStats, Compiler};

use super::{UnwrapOrExit, args::CompileArgs};

#[derive(Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: CompileArgs,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print compile statistics to stderr
    #[arg(long)]
    pub stats: bool,
}

impl BuildCommand {
    /// Run the build command
    pub fn run(&self) -> Result<()> {
        let options = self.args.options()?;
        let value = self.args.value()?;
        let module = Compiler::new(options).compile(&value).unwrap_or_exit();

        match &self.output {
            Some(path) => {
                std::fs::write(path, &module.source)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = module.source.len(), "wrote module");
            }
            None => print!("{}", module.source),
        }

        if self.stats {
            print_stats(&module.stats);
        }

        Ok(())
    }
}

fn print_stats(stats: &CompileStats) {
    eprintln!("containers:   {}", stats.nodes);
    eprintln!("shared:       {}", stats.shared);
    eprintln!("declarations: {}", stats.declarations);
    eprintln!("statements:   {}", stats.statements);
    if stats.patches > 0 {
        eprintln!("patches:      {}", stats.patches);
    }
}
