use clap::Args;
use eyre::Result;
use valmod_compiler::Compiler;

use super::{UnwrapOrExit, args::CompileArgs};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CompileArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let options = self.args.options()?;
        let value = self.args.value()?;
        let compiler = Compiler::new(options);
        let module = compiler.compile(&value).unwrap_or_exit();
        let stats = module.stats;

        println!("✓ {} compiles\n", self.args.input.display());
        println!(
            "  {} module, {} layout, cycles: {}",
            compiler.options().module,
            compiler.options().layout,
            compiler.options().cycles
        );
        println!(
            "  {} container{}, {} shared",
            stats.nodes,
            if stats.nodes == 1 { "" } else { "s" },
            stats.shared
        );

        let count = module.declarations.len();
        println!(
            "\n  {} declaration{}:",
            count,
            if count == 1 { "" } else { "s" }
        );
        for name in &module.declarations {
            println!("    {}", name);
        }
        if stats.patches > 0 {
            println!("\n  {} cycle patch{}", stats.patches, if stats.patches == 1 { "" } else { "es" });
        }

        Ok(())
    }
}
