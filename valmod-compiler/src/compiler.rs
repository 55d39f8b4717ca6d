//! The compile pipeline: walk, emit, format.

use tracing::{debug, debug_span};
use valmod_value::Value;

use crate::{
    CompileOptions, Result, emitter::Emitter, formatter, walker::Walker,
};

/// Counters describing one compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    /// Distinct containers reached from the root.
    pub nodes: usize,
    /// Containers reached through more than one slot.
    pub shared: usize,
    pub declarations: usize,
    /// Assignment statements, patches included.
    pub statements: usize,
    /// Assignments that close a cycle.
    pub patches: usize,
}

/// A compiled module.
#[derive(Debug, Clone)]
pub struct CompiledModule {
    /// Module source, ending with a newline.
    pub source: String,
    /// Declared binding names in emission order.
    pub declarations: Vec<String>,
    pub stats: CompileStats,
}

/// Compiles values into module source.
///
/// Each call to [`Compiler::compile`] is independent: names, identity
/// tracking and counters start fresh, so compiling the same value twice
/// yields byte-identical output.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn compile(&self, value: &Value) -> Result<CompiledModule> {
        self.options.validate()?;
        let _span = debug_span!(
            "compile",
            name = %self.options.name,
            layout = %self.options.layout,
            cycles = %self.options.cycles,
        )
        .entered();

        let graph = Walker::new(&self.options).walk(value)?;
        let module = Emitter::new(&graph, &self.options).emit();
        let source = formatter::format(&module, self.options.module);

        let stats = CompileStats {
            nodes: graph.nodes.len(),
            shared: graph.shared_count(),
            declarations: module.declarations.len(),
            statements: module.statement_count(),
            patches: module.patch_count(),
        };
        debug!(?stats, bytes = source.len(), "compiled module");

        Ok(CompiledModule {
            source,
            declarations: module
                .declarations
                .into_iter()
                .map(|decl| decl.name)
                .collect(),
            stats,
        })
    }
}

/// Compile a value with default options.
pub fn compile(value: &Value) -> Result<CompiledModule> {
    Compiler::default().compile(value)
}
