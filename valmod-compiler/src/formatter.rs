//! Source formatting.
//!
//! Lays out a [`Module`] as text: each declaration group as one block,
//! blocks separated by a blank line, and the export statement last.

use valmod_codegen::{CodeBuilder, Renderable, js::Export};

use crate::{ModuleFormat, emitter::Module};

const USE_STRICT: &str = "\"use strict\";";

/// Render a module. The result always ends with a newline.
pub(crate) fn format(module: &Module, format: ModuleFormat) -> String {
    let export = match format {
        ModuleFormat::Esm => Export::default(&module.export),
        ModuleFormat::CommonJs => Export::common_js(&module.export),
    };

    CodeBuilder::new()
        .when(format == ModuleFormat::CommonJs, |b| b.line(USE_STRICT).blank())
        .each(&module.declarations, |mut b, decl| {
            b.emit(decl);
            b
        })
        .each(export.to_fragments(), |mut b, fragment| {
            b.apply_fragment(fragment);
            b
        })
        .build()
}
