//! Declaration emitting.
//!
//! Walks the finalized graph in postorder and turns every node that needs a
//! binding into a [`Declaration`]: a `const` initializer followed by the
//! statements that fill in the remaining slots. Everything else is written
//! inline at its point of use.

use std::collections::HashMap;

use tracing::debug;
use valmod_codegen::{
    CodeFragment, Renderable,
    js::{Assign, Const, DefineProperty},
};

use crate::{
    CompileOptions, Layout, Segment, encoder,
    walker::{Graph, Node, NodeId, Operand, Shape},
};

/// A statement run after a declaration's initializer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Statement {
    Assign(Assign),
    Define(DefineProperty),
}

impl Statement {
    /// Assign `value` to `slot` of the container bound to `object`.
    fn slot(object: &str, slot: &Segment, value: String) -> Self {
        match slot {
            Segment::Key(key) if key == encoder::PROTO_KEY => {
                Statement::Define(DefineProperty::new(object, encoder::string(key), value))
            }
            _ => Statement::Assign(Assign::new(encoder::member(object, slot), value)),
        }
    }
}

impl Renderable for Statement {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Statement::Assign(assign) => assign.to_fragments(),
            Statement::Define(define) => define.to_fragments(),
        }
    }
}

/// A named top-level binding for one container.
#[derive(Debug, Clone)]
pub(crate) struct Declaration {
    pub name: String,
    pub init: String,
    pub statements: Vec<Statement>,
    /// Back references into this container, assignable only once it exists.
    pub patches: Vec<Statement>,
}

/// One block: the `const`, its statements, its patches, then a blank line.
impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Const::new(&self.name, &self.init).to_fragments();
        fragments.extend(self.statements.as_slice().to_fragments());
        fragments.extend(self.patches.as_slice().to_fragments());
        fragments.push(CodeFragment::blank());
        fragments
    }
}

/// Declarations in emission order plus the exported expression.
#[derive(Debug, Clone)]
pub(crate) struct Module {
    pub declarations: Vec<Declaration>,
    pub export: String,
}

impl Module {
    pub fn statement_count(&self) -> usize {
        self.declarations
            .iter()
            .map(|decl| decl.statements.len() + decl.patches.len())
            .sum()
    }

    pub fn patch_count(&self) -> usize {
        self.declarations.iter().map(|decl| decl.patches.len()).sum()
    }
}

/// Hands out declaration names for one compilation.
#[derive(Debug)]
struct Namer {
    base: String,
    next: usize,
}

impl Namer {
    fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            next: 1,
        }
    }

    fn root(&self) -> String {
        self.base.clone()
    }

    fn next(&mut self) -> String {
        let name = format!("{}_{}", self.base, self.next);
        self.next += 1;
        name
    }
}

pub(crate) struct Emitter<'a> {
    graph: &'a Graph,
    layout: Layout,
    names: Vec<Option<String>>,
}

impl<'a> Emitter<'a> {
    pub fn new(graph: &'a Graph, options: &CompileOptions) -> Self {
        let mut emitter = Self {
            graph,
            layout: options.layout,
            names: vec![None; graph.nodes.len()],
        };
        emitter.assign_names(&options.name);
        emitter
    }

    /// Name every node that needs a declaration, in finalize order.
    fn assign_names(&mut self, base: &str) {
        let mut namer = Namer::new(base);
        for &id in &self.graph.order {
            if !self.needs_declaration(self.graph.node(id)) {
                continue;
            }
            let name = if self.graph.is_root(id) {
                namer.root()
            } else {
                namer.next()
            };
            self.names[id.index()] = Some(name);
        }
    }

    fn needs_declaration(&self, node: &Node) -> bool {
        match self.layout {
            Layout::Hoisted => true,
            Layout::Inline => {
                node.is_shared() || !node.dense || node.cycle_target || node.has_back_edge()
            }
        }
    }

    /// Whether a declared node can be initialized with its full literal.
    fn literal_init(&self, node: &Node) -> bool {
        if !node.dense || node.has_back_edge() {
            return false;
        }
        match self.layout {
            Layout::Hoisted => node.is_flat(),
            Layout::Inline => true,
        }
    }

    pub fn emit(self) -> Module {
        let mut pending: HashMap<NodeId, Vec<Statement>> = HashMap::new();
        let mut declarations = Vec::new();

        for &id in &self.graph.order {
            if let Some(name) = &self.names[id.index()] {
                declarations.push(self.declare(id, name, &mut pending));
            }
        }

        let export = self.expr(&self.graph.root);
        debug!(declarations = declarations.len(), "emitted declarations");
        Module {
            declarations,
            export,
        }
    }

    fn declare(
        &self,
        id: NodeId,
        name: &str,
        pending: &mut HashMap<NodeId, Vec<Statement>>,
    ) -> Declaration {
        let node = self.graph.node(id);

        if self.literal_init(node) {
            return Declaration {
                name: name.to_string(),
                init: self.literal(node),
                statements: Vec::new(),
                patches: pending.remove(&id).unwrap_or_default(),
            };
        }

        let (init, trailing_length) = match node.shape {
            Shape::Array { length } => ("[]", trailing_length(node, length)),
            Shape::Object => ("{}", None),
        };

        let mut statements = Vec::with_capacity(node.edges.len());
        let mut length = trailing_length;
        for edge in &node.edges {
            if matches!(edge.slot, Segment::Key(_))
                && let Some(length) = length.take()
            {
                statements.push(length_statement(name, length));
            }

            if edge.back {
                let Operand::Node(target) = edge.operand else {
                    unreachable!("back edges always point at nodes");
                };
                if matches!(edge.slot, Segment::Key(_)) {
                    // Reserve the key's position; the real value comes later.
                    statements.push(Statement::slot(name, &edge.slot, "undefined".into()));
                }
                pending
                    .entry(target)
                    .or_default()
                    .push(Statement::slot(name, &edge.slot, self.name_of(target)));
            } else {
                statements.push(Statement::slot(name, &edge.slot, self.expr(&edge.operand)));
            }
        }
        if let Some(length) = length {
            statements.push(length_statement(name, length));
        }

        Declaration {
            name: name.to_string(),
            init: init.to_string(),
            statements,
            patches: pending.remove(&id).unwrap_or_default(),
        }
    }

    /// The expression for a slot: a primitive literal, a declaration name,
    /// or an inline container literal.
    fn expr(&self, operand: &Operand) -> String {
        match operand {
            Operand::Primitive(primitive) => encoder::primitive(primitive),
            Operand::Node(id) => match &self.names[id.index()] {
                Some(name) => name.clone(),
                None => self.literal(self.graph.node(*id)),
            },
        }
    }

    fn literal(&self, node: &Node) -> String {
        match node.shape {
            Shape::Array { .. } => {
                encoder::array_literal(node.edges.iter().map(|edge| self.expr(&edge.operand)))
            }
            Shape::Object => encoder::object_literal(node.edges.iter().map(|edge| {
                let key = match &edge.slot {
                    Segment::Key(key) => key.as_str(),
                    Segment::Index(_) => unreachable!("objects only have keyed slots"),
                };
                (key, self.expr(&edge.operand))
            })),
        }
    }

    fn name_of(&self, id: NodeId) -> String {
        self.names[id.index()]
            .clone()
            .unwrap_or_else(|| unreachable!("cycle targets are always declared"))
    }
}

/// The length to assign explicitly when an array ends in holes.
fn trailing_length(node: &Node, length: usize) -> Option<usize> {
    let end = node
        .edges
        .iter()
        .filter_map(|edge| match edge.slot {
            Segment::Index(index) => Some(index + 1),
            Segment::Key(_) => None,
        })
        .max()
        .unwrap_or(0);
    (length > end).then_some(length)
}

fn length_statement(name: &str, length: usize) -> Statement {
    Statement::Assign(Assign::new(format!("{}.length", name), length.to_string()))
}

#[cfg(test)]
mod tests {
    use valmod_value::{ArrayValue, ObjectValue, Value};

    use super::*;
    use crate::{CyclePolicy, walker::Walker};

    fn emit(value: Value, options: &CompileOptions) -> Module {
        let graph = Walker::new(options).walk(&value).unwrap();
        Emitter::new(&graph, options).emit()
    }

    fn names(module: &Module) -> Vec<&str> {
        module
            .declarations
            .iter()
            .map(|decl| decl.name.as_str())
            .collect()
    }

    #[test]
    fn test_namer() {
        let mut namer = Namer::new("data");
        assert_eq!(namer.root(), "data");
        assert_eq!(namer.next(), "data_1");
        assert_eq!(namer.next(), "data_2");
    }

    #[test]
    fn test_hoisted_names_follow_postorder() {
        let value = ArrayValue::from_elements([
            Value::from(ArrayValue::from_elements([1])),
            ObjectValue::new().with("a", ArrayValue::new()).into(),
        ]);
        let module = emit(value.into(), &CompileOptions::default());

        assert_eq!(names(&module), ["value_1", "value_2", "value_3", "value"]);
        assert_eq!(module.declarations[0].init, "[1]");
        assert_eq!(module.declarations[1].init, "[]");
        assert_eq!(module.declarations[2].init, "{}");
        assert_eq!(module.export, "value");
    }

    #[test]
    fn test_inline_layout_inlines_regular_values() {
        let value = ObjectValue::new()
            .with("list", ArrayValue::from_elements([1, 2]))
            .with("nested", ObjectValue::new().with("ok", true));
        let options = CompileOptions::new().layout(Layout::Inline);
        let module = emit(value.into(), &options);

        assert!(module.declarations.is_empty());
        assert_eq!(module.export, "{ list: [1, 2], nested: { ok: true } }");
    }

    #[test]
    fn test_inline_layout_declares_shared_values() {
        let shared = ArrayValue::from_elements([1]);
        let value = ObjectValue::new()
            .with("a", shared.clone())
            .with("b", shared);
        let options = CompileOptions::new().layout(Layout::Inline);
        let module = emit(value.into(), &options);

        assert_eq!(names(&module), ["value_1"]);
        assert_eq!(module.declarations[0].init, "[1]");
        assert_eq!(module.export, "{ a: value_1, b: value_1 }");
    }

    #[test]
    fn test_trailing_holes_set_length() {
        let array = ArrayValue::with_length(5);
        array.set(1, "x");
        array.set_property("tag", 1).unwrap();
        let module = emit(array.into(), &CompileOptions::default());

        let lines: Vec<String> = module.declarations[0]
            .statements
            .iter()
            .flat_map(|stmt| stmt.to_fragments())
            .map(|fragment| match fragment {
                CodeFragment::Line(line) => line,
                other => panic!("unexpected fragment {:?}", other),
            })
            .collect();
        assert_eq!(
            lines,
            ["value[1] = \"x\";", "value.length = 5;", "value.tag = 1;"]
        );
    }

    #[test]
    fn test_self_reference_is_patched() {
        let array = ArrayValue::new();
        array.push(1);
        array.push(array.clone());
        let options = CompileOptions::new().cycles(CyclePolicy::Patch);
        let module = emit(array.into(), &options);

        let decl = &module.declarations[0];
        assert_eq!(decl.init, "[]");
        assert_eq!(
            decl.statements,
            [Statement::Assign(Assign::new("value[0]", "1"))]
        );
        assert_eq!(
            decl.patches,
            [Statement::Assign(Assign::new("value[1]", "value"))]
        );
    }

    #[test]
    fn test_patched_object_key_keeps_position() {
        let root = ObjectValue::new();
        let child = ObjectValue::new();
        child.insert("parent", root.clone());
        child.insert("name", "child");
        root.insert("child", child);
        let options = CompileOptions::new()
            .cycles(CyclePolicy::Patch)
            .layout(Layout::Inline);
        let module = emit(root.into(), &options);

        assert_eq!(names(&module), ["value_1", "value"]);
        let child = &module.declarations[0];
        assert_eq!(
            child.statements,
            [
                Statement::Assign(Assign::new("value_1.parent", "undefined")),
                Statement::Assign(Assign::new("value_1.name", "\"child\"")),
            ]
        );
        let root = &module.declarations[1];
        assert_eq!(root.init, "{ child: value_1 }");
        assert_eq!(
            root.patches,
            [Statement::Assign(Assign::new("value_1.parent", "value"))]
        );
    }

    #[test]
    fn test_proto_key_uses_define_property() {
        let value = ObjectValue::new().with("__proto__", ArrayValue::from_elements([1]));
        let module = emit(value.into(), &CompileOptions::default());

        let decl = &module.declarations[1];
        assert_eq!(
            decl.statements,
            [Statement::Define(DefineProperty::new(
                "value",
                "\"__proto__\"",
                "value_1"
            ))]
        );
    }

    #[test]
    fn test_statement_counts() {
        let array = ArrayValue::with_length(3);
        array.set(0, 1);
        array.set(2, 2);
        let module = emit(array.into(), &CompileOptions::default());
        assert_eq!(module.statement_count(), 2);
        assert_eq!(module.patch_count(), 0);
    }
}
