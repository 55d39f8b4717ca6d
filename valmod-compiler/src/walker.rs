//! Graph walking.
//!
//! The walker turns a value graph into an arena of [`Node`]s. Containers
//! are keyed by identity, so a container reached through several slots
//! becomes one node with a reference count above one. Nodes are finalized
//! in postorder: every child is complete before its parent, which makes the
//! finalize order a valid declaration order.

use std::collections::HashMap;

use tracing::{debug, trace};
use valmod_value::Value;

use crate::{
    CompileOptions, CyclePolicy, Error, Primitive, Result, Segment, ValuePath,
    classify::{Variant, classify},
};

/// Index of a node in the [`Graph`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Array { length: usize },
    Object,
}

/// What a slot holds: an inline primitive or another node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Operand {
    Primitive(Primitive),
    Node(NodeId),
}

/// A slot of a container and what it holds.
#[derive(Debug, Clone)]
pub(crate) struct Edge {
    pub slot: Segment,
    pub operand: Operand,
    /// Points at a container that was still being walked, i.e. closes a
    /// cycle. Only produced under [`CyclePolicy::Patch`].
    pub back: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub shape: Shape,
    /// Array elements in ascending index order, then properties in
    /// insertion order.
    pub edges: Vec<Edge>,
    /// Arrays: no holes and no extra properties. Objects: always.
    pub dense: bool,
    /// Number of slots referring to this node, plus one for the root.
    pub refs: usize,
    /// Some descendant refers back to this node.
    pub cycle_target: bool,
    /// Where the node was first reached.
    pub path: ValuePath,
    done: bool,
}

impl Node {
    pub fn is_shared(&self) -> bool {
        self.refs > 1
    }

    pub fn has_back_edge(&self) -> bool {
        self.edges.iter().any(|edge| edge.back)
    }

    pub fn is_flat(&self) -> bool {
        self.edges
            .iter()
            .all(|edge| matches!(edge.operand, Operand::Primitive(_)))
    }
}

/// The walked value graph.
#[derive(Debug)]
pub(crate) struct Graph {
    pub nodes: Vec<Node>,
    /// Node ids in finalize (postorder) order.
    pub order: Vec<NodeId>,
    pub root: Operand,
}

impl Graph {
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.root == Operand::Node(id)
    }

    pub fn shared_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_shared()).count()
    }
}

/// Depth-first walker. One instance walks one graph.
pub(crate) struct Walker<'a> {
    options: &'a CompileOptions,
    nodes: Vec<Node>,
    identity: HashMap<usize, NodeId>,
    order: Vec<NodeId>,
    path: ValuePath,
}

impl<'a> Walker<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            identity: HashMap::new(),
            order: Vec::new(),
            path: ValuePath::root(),
        }
    }

    pub fn walk(mut self, root: &Value) -> Result<Graph> {
        let root = self.visit(root, 0)?;
        let graph = Graph {
            nodes: self.nodes,
            order: self.order,
            root,
        };
        debug!(
            nodes = graph.nodes.len(),
            shared = graph.shared_count(),
            "walked value graph"
        );
        Ok(graph)
    }

    fn visit(&mut self, value: &Value, depth: usize) -> Result<Operand> {
        match classify(value) {
            Variant::Primitive(primitive) => Ok(Operand::Primitive(primitive)),
            Variant::Unsupported(kind) => Err(Error::unsupported(kind, self.path.clone())),
            Variant::Array(array) => {
                if let Some(id) = self.revisit(array.id())? {
                    return Ok(Operand::Node(id));
                }
                self.check_depth(depth)?;
                if !array.has_valid_length() {
                    return Err(Error::invalid_array_length(array.len(), self.path.clone()));
                }
                let shape = Shape::Array {
                    length: array.len(),
                };
                let id = self.allocate(array.id(), shape, array.is_dense());

                let mut edges = Vec::with_capacity(array.element_count());
                for (index, element) in array.elements() {
                    edges.push(self.edge(Segment::Index(index), &element, depth)?);
                }
                for (key, property) in array.properties() {
                    edges.push(self.edge(Segment::Key(key), &property, depth)?);
                }
                Ok(self.finalize(id, edges))
            }
            Variant::Object(object) => {
                if let Some(id) = self.revisit(object.id())? {
                    return Ok(Operand::Node(id));
                }
                self.check_depth(depth)?;
                let id = self.allocate(object.id(), Shape::Object, true);

                let mut edges = Vec::with_capacity(object.len());
                for (key, property) in object.entries() {
                    edges.push(self.edge(Segment::Key(key), &property, depth)?);
                }
                Ok(self.finalize(id, edges))
            }
        }
    }

    /// Look up an already visited container and count the new reference.
    fn revisit(&mut self, identity: usize) -> Result<Option<NodeId>> {
        let Some(&id) = self.identity.get(&identity) else {
            return Ok(None);
        };
        let node = &mut self.nodes[id.0];
        node.refs += 1;

        if !node.done {
            match self.options.cycles {
                CyclePolicy::Reject => {
                    return Err(Error::circular(self.path.clone(), node.path.clone()));
                }
                CyclePolicy::Patch => {
                    trace!(at = %self.path, target = %node.path, "cycle will be patched");
                    node.cycle_target = true;
                }
            }
        }
        Ok(Some(id))
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.options.max_depth {
            return Err(Error::depth_exceeded(
                self.options.max_depth,
                self.path.clone(),
            ));
        }
        Ok(())
    }

    fn allocate(&mut self, identity: usize, shape: Shape, dense: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            shape,
            edges: Vec::new(),
            dense,
            refs: 1,
            cycle_target: false,
            path: self.path.clone(),
            done: false,
        });
        self.identity.insert(identity, id);
        id
    }

    fn edge(&mut self, slot: Segment, value: &Value, depth: usize) -> Result<Edge> {
        self.path.push(slot.clone());
        let operand = self.visit(value, depth + 1);
        self.path.pop();

        let operand = operand?;
        let back = match operand {
            Operand::Node(id) => !self.nodes[id.0].done,
            Operand::Primitive(_) => false,
        };
        Ok(Edge {
            slot,
            operand,
            back,
        })
    }

    fn finalize(&mut self, id: NodeId, edges: Vec<Edge>) -> Operand {
        let node = &mut self.nodes[id.0];
        node.edges = edges;
        node.done = true;
        self.order.push(id);
        Operand::Node(id)
    }
}
