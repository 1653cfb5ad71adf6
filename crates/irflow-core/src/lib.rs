#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core IR tree model for irflow.
//!
//! A function body is a tree of [`NodeKind`] values owned by a [`FunctionIr`]
//! arena and addressed by stable [`NodeId`] handles. The model is the minimal
//! structural surface control-flow construction needs: ordered statement
//! containers, multi-way branches with an optional else result, leaf
//! expressions, and the function wrapper. Node identity is the arena index,
//! so downstream passes can key their maps by plain integers.

mod builder;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod lib_tests;

pub use builder::FunctionIrBuilder;

/// A lightweight handle to a node in a [`FunctionIr`] arena.
///
/// Ids are dense and assigned in creation order. Comparing two ids is O(1);
/// an id is only meaningful together with the arena that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a `NodeId` from a raw index. Use only for ids obtained from
    /// [`NodeId::as_u32`].
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// The arena index behind this id.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// One condition/result pair of a [`NodeKind::Branch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Arm {
    pub condition: NodeId,
    pub result: NodeId,
}

impl Arm {
    pub fn new(condition: NodeId, result: NodeId) -> Self {
        Self { condition, result }
    }
}

/// The closed set of node shapes control-flow construction understands.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum NodeKind {
    /// An atomic statement or expression with no control structure.
    Leaf { label: String },
    /// An ordered statement container.
    Block { statements: Vec<NodeId> },
    /// A multi-way conditional: arms are tried in order, the optional else
    /// result runs when every condition is false.
    Branch {
        arms: Vec<Arm>,
        else_result: Option<NodeId>,
    },
    /// The function wrapper around a body node.
    Function { name: String, body: NodeId },
}

/// Arena-owned IR tree for one function.
///
/// Nodes are stored in creation order; the root is always a
/// [`NodeKind::Function`]. Trees are assumed well-formed (finite, acyclic,
/// ids in range): they come out of earlier construction stages, and a
/// malformed tree is a caller bug, not a runtime condition.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FunctionIr {
    nodes: Vec<NodeKind>,
    root: NodeId,
}

impl FunctionIr {
    pub(crate) fn from_parts(nodes: Vec<NodeKind>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// The root function node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node behind a handle.
    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Statements of a block node, or `None` for any other kind.
    pub fn as_block(&self, id: NodeId) -> Option<&[NodeId]> {
        match self.kind(id) {
            NodeKind::Block { statements } => Some(statements),
            _ => None,
        }
    }

    /// Arms and else result of a branch node, or `None` for any other kind.
    pub fn as_branch(&self, id: NodeId) -> Option<(&[Arm], Option<NodeId>)> {
        match self.kind(id) {
            NodeKind::Branch { arms, else_result } => Some((arms, *else_result)),
            _ => None,
        }
    }

    /// Name and body of a function node, or `None` for any other kind.
    pub fn as_function(&self, id: NodeId) -> Option<(&str, NodeId)> {
        match self.kind(id) {
            NodeKind::Function { name, body } => Some((name, *body)),
            _ => None,
        }
    }

    /// A short display label for a node, for dumps and diagnostics.
    pub fn label(&self, id: NodeId) -> &str {
        match self.kind(id) {
            NodeKind::Leaf { label } => label,
            NodeKind::Block { .. } => "block",
            NodeKind::Branch { .. } => "branch",
            NodeKind::Function { name, .. } => name,
        }
    }

    /// Iterate all node ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }
}
