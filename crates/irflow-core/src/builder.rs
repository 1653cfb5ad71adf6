//! Construction of [`FunctionIr`] trees.

use crate::{Arm, FunctionIr, NodeId, NodeKind};

/// Builder for [`FunctionIr`].
///
/// Child nodes are created first and wired into their parents by id; the
/// final [`FunctionIrBuilder::function`] call consumes the builder and
/// produces the finished tree.
#[derive(Debug, Default)]
pub struct FunctionIrBuilder {
    nodes: Vec<NodeKind>,
}

impl FunctionIrBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(kind);
        id
    }

    /// Add a leaf statement or expression.
    pub fn leaf(&mut self, label: impl Into<String>) -> NodeId {
        self.push(NodeKind::Leaf {
            label: label.into(),
        })
    }

    /// Add an ordered statement container.
    pub fn block(&mut self, statements: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::Block { statements })
    }

    /// Add a multi-way branch.
    pub fn branch(&mut self, arms: Vec<Arm>, else_result: Option<NodeId>) -> NodeId {
        self.push(NodeKind::Branch { arms, else_result })
    }

    /// Add a nested function declaration statement.
    pub fn nested_function(&mut self, name: impl Into<String>, body: NodeId) -> NodeId {
        self.push(NodeKind::Function {
            name: name.into(),
            body,
        })
    }

    /// Wrap `body` in the function node and finish the tree.
    pub fn function(mut self, name: impl Into<String>, body: NodeId) -> FunctionIr {
        let root = self.push(NodeKind::Function {
            name: name.into(),
            body,
        });
        FunctionIr::from_parts(self.nodes, root)
    }
}
