//! Build-once accumulator for one basic block.

use irflow_core::NodeId;

use crate::graph::{BasicBlock, BlockId, ConnectorId};

/// Accumulates the straight-line elements of one block.
///
/// Owned by index inside the function graph builder and consumed exactly
/// once at finalization.
#[derive(Debug, Default)]
pub(crate) struct BasicBlockBuilder {
    elements: Vec<NodeId>,
    /// Connector this block continues from, if any.
    after: Option<ConnectorId>,
    /// Connector this block was closed into, if any.
    target: Option<ConnectorId>,
    closed: bool,
}

impl BasicBlockBuilder {
    pub(crate) fn new(after: Option<ConnectorId>) -> Self {
        Self {
            elements: Vec::new(),
            after,
            target: None,
            closed: false,
        }
    }

    pub(crate) fn add(&mut self, element: NodeId) {
        debug_assert!(!self.closed, "add to a closed block");
        self.elements.push(element);
    }

    /// The trailing element, if any have been added.
    pub(crate) fn last(&self) -> Option<NodeId> {
        self.elements.last().copied()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    /// Freeze the element run and record the connector it flows into.
    pub(crate) fn close(&mut self, target: ConnectorId) {
        debug_assert!(!self.closed, "close a closed block");
        self.closed = true;
        self.target = Some(target);
    }

    pub(crate) fn after(&self) -> Option<ConnectorId> {
        self.after
    }

    /// Finalize into the immutable block.
    pub(crate) fn build(self, id: BlockId) -> BasicBlock {
        BasicBlock::new(id, self.elements, self.after, self.target)
    }
}
