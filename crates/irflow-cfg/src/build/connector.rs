//! Build-once accumulator for one block connector.

use crate::graph::{BlockConnector, BlockId, ConnectorId};
use crate::point::FlowPoint;

/// Accumulates the predecessor and successor blocks meeting at one seam.
#[derive(Debug)]
pub(crate) struct BlockConnectorBuilder {
    anchor: FlowPoint,
    predecessors: Vec<BlockId>,
    successors: Vec<BlockId>,
}

impl BlockConnectorBuilder {
    pub(crate) fn new(anchor: FlowPoint) -> Self {
        Self {
            anchor,
            predecessors: Vec::new(),
            successors: Vec::new(),
        }
    }

    pub(crate) fn add_previous(&mut self, block: BlockId) {
        self.predecessors.push(block);
    }

    pub(crate) fn add_next(&mut self, block: BlockId) {
        self.successors.push(block);
    }

    /// Finalize into the immutable connector.
    pub(crate) fn build(self, id: ConnectorId) -> BlockConnector {
        BlockConnector::new(id, self.anchor, self.predecessors, self.successors)
    }
}
