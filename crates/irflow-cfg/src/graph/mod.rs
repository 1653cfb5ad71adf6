//! The immutable control-flow graph.

mod dump;


pub use dump::dump;

use std::collections::HashMap;

use irflow_core::NodeId;

use crate::point::FlowPoint;

/// Identity of a basic block, in creation order; the entry block is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct BlockId(u32);

impl BlockId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "B{}", self.0)
    }
}

/// Identity of a connector, in anchor discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct ConnectorId(u32);

impl ConnectorId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// A maximal straight-line run of elements with a single entry and exit.
///
/// Fan-in and fan-out live only at connectors, so a block has at most one
/// connector on each side.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BasicBlock {
    id: BlockId,
    elements: Vec<NodeId>,
    predecessor: Option<ConnectorId>,
    successor: Option<ConnectorId>,
}

impl BasicBlock {
    pub(crate) fn new(
        id: BlockId,
        elements: Vec<NodeId>,
        predecessor: Option<ConnectorId>,
        successor: Option<ConnectorId>,
    ) -> Self {
        Self {
            id,
            elements,
            predecessor,
            successor,
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    /// The straight-line elements, in execution order.
    pub fn elements(&self) -> &[NodeId] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The connector this block flows out of, if any.
    pub fn predecessor(&self) -> Option<ConnectorId> {
        self.predecessor
    }

    /// The connector this block flows into, if any.
    pub fn successor(&self) -> Option<ConnectorId> {
        self.successor
    }
}

/// A branch or merge point anchored at one flow point.
///
/// The anchor is never contained in any block: blocks and connectors
/// partition the function's control points.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BlockConnector {
    id: ConnectorId,
    anchor: FlowPoint,
    predecessors: Vec<BlockId>,
    successors: Vec<BlockId>,
}

impl BlockConnector {
    pub(crate) fn new(
        id: ConnectorId,
        anchor: FlowPoint,
        predecessors: Vec<BlockId>,
        successors: Vec<BlockId>,
    ) -> Self {
        Self {
            id,
            anchor,
            predecessors,
            successors,
        }
    }

    pub fn id(&self) -> ConnectorId {
        self.id
    }

    /// The tree position this connector is anchored at.
    pub fn anchor(&self) -> FlowPoint {
        self.anchor
    }

    /// Blocks flowing into this connector, in discovery order.
    pub fn predecessors(&self) -> &[BlockId] {
        &self.predecessors
    }

    /// Blocks flowing out of this connector, in discovery order.
    pub fn successors(&self) -> &[BlockId] {
        &self.successors
    }
}

/// The complete, immutable graph of one function.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ControlFlowGraph {
    function: NodeId,
    blocks: Vec<BasicBlock>,
    connectors: Vec<BlockConnector>,
    #[serde(skip)]
    block_by_element: HashMap<NodeId, BlockId>,
    #[serde(skip)]
    connector_by_anchor: HashMap<FlowPoint, ConnectorId>,
}

impl ControlFlowGraph {
    pub(crate) fn new(
        function: NodeId,
        blocks: Vec<BasicBlock>,
        connectors: Vec<BlockConnector>,
    ) -> Self {
        let mut block_by_element = HashMap::new();
        for block in &blocks {
            for &element in block.elements() {
                block_by_element.insert(element, block.id());
            }
        }
        let connector_by_anchor = connectors
            .iter()
            .map(|connector| (connector.anchor(), connector.id()))
            .collect();
        Self {
            function,
            blocks,
            connectors,
            block_by_element,
            connector_by_anchor,
        }
    }

    /// The function node this graph was built for.
    pub fn function(&self) -> NodeId {
        self.function
    }

    /// All blocks, by id order.
    pub fn blocks(&self) -> &[BasicBlock] {
        &self.blocks
    }

    /// All connectors, by id order.
    pub fn connectors(&self) -> &[BlockConnector] {
        &self.connectors
    }

    pub fn block(&self, id: BlockId) -> &BasicBlock {
        &self.blocks[id.index()]
    }

    pub fn connector(&self, id: ConnectorId) -> &BlockConnector {
        &self.connectors[id.index()]
    }

    /// The block control enters through, when the function has any code.
    pub fn entry_block(&self) -> Option<&BasicBlock> {
        self.blocks.first()
    }

    /// The block containing `element`, if any.
    pub fn block_of(&self, element: NodeId) -> Option<BlockId> {
        self.block_by_element.get(&element).copied()
    }

    /// The connector anchored at `point`, if any.
    pub fn connector_at(&self, point: FlowPoint) -> Option<ConnectorId> {
        self.connector_by_anchor.get(&point).copied()
    }

    /// Blocks one control step after `id`.
    pub fn block_successors(&self, id: BlockId) -> &[BlockId] {
        match self.block(id).successor() {
            Some(connector) => self.connector(connector).successors(),
            None => &[],
        }
    }

    /// Blocks one control step before `id`.
    pub fn block_predecessors(&self, id: BlockId) -> &[BlockId] {
        match self.block(id).predecessor() {
            Some(connector) => self.connector(connector).predecessors(),
            None => &[],
        }
    }
}
