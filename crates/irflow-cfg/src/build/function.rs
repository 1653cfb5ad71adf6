//! Incremental assembly of a function's control-flow graph.

use std::collections::HashMap;

use indexmap::IndexMap;
use irflow_core::NodeId;

use crate::graph::{BasicBlock, BlockConnector, BlockId, ConnectorId, ControlFlowGraph};
use crate::point::FlowPoint;

use super::BuildError;
use super::block::BasicBlockBuilder;
use super::connector::BlockConnectorBuilder;

/// Incremental builder for one function's graph.
///
/// Block ids are creation order (the entry block is `B0`), connector ids are
/// anchor discovery order. One forward pass feeds it `add`/`jump` calls; the
/// builder is consumed by [`FunctionGraphBuilder::build`], so it cannot be
/// finalized twice.
#[derive(Debug)]
pub struct FunctionGraphBuilder {
    function: NodeId,
    blocks: Vec<BasicBlockBuilder>,
    connectors: IndexMap<FlowPoint, BlockConnectorBuilder>,
    /// Index of the block receiving plain `add` calls, if one is open.
    current: Option<usize>,
    /// Block index registered at each added element, for `after` resumption.
    resume: HashMap<FlowPoint, usize>,
}

impl FunctionGraphBuilder {
    /// Builder for the graph of `function`.
    pub fn new(function: NodeId) -> Self {
        Self {
            function,
            blocks: Vec::new(),
            connectors: IndexMap::new(),
            current: None,
            resume: HashMap::new(),
        }
    }

    fn open_block(&mut self, after: Option<ConnectorId>) -> usize {
        let index = self.blocks.len();
        self.blocks.push(BasicBlockBuilder::new(after));
        self.current = Some(index);
        index
    }

    fn connector_id(&self, point: FlowPoint) -> Option<ConnectorId> {
        self.connectors
            .get_index_of(&point)
            .map(|index| ConnectorId::from_raw(index as u32))
    }

    /// The connector builder at `point`, registering one if needed.
    fn connector_at(&mut self, point: FlowPoint) -> (ConnectorId, &mut BlockConnectorBuilder) {
        let entry = self.connectors.entry(point);
        let id = ConnectorId::from_raw(entry.index() as u32);
        (id, entry.or_insert_with(|| BlockConnectorBuilder::new(point)))
    }

    /// Append `element` to the open block, opening one if needed.
    ///
    /// A freshly opened block is anchored after the connector already
    /// registered at `element`'s own position, when there is one, so a run
    /// resumed right after a previously discovered seam wires up correctly.
    pub fn add(&mut self, element: NodeId) {
        let point = FlowPoint::Node(element);
        let index = match self.current {
            Some(index) => index,
            None => {
                let after = self.connector_id(point);
                self.open_block(after)
            }
        };
        self.blocks[index].add(element);
        self.resume.insert(point, index);
    }

    /// Resume the run registered at `anchor`, then append `element` to it.
    pub fn add_after(&mut self, element: NodeId, anchor: FlowPoint) -> Result<(), BuildError> {
        let index = self.resume_at(anchor)?;
        self.blocks[index].add(element);
        self.resume.insert(FlowPoint::Node(element), index);
        Ok(())
    }

    /// Close the open block into the connector at `point`, recording the
    /// block as one of its predecessors.
    pub fn jump(&mut self, point: FlowPoint) -> Result<(), BuildError> {
        let Some(index) = self.current.take() else {
            return Err(BuildError::NoOpenBlock { at: point });
        };
        let block = BlockId::from_raw(index as u32);
        let (id, connector) = self.connector_at(point);
        connector.add_previous(block);
        self.blocks[index].close(id);
        Ok(())
    }

    /// Resume at `anchor`, then close into the connector at `point`.
    ///
    /// When `anchor` is itself a connector this produces an empty block
    /// bridging the two connectors, which is how a condition chain's false
    /// edge is represented.
    pub fn jump_after(&mut self, point: FlowPoint, anchor: FlowPoint) -> Result<(), BuildError> {
        self.resume_at(anchor)?;
        self.jump(point)
    }

    /// Re-add every element of an existing block to the open run.
    pub fn add_block(&mut self, block: &BasicBlock) {
        for &element in block.elements() {
            self.add(element);
        }
    }

    /// Re-add every element of an existing block, resuming at `anchor`.
    pub fn add_block_after(&mut self, block: &BasicBlock, anchor: FlowPoint) -> Result<(), BuildError> {
        let mut last = anchor;
        for &element in block.elements() {
            self.add_after(element, last)?;
            last = FlowPoint::Node(element);
        }
        Ok(())
    }

    /// Locate the continuation registered at `anchor` and make it current:
    /// the open block ending there, or a fresh block after the connector
    /// registered there.
    fn resume_at(&mut self, anchor: FlowPoint) -> Result<usize, BuildError> {
        if let Some(&index) = self.resume.get(&anchor) {
            let block = &self.blocks[index];
            if !block.is_closed() {
                if block.last() != anchor.node() {
                    return Err(BuildError::NotAtBlockEnd { anchor });
                }
                self.current = Some(index);
                return Ok(index);
            }
        }
        if let Some(after) = self.connector_id(anchor) {
            return Ok(self.open_block(Some(after)));
        }
        Err(BuildError::UnknownAnchor { anchor })
    }

    /// Finalize every remaining open block and every connector into the
    /// immutable graph. Consuming `self` makes a second build impossible.
    pub fn build(mut self) -> ControlFlowGraph {
        let function = self.function;
        self.current = None;
        // Wire each block to the connector it continues from.
        for index in 0..self.blocks.len() {
            if let Some(after) = self.blocks[index].after() {
                if let Some((_, connector)) = self.connectors.get_index_mut(after.index()) {
                    connector.add_next(BlockId::from_raw(index as u32));
                }
            }
        }
        let blocks: Vec<BasicBlock> = self
            .blocks
            .into_iter()
            .enumerate()
            .map(|(index, builder)| builder.build(BlockId::from_raw(index as u32)))
            .collect();
        let connectors: Vec<BlockConnector> = self
            .connectors
            .into_iter()
            .enumerate()
            .map(|(index, (_, builder))| builder.build(ConnectorId::from_raw(index as u32)))
            .collect();
        ControlFlowGraph::new(function, blocks, connectors)
    }
}
