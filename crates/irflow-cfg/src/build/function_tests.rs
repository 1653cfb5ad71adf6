//! Unit tests for the function graph builder, driven by hand.

use irflow_core::NodeId;

use crate::graph::{BlockId, ConnectorId};
use crate::point::FlowPoint;

use super::BuildError;
use super::function::FunctionGraphBuilder;

fn n(i: u32) -> NodeId {
    NodeId::from_raw(i)
}

fn p(i: u32) -> FlowPoint {
    FlowPoint::Node(n(i))
}

fn b(i: u32) -> BlockId {
    BlockId::from_raw(i)
}

fn c(i: u32) -> ConnectorId {
    ConnectorId::from_raw(i)
}

#[test]
fn plain_adds_make_one_block() {
    let mut builder = FunctionGraphBuilder::new(n(99));
    builder.add(n(0));
    builder.add(n(1));
    builder.add(n(2));
    let graph = builder.build();

    assert_eq!(graph.blocks().len(), 1);
    assert!(graph.connectors().is_empty());
    let entry = graph.entry_block().unwrap();
    assert_eq!(entry.elements(), &[n(0), n(1), n(2)]);
    assert_eq!(entry.predecessor(), None);
    assert_eq!(entry.successor(), None);
    assert_eq!(graph.function(), n(99));
}

#[test]
fn jump_closes_the_block_into_a_connector() {
    let mut builder = FunctionGraphBuilder::new(n(99));
    builder.add(n(0));
    builder.jump(p(1)).unwrap();
    builder.add_after(n(2), p(1)).unwrap();
    let graph = builder.build();

    assert_eq!(graph.blocks().len(), 2);
    assert_eq!(graph.connectors().len(), 1);

    let entry = graph.block(b(0));
    assert_eq!(entry.elements(), &[n(0)]);
    assert_eq!(entry.successor(), Some(c(0)));

    let resumed = graph.block(b(1));
    assert_eq!(resumed.elements(), &[n(2)]);
    assert_eq!(resumed.predecessor(), Some(c(0)));

    let connector = graph.connector(c(0));
    assert_eq!(connector.anchor(), p(1));
    assert_eq!(connector.predecessors(), &[b(0)]);
    assert_eq!(connector.successors(), &[b(1)]);
}

#[test]
fn jump_without_an_open_block_is_an_error() {
    let mut builder = FunctionGraphBuilder::new(n(99));
    assert_eq!(
        builder.jump(p(1)),
        Err(BuildError::NoOpenBlock { at: p(1) })
    );
}

#[test]
fn resuming_at_an_unknown_anchor_is_an_error() {
    let mut builder = FunctionGraphBuilder::new(n(99));
    builder.add(n(0));
    assert_eq!(
        builder.add_after(n(5), p(7)),
        Err(BuildError::UnknownAnchor { anchor: p(7) })
    );
}

#[test]
fn resuming_mid_block_is_an_error() {
    let mut builder = FunctionGraphBuilder::new(n(99));
    builder.add(n(0));
    builder.add(n(1));
    assert_eq!(
        builder.add_after(n(5), p(0)),
        Err(BuildError::NotAtBlockEnd { anchor: p(0) })
    );
}

#[test]
fn resuming_at_a_trailing_element_extends_the_block() {
    let mut builder = FunctionGraphBuilder::new(n(99));
    builder.add(n(0));
    builder.add_after(n(1), p(0)).unwrap();
    let graph = builder.build();

    assert_eq!(graph.blocks().len(), 1);
    assert_eq!(graph.entry_block().unwrap().elements(), &[n(0), n(1)]);
}

#[test]
fn a_connector_aggregates_predecessors_across_jumps() {
    // Mirrors `a; if (cond) b else c; d` fed by hand: the merge point is
    // jumped once per arm and must end up with both arm blocks.
    let cond = p(1);
    let merge = FlowPoint::Sink(n(4));

    let mut builder = FunctionGraphBuilder::new(n(99));
    builder.add(n(0));
    builder.jump(cond).unwrap();
    builder.add_after(n(2), cond).unwrap();
    builder.jump(merge).unwrap();
    builder.add_after(n(3), cond).unwrap();
    builder.jump(merge).unwrap();
    builder.add_after(n(5), merge).unwrap();
    let graph = builder.build();

    assert_eq!(graph.blocks().len(), 4);
    assert_eq!(graph.connectors().len(), 2);

    let fan_out = graph.connector(c(0));
    assert_eq!(fan_out.anchor(), cond);
    assert_eq!(fan_out.predecessors(), &[b(0)]);
    assert_eq!(fan_out.successors(), &[b(1), b(2)]);

    let fan_in = graph.connector(c(1));
    assert_eq!(fan_in.anchor(), merge);
    assert_eq!(fan_in.predecessors(), &[b(1), b(2)]);
    assert_eq!(fan_in.successors(), &[b(3)]);
}

#[test]
fn jump_after_a_connector_bridges_with_an_empty_block() {
    let mut builder = FunctionGraphBuilder::new(n(99));
    builder.add(n(0));
    builder.jump(p(1)).unwrap();
    builder.jump_after(p(2), p(1)).unwrap();
    let graph = builder.build();

    assert_eq!(graph.blocks().len(), 2);
    let bridge = graph.block(b(1));
    assert!(bridge.is_empty());
    assert_eq!(bridge.predecessor(), Some(c(0)));
    assert_eq!(bridge.successor(), Some(c(1)));

    assert_eq!(graph.connector(c(0)).successors(), &[b(1)]);
    assert_eq!(graph.connector(c(1)).predecessors(), &[b(1)]);
}

#[test]
fn jump_after_a_trailing_element_closes_that_block() {
    let mut builder = FunctionGraphBuilder::new(n(99));
    builder.add(n(0));
    builder.jump(p(1)).unwrap();
    builder.add_after(n(2), p(1)).unwrap();
    builder.jump_after(p(3), p(2)).unwrap();
    let graph = builder.build();

    assert_eq!(graph.blocks().len(), 2);
    assert_eq!(graph.block(b(1)).elements(), &[n(2)]);
    assert_eq!(graph.block(b(1)).successor(), Some(c(1)));
    assert_eq!(graph.connector(c(1)).predecessors(), &[b(1)]);
}

#[test]
fn existing_blocks_can_be_re_added() {
    let mut first = FunctionGraphBuilder::new(n(99));
    first.add(n(0));
    first.add(n(1));
    let donor = first.build();

    let mut second = FunctionGraphBuilder::new(n(99));
    second.add_block(donor.entry_block().unwrap());
    let graph = second.build();
    assert_eq!(graph.entry_block().unwrap().elements(), &[n(0), n(1)]);
}

#[test]
fn existing_blocks_can_be_re_added_after_an_anchor() {
    let mut first = FunctionGraphBuilder::new(n(99));
    first.add(n(0));
    first.add(n(1));
    let donor = first.build();

    let mut second = FunctionGraphBuilder::new(n(99));
    second.add(n(5));
    second.jump(p(6)).unwrap();
    second
        .add_block_after(donor.entry_block().unwrap(), p(6))
        .unwrap();
    let graph = second.build();

    assert_eq!(graph.blocks().len(), 2);
    let resumed = graph.block(BlockId::from_raw(1));
    assert_eq!(resumed.elements(), &[n(0), n(1)]);
    assert_eq!(resumed.predecessor(), Some(c(0)));
}
