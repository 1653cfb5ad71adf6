#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Control-flow graph construction over the irflow IR.
//!
//! This crate turns a tree-shaped function body into an explicit graph of
//! basic blocks joined by connectors:
//! - `point` - the flow-point identifier space (real nodes plus synthetic
//!   merge sinks)
//! - `traverse` - bidirectional cursors over a function tree
//! - `build` - incremental block/connector/graph builders
//! - `generate` - the single-pass graph generator
//! - `graph` - the immutable output graph and its dump

pub mod build;
pub mod generate;
pub mod graph;
pub mod point;
pub mod traverse;

#[cfg(test)]
pub mod test_utils;

pub use build::{BuildError, FunctionGraphBuilder};
pub use generate::{GenerateError, generate};
pub use graph::{BasicBlock, BlockConnector, BlockId, ConnectorId, ControlFlowGraph};
pub use point::FlowPoint;
pub use traverse::{Edges, FunctionCursor, TraverseError};
