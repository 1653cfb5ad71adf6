//! Bidirectional cursors over a function tree.
//!
//! A cursor position is always "landed on an element": the element most
//! recently consumed on the current path. [`FunctionCursor::next_elements`]
//! lists the elements one forward step can consume,
//! [`FunctionCursor::previous_elements`] the elements one backward step lands
//! on; `advance`/`retreat` commit a step to a chosen target. Compound nodes
//! are consumed before their interiors; a branch contributes a synthetic sink
//! where its arms merge, and the sink's backward frontier reflects the full
//! fan-in the moment it is first reached.

mod branch;
mod cursor;
mod edges;
mod function;
mod sequence;


pub use edges::Edges;
pub use function::FunctionCursor;

use crate::point::FlowPoint;

/// Errors from cursor construction and stepping.
///
/// These are invariant violations (a driver bug), not input conditions: the
/// pass that hits one should abort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraverseError {
    /// `advance` past the end of the traversal.
    #[error("cursor is already at the end")]
    AtEnd,
    /// `retreat` before the start of the traversal.
    #[error("cursor is already at the start")]
    AtStart,
    /// `advance` to an element that is not in the forward frontier.
    #[error("{target} is not a forward neighbor of the current position")]
    NotAForwardNeighbor { target: FlowPoint },
    /// `retreat` to an element that is not in the backward frontier.
    #[error("{target} is not a backward neighbor of the current position")]
    NotABackwardNeighbor { target: FlowPoint },
    /// The node kind has no traversal behavior.
    #[error("traversal over {kind} nodes is not implemented")]
    Unsupported { kind: &'static str },
    /// The cursor can only be rooted at a function node.
    #[error("cursor root {root} is not a function node")]
    NotAFunction { root: irflow_core::NodeId },
}
