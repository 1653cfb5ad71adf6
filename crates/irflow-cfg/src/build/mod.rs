//! Incremental block/connector/graph builders.
//!
//! Builders are mutable and short-lived: one generation pass creates them on
//! demand and consumes each exactly once into the immutable graph. The
//! function graph builder owns every block and connector builder by index,
//! so cross-references between them are plain indices rather than ownership
//! edges.

mod block;
mod connector;
mod function;

#[cfg(test)]
mod function_tests;

pub use function::FunctionGraphBuilder;

use crate::point::FlowPoint;

/// Errors from builder misuse. These are invariant violations - the
/// generation pass that hits one is buggy and should abort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// `jump` with no block open.
    #[error("no block is open to close into the connector at {at}")]
    NoOpenBlock { at: FlowPoint },
    /// Resumption at an anchor with no registered block or connector.
    #[error("nothing is registered at anchor {anchor}")]
    UnknownAnchor { anchor: FlowPoint },
    /// Resumption at an element that is not the trailing element of its
    /// block.
    #[error("{anchor} is not at the end of an open block")]
    NotAtBlockEnd { anchor: FlowPoint },
}
