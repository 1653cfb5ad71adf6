//! Kind-dispatched interior cursors.

use irflow_core::{FunctionIr, NodeId, NodeKind};

use crate::point::FlowPoint;

use super::TraverseError;
use super::branch::BranchCursor;
use super::sequence::SequenceCursor;

/// Interior cursor over one consumed node's subtree.
///
/// The node itself has already been consumed by whoever created the cursor;
/// the cursor covers everything below it. Dispatch is a closed match over
/// node kinds.
#[derive(Debug, Clone)]
pub(crate) enum Cursor {
    /// A leaf has no interior.
    Leaf,
    Sequence(SequenceCursor),
    Branch(Box<BranchCursor>),
}

impl Cursor {
    /// Cursor positioned before any interior element.
    pub(crate) fn at_start(ir: &FunctionIr, node: NodeId) -> Result<Self, TraverseError> {
        match ir.kind(node) {
            NodeKind::Leaf { .. } => Ok(Cursor::Leaf),
            NodeKind::Block { .. } => Ok(Cursor::Sequence(SequenceCursor::at_start(node))),
            NodeKind::Branch { .. } => Ok(Cursor::Branch(Box::new(BranchCursor::at_start(node)))),
            NodeKind::Function { .. } => Err(TraverseError::Unsupported { kind: "function" }),
        }
    }

    /// Cursor positioned after the last interior element.
    pub(crate) fn at_end(ir: &FunctionIr, node: NodeId) -> Result<Self, TraverseError> {
        match ir.kind(node) {
            NodeKind::Leaf { .. } => Ok(Cursor::Leaf),
            NodeKind::Block { .. } => Ok(Cursor::Sequence(SequenceCursor::at_end(ir, node)?)),
            NodeKind::Branch { .. } => Ok(Cursor::Branch(Box::new(BranchCursor::at_end(node)))),
            NodeKind::Function { .. } => Err(TraverseError::Unsupported { kind: "function" }),
        }
    }

    pub(crate) fn next_elements(&self, ir: &FunctionIr) -> Vec<FlowPoint> {
        match self {
            Cursor::Leaf => Vec::new(),
            Cursor::Sequence(cursor) => cursor.next_elements(ir),
            Cursor::Branch(cursor) => cursor.next_elements(ir),
        }
    }

    pub(crate) fn previous_elements(&self, ir: &FunctionIr) -> Vec<FlowPoint> {
        match self {
            Cursor::Leaf => Vec::new(),
            Cursor::Sequence(cursor) => cursor.previous_elements(ir),
            Cursor::Branch(cursor) => cursor.previous_elements(ir),
        }
    }

    pub(crate) fn has_next(&self, ir: &FunctionIr) -> bool {
        !self.next_elements(ir).is_empty()
    }

    pub(crate) fn has_previous(&self, ir: &FunctionIr) -> bool {
        !self.previous_elements(ir).is_empty()
    }

    /// Commit a forward step. The target has already been validated against
    /// [`Cursor::next_elements`] by the public cursor.
    pub(crate) fn advance(&mut self, ir: &FunctionIr, target: FlowPoint) -> Result<(), TraverseError> {
        match self {
            Cursor::Leaf => Err(TraverseError::AtEnd),
            Cursor::Sequence(cursor) => cursor.advance(ir, target),
            Cursor::Branch(cursor) => cursor.advance(ir, target),
        }
    }

    /// Commit a backward step. The target has already been validated against
    /// [`Cursor::previous_elements`] by the public cursor.
    pub(crate) fn retreat(&mut self, ir: &FunctionIr, target: FlowPoint) -> Result<(), TraverseError> {
        match self {
            Cursor::Leaf => Err(TraverseError::AtStart),
            Cursor::Sequence(cursor) => cursor.retreat(ir, target),
            Cursor::Branch(cursor) => cursor.retreat(ir, target),
        }
    }
}

/// The last element of a subtree's linearization: a leaf is itself, a block
/// ends at its last statement's exit (or itself when empty), a branch ends at
/// its sink, a function at its body's exit.
pub(crate) fn exit_element(ir: &FunctionIr, node: NodeId) -> FlowPoint {
    match ir.kind(node) {
        NodeKind::Leaf { .. } => FlowPoint::Node(node),
        NodeKind::Block { statements } => match statements.last() {
            Some(&last) => exit_element(ir, last),
            None => FlowPoint::Node(node),
        },
        NodeKind::Branch { .. } => FlowPoint::Sink(node),
        NodeKind::Function { body, .. } => exit_element(ir, *body),
    }
}
