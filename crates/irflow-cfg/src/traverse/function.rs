//! The public cursor over a whole function.

use irflow_core::{FunctionIr, NodeId, NodeKind};

use crate::point::FlowPoint;

use super::TraverseError;
use super::cursor::Cursor;
use super::edges::Edges;

/// Bidirectional cursor over a function body's linearization.
///
/// The function node and a block-shaped body are virtual sentinels: traversal
/// starts directly at the body's first statement and neither wrapper is ever
/// yielded. A non-block body (single-expression function) is yielded as an
/// element, with the function node serving as the backward landing sentinel
/// at the start.
#[derive(Debug, Clone)]
pub struct FunctionCursor<'ir> {
    ir: &'ir FunctionIr,
    function: NodeId,
    body: NodeId,
    /// Interior cursor; `None` only before a non-block body is consumed.
    state: Option<Cursor>,
    /// Whether the body is a block entered without being yielded.
    body_is_block: bool,
}

impl<'ir> FunctionCursor<'ir> {
    /// Cursor at the start of the function rooted at `ir.root()`.
    pub fn new(ir: &'ir FunctionIr) -> Result<Self, TraverseError> {
        let root = ir.root();
        let Some((_, body)) = ir.as_function(root) else {
            return Err(TraverseError::NotAFunction { root });
        };
        let body_is_block = matches!(ir.kind(body), NodeKind::Block { .. });
        let state = if body_is_block {
            Some(Cursor::at_start(ir, body)?)
        } else {
            None
        };
        Ok(Self {
            ir,
            function: root,
            body,
            state,
            body_is_block,
        })
    }

    /// The function node this cursor covers.
    pub fn function(&self) -> NodeId {
        self.function
    }

    /// Forward frontier at the current position.
    pub fn next_elements(&self) -> Vec<FlowPoint> {
        match &self.state {
            None => vec![FlowPoint::Node(self.body)],
            Some(cursor) => cursor.next_elements(self.ir),
        }
    }

    /// Backward frontier at the current position.
    pub fn previous_elements(&self) -> Vec<FlowPoint> {
        match &self.state {
            None => Vec::new(),
            Some(cursor) => {
                let previous = cursor.previous_elements(self.ir);
                if previous.is_empty() && !self.body_is_block {
                    // The function node is the landing sentinel at the start.
                    vec![FlowPoint::Node(self.function)]
                } else {
                    previous
                }
            }
        }
    }

    pub fn has_next(&self) -> bool {
        !self.next_elements().is_empty()
    }

    pub fn has_previous(&self) -> bool {
        !self.previous_elements().is_empty()
    }

    /// Both frontiers at the current position.
    pub fn edges(&self) -> Edges {
        Edges::new(self.previous_elements(), self.next_elements())
    }

    /// Commit a forward step to `target`.
    pub fn advance(&mut self, target: FlowPoint) -> Result<(), TraverseError> {
        let next = self.next_elements();
        if !next.contains(&target) {
            return Err(if next.is_empty() {
                TraverseError::AtEnd
            } else {
                TraverseError::NotAForwardNeighbor { target }
            });
        }
        if let Some(cursor) = self.state.as_mut() {
            cursor.advance(self.ir, target)
        } else {
            self.state = Some(Cursor::at_start(self.ir, self.body)?);
            Ok(())
        }
    }

    /// Commit a backward step to `target`.
    pub fn retreat(&mut self, target: FlowPoint) -> Result<(), TraverseError> {
        let previous = self.previous_elements();
        if !previous.contains(&target) {
            return Err(if previous.is_empty() {
                TraverseError::AtStart
            } else {
                TraverseError::NotABackwardNeighbor { target }
            });
        }
        if target == FlowPoint::Node(self.function) {
            // Back to the virtual start, before a non-block body.
            self.state = None;
            return Ok(());
        }
        match self.state.as_mut() {
            Some(cursor) => cursor.retreat(self.ir, target),
            None => Err(TraverseError::AtStart),
        }
    }
}
