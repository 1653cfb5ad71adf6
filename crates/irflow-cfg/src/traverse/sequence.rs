//! Cursor over an ordered statement container.

use irflow_core::{FunctionIr, NodeId};

use crate::point::FlowPoint;

use super::TraverseError;
use super::cursor::{Cursor, exit_element};

/// Cursor over a block's statement list.
///
/// The position is the index of the statement whose subtree the cursor is in
/// (that statement's node is consumed) together with the interior cursor for
/// it; `None` means nothing inside the block has been consumed yet.
#[derive(Debug, Clone)]
pub(crate) struct SequenceCursor {
    node: NodeId,
    at: Option<(usize, Box<Cursor>)>,
}

fn statements_of(ir: &FunctionIr, node: NodeId) -> &[NodeId] {
    match ir.as_block(node) {
        Some(statements) => statements,
        None => unreachable!("sequence cursor over a non-block node"),
    }
}

impl SequenceCursor {
    pub(crate) fn at_start(node: NodeId) -> Self {
        Self { node, at: None }
    }

    pub(crate) fn at_end(ir: &FunctionIr, node: NodeId) -> Result<Self, TraverseError> {
        let statements = statements_of(ir, node);
        let at = match statements.last() {
            Some(&last) => Some((statements.len() - 1, Box::new(Cursor::at_end(ir, last)?))),
            None => None,
        };
        Ok(Self { node, at })
    }

    pub(crate) fn next_elements(&self, ir: &FunctionIr) -> Vec<FlowPoint> {
        let statements = statements_of(ir, self.node);
        match &self.at {
            None => statements
                .first()
                .map(|&first| FlowPoint::Node(first))
                .into_iter()
                .collect(),
            Some((index, sub)) => {
                if sub.has_next(ir) {
                    sub.next_elements(ir)
                } else {
                    statements
                        .get(index + 1)
                        .map(|&next| FlowPoint::Node(next))
                        .into_iter()
                        .collect()
                }
            }
        }
    }

    pub(crate) fn previous_elements(&self, ir: &FunctionIr) -> Vec<FlowPoint> {
        let statements = statements_of(ir, self.node);
        match &self.at {
            None => Vec::new(),
            Some((index, sub)) => {
                if sub.has_previous(ir) {
                    sub.previous_elements(ir)
                } else if *index == 0 {
                    // Stepping back off the first statement lands on the
                    // container itself.
                    vec![FlowPoint::Node(self.node)]
                } else {
                    vec![exit_element(ir, statements[index - 1])]
                }
            }
        }
    }

    pub(crate) fn advance(&mut self, ir: &FunctionIr, target: FlowPoint) -> Result<(), TraverseError> {
        let statements = statements_of(ir, self.node);
        match &mut self.at {
            None => {
                let Some(&first) = statements.first() else {
                    return Err(TraverseError::AtEnd);
                };
                debug_assert_eq!(target, FlowPoint::Node(first));
                self.at = Some((0, Box::new(Cursor::at_start(ir, first)?)));
                Ok(())
            }
            Some((index, sub)) => {
                if sub.has_next(ir) {
                    sub.advance(ir, target)
                } else {
                    let Some(&next) = statements.get(*index + 1) else {
                        return Err(TraverseError::AtEnd);
                    };
                    debug_assert_eq!(target, FlowPoint::Node(next));
                    let interior = Cursor::at_start(ir, next)?;
                    *index += 1;
                    *sub = Box::new(interior);
                    Ok(())
                }
            }
        }
    }

    pub(crate) fn retreat(&mut self, ir: &FunctionIr, target: FlowPoint) -> Result<(), TraverseError> {
        let statements = statements_of(ir, self.node);
        match &mut self.at {
            None => Err(TraverseError::AtStart),
            Some((index, sub)) => {
                if sub.has_previous(ir) {
                    sub.retreat(ir, target)
                } else if *index == 0 {
                    debug_assert_eq!(target, FlowPoint::Node(self.node));
                    self.at = None;
                    Ok(())
                } else {
                    let previous = statements[*index - 1];
                    debug_assert_eq!(target, exit_element(ir, previous));
                    let interior = Cursor::at_end(ir, previous)?;
                    *index -= 1;
                    *sub = Box::new(interior);
                    Ok(())
                }
            }
        }
    }
}
