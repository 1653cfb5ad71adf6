//! Single-pass control-flow graph generation.
//!
//! The generator drives one cursor across the whole function. Every visited
//! element is classified by the frontiers at the position just reached: both
//! sides below two means it extends the open block, either side at two or
//! more makes it a connector anchor. Branch alternatives not taken at a
//! fan-out are remembered and traversed later by retreating the same cursor
//! back to the fan-out position, so one pass visits every element.

use irflow_core::{FunctionIr, NodeId};

use crate::build::{BuildError, FunctionGraphBuilder};
use crate::graph::ControlFlowGraph;
use crate::point::FlowPoint;
use crate::traverse::{FunctionCursor, TraverseError};

/// Errors aborting a generation pass.
///
/// All of these indicate a traversal or builder invariant violation, never
/// malformed input: a well-formed tree generates without error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Traverse(#[from] TraverseError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Build the control-flow graph of `ir`'s function.
pub fn generate(ir: &FunctionIr) -> Result<ControlFlowGraph, GenerateError> {
    Generator::new(ir)?.run()
}

/// A branch alternative discovered at a fan-out and not yet traversed.
#[derive(Debug)]
struct PendingArm {
    /// Connector anchor the resumed path attaches after.
    anchor: FlowPoint,
    /// First element of the untraversed alternative.
    target: FlowPoint,
    /// Trail length at the fan-out position, for rewinding.
    mark: usize,
}

struct Generator<'ir> {
    ir: &'ir FunctionIr,
    cursor: FunctionCursor<'ir>,
    builder: FunctionGraphBuilder,
    /// Untraversed branch alternatives, innermost last.
    pending: Vec<PendingArm>,
    /// Every element consumed so far, in order.
    trail: Vec<FlowPoint>,
    /// Anchor the next element attaches after, set at each seam.
    resume_after: Option<FlowPoint>,
    /// Element to visit next after a rewind, instead of the frontier head.
    forced: Option<FlowPoint>,
}

impl<'ir> Generator<'ir> {
    fn new(ir: &'ir FunctionIr) -> Result<Self, GenerateError> {
        let cursor = FunctionCursor::new(ir)?;
        let function = cursor.function();
        Ok(Self {
            ir,
            cursor,
            builder: FunctionGraphBuilder::new(function),
            pending: Vec::new(),
            trail: Vec::new(),
            resume_after: None,
            forced: None,
        })
    }

    fn run(mut self) -> Result<ControlFlowGraph, GenerateError> {
        loop {
            let target = match self.forced.take() {
                Some(target) => target,
                None => {
                    let next = self.cursor.next_elements();
                    match next.first() {
                        Some(&target) => target,
                        None => break,
                    }
                }
            };
            self.visit(target)?;
        }
        debug_assert!(self.pending.is_empty(), "branch alternatives left behind");
        Ok(self.builder.build())
    }

    /// Consume `target`, classify it, and feed it to the builder.
    fn visit(&mut self, target: FlowPoint) -> Result<(), GenerateError> {
        self.cursor.advance(target)?;
        self.trail.push(target);
        let edges = self.cursor.edges();
        let after = self.resume_after.take();

        // A sink is a connector even when degenerate: synthetic anchors
        // never join a block.
        if edges.is_seam() || target.is_sink() {
            match after {
                Some(anchor) => self.builder.jump_after(target, anchor)?,
                None => self.builder.jump(target)?,
            }
            self.resume_after = Some(target);
            // Remember the fan-out alternatives not taken now. The sink
            // needs no visit of its own: its fan-in already accounts for
            // the false path.
            for &alternative in edges.next.iter().skip(1) {
                if !alternative.is_sink() {
                    self.pending.push(PendingArm {
                        anchor: target,
                        target: alternative,
                        mark: self.trail.len(),
                    });
                }
            }
            if let FlowPoint::Sink(branch) = target {
                self.resume_arm(branch)?;
            }
        } else {
            match target {
                FlowPoint::Node(element) => match after {
                    Some(anchor) => self.builder.add_after(element, anchor)?,
                    None => self.builder.add(element),
                },
                FlowPoint::Sink(_) => unreachable!("sink classified as straight-line"),
            }
        }
        Ok(())
    }

    /// After consuming the sink of `branch`, resume the innermost pending
    /// alternative if it belongs to that branch; otherwise all arms are done
    /// and traversal continues past the branch.
    fn resume_arm(&mut self, branch: NodeId) -> Result<(), GenerateError> {
        let belongs = match self.pending.last() {
            Some(pending) => self.is_arm_entry(branch, pending.target),
            None => false,
        };
        if !belongs {
            return Ok(());
        }
        let Some(PendingArm {
            anchor,
            target,
            mark,
        }) = self.pending.pop()
        else {
            return Ok(());
        };
        self.rewind(mark)?;
        self.resume_after = Some(anchor);
        self.forced = Some(target);
        Ok(())
    }

    /// Whether `point` enters one of `branch`'s alternatives: a condition or
    /// the else result.
    fn is_arm_entry(&self, branch: NodeId, point: FlowPoint) -> bool {
        let Some((arms, else_result)) = self.ir.as_branch(branch) else {
            return false;
        };
        let FlowPoint::Node(node) = point else {
            return false;
        };
        arms.iter().any(|arm| arm.condition == node) || else_result == Some(node)
    }

    /// Retreat along the trail back to the recorded fan-out position.
    fn rewind(&mut self, mark: usize) -> Result<(), GenerateError> {
        while self.trail.len() > mark {
            self.trail.pop();
            let Some(&back) = self.trail.last() else {
                break;
            };
            self.cursor.retreat(back)?;
        }
        Ok(())
    }
}
