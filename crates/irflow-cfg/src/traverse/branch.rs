//! Cursor over a multi-way branch and its synthetic merge sink.

use irflow_core::{Arm, FunctionIr, NodeId};

use crate::point::FlowPoint;

use super::TraverseError;
use super::cursor::{Cursor, exit_element};

/// Cursor over a branch node's arms.
///
/// Forward order within an arm is condition then result. A condition's
/// frontier lists the result first, then the false step: the next condition,
/// the else result at the last arm, or - with no else - the sink. Every arm
/// merges at the synthetic sink, which exhausts the cursor once consumed.
/// The sink's backward frontier lists the exit of every arm, so fan-in is
/// visible the first time the sink is reached.
#[derive(Debug, Clone)]
pub(crate) struct BranchCursor {
    node: NodeId,
    state: BranchState,
}

#[derive(Debug, Clone)]
enum BranchState {
    /// Landed on the branch node itself; no interior element consumed.
    Entry,
    /// Inside the condition of arm `arm`.
    Condition { arm: usize, sub: Cursor },
    /// Inside the result of arm `arm`.
    Result { arm: usize, sub: Cursor },
    /// Inside the else result.
    Else { sub: Cursor },
    /// The sink has been consumed; the cursor is exhausted.
    Sink,
}

fn arms_of(ir: &FunctionIr, node: NodeId) -> (&[Arm], Option<NodeId>) {
    match ir.as_branch(node) {
        Some(parts) => parts,
        None => unreachable!("branch cursor over a non-branch node"),
    }
}

impl BranchCursor {
    pub(crate) fn at_start(node: NodeId) -> Self {
        Self {
            node,
            state: BranchState::Entry,
        }
    }

    pub(crate) fn at_end(node: NodeId) -> Self {
        Self {
            node,
            state: BranchState::Sink,
        }
    }

    pub(crate) fn next_elements(&self, ir: &FunctionIr) -> Vec<FlowPoint> {
        let (arms, else_result) = arms_of(ir, self.node);
        let sink = FlowPoint::Sink(self.node);
        match &self.state {
            BranchState::Entry => match arms.first() {
                Some(first) => vec![FlowPoint::Node(first.condition)],
                // A branch with no arms runs straight into its else result
                // or its sink.
                None => match else_result {
                    Some(else_node) => vec![FlowPoint::Node(else_node)],
                    None => vec![sink],
                },
            },
            BranchState::Condition { arm, sub } => {
                if sub.has_next(ir) {
                    sub.next_elements(ir)
                } else {
                    let false_step = if arm + 1 < arms.len() {
                        FlowPoint::Node(arms[arm + 1].condition)
                    } else {
                        match else_result {
                            Some(else_node) => FlowPoint::Node(else_node),
                            None => sink,
                        }
                    };
                    vec![FlowPoint::Node(arms[*arm].result), false_step]
                }
            }
            BranchState::Result { sub, .. } | BranchState::Else { sub } => {
                if sub.has_next(ir) {
                    sub.next_elements(ir)
                } else {
                    vec![sink]
                }
            }
            BranchState::Sink => Vec::new(),
        }
    }

    pub(crate) fn previous_elements(&self, ir: &FunctionIr) -> Vec<FlowPoint> {
        let (arms, else_result) = arms_of(ir, self.node);
        match &self.state {
            BranchState::Entry => Vec::new(),
            BranchState::Condition { arm, sub } => {
                if sub.has_previous(ir) {
                    sub.previous_elements(ir)
                } else if *arm == 0 {
                    vec![FlowPoint::Node(self.node)]
                } else {
                    vec![exit_element(ir, arms[arm - 1].condition)]
                }
            }
            BranchState::Result { arm, sub } => {
                if sub.has_previous(ir) {
                    sub.previous_elements(ir)
                } else {
                    vec![exit_element(ir, arms[*arm].condition)]
                }
            }
            BranchState::Else { sub } => {
                if sub.has_previous(ir) {
                    sub.previous_elements(ir)
                } else {
                    match arms.last() {
                        Some(last) => vec![exit_element(ir, last.condition)],
                        None => vec![FlowPoint::Node(self.node)],
                    }
                }
            }
            BranchState::Sink => {
                // Full fan-in: every arm's exit, then the else exit or - with
                // no else - the last condition's false exit.
                let mut previous: Vec<FlowPoint> = arms
                    .iter()
                    .map(|arm| exit_element(ir, arm.result))
                    .collect();
                match else_result {
                    Some(else_node) => previous.push(exit_element(ir, else_node)),
                    None => match arms.last() {
                        Some(last) => previous.push(exit_element(ir, last.condition)),
                        None => previous.push(FlowPoint::Node(self.node)),
                    },
                }
                previous
            }
        }
    }

    pub(crate) fn advance(&mut self, ir: &FunctionIr, target: FlowPoint) -> Result<(), TraverseError> {
        let (arms, else_result) = arms_of(ir, self.node);
        let sink = FlowPoint::Sink(self.node);
        let next_state = match &mut self.state {
            BranchState::Entry => {
                if let Some(first) = arms.first() {
                    Some(BranchState::Condition {
                        arm: 0,
                        sub: Cursor::at_start(ir, first.condition)?,
                    })
                } else if let Some(else_node) = else_result {
                    Some(BranchState::Else {
                        sub: Cursor::at_start(ir, else_node)?,
                    })
                } else {
                    Some(BranchState::Sink)
                }
            }
            BranchState::Condition { arm, sub } => {
                if sub.has_next(ir) {
                    sub.advance(ir, target)?;
                    None
                } else {
                    let index = *arm;
                    if target == FlowPoint::Node(arms[index].result) {
                        Some(BranchState::Result {
                            arm: index,
                            sub: Cursor::at_start(ir, arms[index].result)?,
                        })
                    } else if index + 1 < arms.len() {
                        if target != FlowPoint::Node(arms[index + 1].condition) {
                            return Err(TraverseError::NotAForwardNeighbor { target });
                        }
                        Some(BranchState::Condition {
                            arm: index + 1,
                            sub: Cursor::at_start(ir, arms[index + 1].condition)?,
                        })
                    } else if let Some(else_node) =
                        else_result.filter(|&else_node| target == FlowPoint::Node(else_node))
                    {
                        Some(BranchState::Else {
                            sub: Cursor::at_start(ir, else_node)?,
                        })
                    } else if else_result.is_none() && target == sink {
                        Some(BranchState::Sink)
                    } else {
                        return Err(TraverseError::NotAForwardNeighbor { target });
                    }
                }
            }
            BranchState::Result { sub, .. } | BranchState::Else { sub } => {
                if sub.has_next(ir) {
                    sub.advance(ir, target)?;
                    None
                } else {
                    debug_assert_eq!(target, sink);
                    Some(BranchState::Sink)
                }
            }
            BranchState::Sink => return Err(TraverseError::AtEnd),
        };
        if let Some(state) = next_state {
            self.state = state;
        }
        Ok(())
    }

    pub(crate) fn retreat(&mut self, ir: &FunctionIr, target: FlowPoint) -> Result<(), TraverseError> {
        let (arms, else_result) = arms_of(ir, self.node);
        let node = self.node;
        let next_state = match &mut self.state {
            BranchState::Entry => return Err(TraverseError::AtStart),
            BranchState::Condition { arm, sub } => {
                if sub.has_previous(ir) {
                    sub.retreat(ir, target)?;
                    None
                } else if *arm == 0 {
                    debug_assert_eq!(target, FlowPoint::Node(node));
                    Some(BranchState::Entry)
                } else {
                    let index = *arm - 1;
                    debug_assert_eq!(target, exit_element(ir, arms[index].condition));
                    Some(BranchState::Condition {
                        arm: index,
                        sub: Cursor::at_end(ir, arms[index].condition)?,
                    })
                }
            }
            BranchState::Result { arm, sub } => {
                if sub.has_previous(ir) {
                    sub.retreat(ir, target)?;
                    None
                } else {
                    let index = *arm;
                    debug_assert_eq!(target, exit_element(ir, arms[index].condition));
                    Some(BranchState::Condition {
                        arm: index,
                        sub: Cursor::at_end(ir, arms[index].condition)?,
                    })
                }
            }
            BranchState::Else { sub } => {
                if sub.has_previous(ir) {
                    sub.retreat(ir, target)?;
                    None
                } else {
                    match arms.last() {
                        Some(_) => {
                            let index = arms.len() - 1;
                            Some(BranchState::Condition {
                                arm: index,
                                sub: Cursor::at_end(ir, arms[index].condition)?,
                            })
                        }
                        None => Some(BranchState::Entry),
                    }
                }
            }
            BranchState::Sink => {
                // Land on whichever arm exit the caller chose.
                if let Some(index) = arms
                    .iter()
                    .position(|arm| exit_element(ir, arm.result) == target)
                {
                    Some(BranchState::Result {
                        arm: index,
                        sub: Cursor::at_end(ir, arms[index].result)?,
                    })
                } else if let Some(else_node) =
                    else_result.filter(|&else_node| exit_element(ir, else_node) == target)
                {
                    Some(BranchState::Else {
                        sub: Cursor::at_end(ir, else_node)?,
                    })
                } else if else_result.is_none()
                    && arms
                        .last()
                        .is_some_and(|last| exit_element(ir, last.condition) == target)
                {
                    let index = arms.len() - 1;
                    Some(BranchState::Condition {
                        arm: index,
                        sub: Cursor::at_end(ir, arms[index].condition)?,
                    })
                } else if arms.is_empty() && else_result.is_none() && target == FlowPoint::Node(node)
                {
                    Some(BranchState::Entry)
                } else {
                    return Err(TraverseError::NotABackwardNeighbor { target });
                }
            }
        };
        if let Some(state) = next_state {
            self.state = state;
        }
        Ok(())
    }
}
