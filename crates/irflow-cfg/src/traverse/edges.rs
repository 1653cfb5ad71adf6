//! Edge descriptor for a structural seam.

use crate::point::FlowPoint;

/// The elements flowing into and out of one traversal position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Edges {
    /// Backward frontier, in source order.
    pub previous: Vec<FlowPoint>,
    /// Forward frontier, in target order.
    pub next: Vec<FlowPoint>,
}

impl Edges {
    pub fn new(previous: Vec<FlowPoint>, next: Vec<FlowPoint>) -> Self {
        Self { previous, next }
    }

    /// No edges on either side.
    pub fn none() -> Self {
        Self::default()
    }

    /// Edges at a traversal start: outgoing only.
    pub fn start(next: impl IntoIterator<Item = FlowPoint>) -> Self {
        Self {
            previous: Vec::new(),
            next: next.into_iter().collect(),
        }
    }

    /// Edges at a traversal end: incoming only.
    pub fn end(previous: impl IntoIterator<Item = FlowPoint>) -> Self {
        Self {
            previous: previous.into_iter().collect(),
            next: Vec::new(),
        }
    }

    /// Number of incoming elements.
    pub fn fan_in(&self) -> usize {
        self.previous.len()
    }

    /// Number of outgoing elements.
    pub fn fan_out(&self) -> usize {
        self.next.len()
    }

    /// True when control fans in or out here (either side >= 2).
    pub fn is_seam(&self) -> bool {
        self.fan_in() >= 2 || self.fan_out() >= 2
    }
}
