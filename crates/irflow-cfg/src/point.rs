//! The flow-point identifier space.

use irflow_core::NodeId;

/// A position in the control-flow identifier space.
///
/// Real tree nodes are `Node`; `Sink` is the synthetic merge point owned by
/// a branch node. A sink exists only in the graph, never in the tree, so
/// block membership and connector anchors can never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum FlowPoint {
    /// A real IR node.
    Node(NodeId),
    /// The merge point after the arms of the branch node carried here.
    Sink(NodeId),
}

impl FlowPoint {
    /// The real node behind this point, if any.
    #[inline]
    pub fn node(self) -> Option<NodeId> {
        match self {
            FlowPoint::Node(id) => Some(id),
            FlowPoint::Sink(_) => None,
        }
    }

    /// True for synthetic merge sinks.
    #[inline]
    pub fn is_sink(self) -> bool {
        matches!(self, FlowPoint::Sink(_))
    }
}

impl From<NodeId> for FlowPoint {
    fn from(id: NodeId) -> Self {
        FlowPoint::Node(id)
    }
}

impl std::fmt::Display for FlowPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowPoint::Node(id) => write!(f, "{id}"),
            FlowPoint::Sink(id) => write!(f, "{id}.sink"),
        }
    }
}
