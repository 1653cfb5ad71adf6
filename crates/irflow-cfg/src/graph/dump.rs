//! Human-readable graph dump for debugging and snapshot tests.

use std::fmt::Write as _;

use irflow_core::FunctionIr;

use crate::point::FlowPoint;

use super::ControlFlowGraph;

/// Render `graph` one line per block and per connector.
///
/// Elements and anchors show their id and label. Output order is block id
/// then connector id, so the dump is deterministic for a given input.
pub fn dump(graph: &ControlFlowGraph, ir: &FunctionIr) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "fn {}", ir.label(graph.function()));
    for block in graph.blocks() {
        let elements: Vec<String> = block
            .elements()
            .iter()
            .map(|&element| format!("{element} {}", ir.label(element)))
            .collect();
        let _ = write!(out, "{}", block.id());
        if let Some(predecessor) = block.predecessor() {
            let _ = write!(out, " {predecessor}");
        }
        let _ = write!(out, " [{}]", elements.join(", "));
        if let Some(successor) = block.successor() {
            let _ = write!(out, " -> {successor}");
        }
        out.push('\n');
    }
    for connector in graph.connectors() {
        let _ = writeln!(
            out,
            "{} @ {}  preds [{}]  succs [{}]",
            connector.id(),
            anchor_label(connector.anchor(), ir),
            join(connector.predecessors()),
            join(connector.successors()),
        );
    }
    out
}

fn anchor_label(point: FlowPoint, ir: &FunctionIr) -> String {
    match point {
        FlowPoint::Node(id) => format!("{id} {}", ir.label(id)),
        FlowPoint::Sink(_) => point.to_string(),
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
