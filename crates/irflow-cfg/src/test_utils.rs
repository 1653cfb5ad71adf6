//! Shared tree-building helpers for tests.

use irflow_core::{Arm, FunctionIr, FunctionIrBuilder, NodeId};

/// `fn test { <one leaf per label> }`
pub fn linear_fn(labels: &[&str]) -> FunctionIr {
    let mut builder = FunctionIrBuilder::new();
    let statements: Vec<NodeId> = labels.iter().map(|label| builder.leaf(*label)).collect();
    let body = builder.block(statements);
    builder.function("test", body)
}

/// `fn main { a; if (c1) b else c; d }` plus the interesting node ids.
pub struct IfElseFn {
    pub ir: FunctionIr,
    pub a: NodeId,
    pub c1: NodeId,
    pub b: NodeId,
    pub c: NodeId,
    pub branch: NodeId,
    pub d: NodeId,
}

pub fn if_else_fn() -> IfElseFn {
    let mut builder = FunctionIrBuilder::new();
    let a = builder.leaf("a");
    let c1 = builder.leaf("c1");
    let b = builder.leaf("b");
    let c = builder.leaf("c");
    let branch = builder.branch(vec![Arm::new(c1, b)], Some(c));
    let d = builder.leaf("d");
    let body = builder.block(vec![a, branch, d]);
    let ir = builder.function("main", body);
    IfElseFn {
        ir,
        a,
        c1,
        b,
        c,
        branch,
        d,
    }
}

/// `fn main { a; if (c1) b; d }` - no else.
pub struct IfFn {
    pub ir: FunctionIr,
    pub a: NodeId,
    pub c1: NodeId,
    pub b: NodeId,
    pub branch: NodeId,
    pub d: NodeId,
}

pub fn if_fn() -> IfFn {
    let mut builder = FunctionIrBuilder::new();
    let a = builder.leaf("a");
    let c1 = builder.leaf("c1");
    let b = builder.leaf("b");
    let branch = builder.branch(vec![Arm::new(c1, b)], None);
    let d = builder.leaf("d");
    let body = builder.block(vec![a, branch, d]);
    let ir = builder.function("main", body);
    IfFn {
        ir,
        a,
        c1,
        b,
        branch,
        d,
    }
}

/// `fn main { a; when { c1 -> r1; c2 -> r2; else -> e }; d }`.
pub struct WhenFn {
    pub ir: FunctionIr,
    pub a: NodeId,
    pub c1: NodeId,
    pub r1: NodeId,
    pub c2: NodeId,
    pub r2: NodeId,
    pub e: NodeId,
    pub branch: NodeId,
    pub d: NodeId,
}

pub fn when_fn() -> WhenFn {
    let mut builder = FunctionIrBuilder::new();
    let a = builder.leaf("a");
    let c1 = builder.leaf("c1");
    let r1 = builder.leaf("r1");
    let c2 = builder.leaf("c2");
    let r2 = builder.leaf("r2");
    let e = builder.leaf("e");
    let branch = builder.branch(vec![Arm::new(c1, r1), Arm::new(c2, r2)], Some(e));
    let d = builder.leaf("d");
    let body = builder.block(vec![a, branch, d]);
    let ir = builder.function("main", body);
    WhenFn {
        ir,
        a,
        c1,
        r1,
        c2,
        r2,
        e,
        branch,
        d,
    }
}
