//! Unit tests for tree construction.

use crate::{Arm, FunctionIrBuilder, NodeKind};

#[test]
fn ids_are_dense_and_ordered() {
    let mut b = FunctionIrBuilder::new();
    let a = b.leaf("a");
    let c = b.leaf("c");
    assert_eq!(a.as_u32(), 0);
    assert_eq!(c.as_u32(), 1);

    let body = b.block(vec![a, c]);
    assert_eq!(body.as_u32(), 2);
}

#[test]
fn function_is_the_root() {
    let mut b = FunctionIrBuilder::new();
    let a = b.leaf("a");
    let body = b.block(vec![a]);
    let ir = b.function("f", body);

    let root = ir.root();
    assert_eq!(root.index(), ir.len() - 1);
    match ir.kind(root) {
        NodeKind::Function { name, body: fn_body } => {
            assert_eq!(name, "f");
            assert_eq!(*fn_body, body);
        }
        other => panic!("root is not a function: {other:?}"),
    }
}

#[test]
fn branch_wiring() {
    let mut b = FunctionIrBuilder::new();
    let c0 = b.leaf("c0");
    let r0 = b.leaf("r0");
    let c1 = b.leaf("c1");
    let r1 = b.leaf("r1");
    let branch = b.branch(vec![Arm::new(c0, r0), Arm::new(c1, r1)], None);
    let body = b.block(vec![branch]);
    let ir = b.function("f", body);

    let (arms, else_result) = ir.as_branch(branch).unwrap();
    assert_eq!(arms.len(), 2);
    assert_eq!(arms[1].condition, c1);
    assert_eq!(else_result, None);
}
