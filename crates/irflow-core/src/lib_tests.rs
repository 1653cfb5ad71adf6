//! Unit tests for the arena accessors.

use crate::{Arm, FunctionIrBuilder, NodeId, NodeKind};

#[test]
fn node_id_display_and_raw() {
    let id = NodeId::from_raw(7);
    assert_eq!(id.as_u32(), 7);
    assert_eq!(id.index(), 7);
    assert_eq!(id.to_string(), "%7");
}

#[test]
fn accessors_match_kinds() {
    let mut b = FunctionIrBuilder::new();
    let c = b.leaf("c");
    let r = b.leaf("r");
    let e = b.leaf("e");
    let branch = b.branch(vec![Arm::new(c, r)], Some(e));
    let body = b.block(vec![branch]);
    let ir = b.function("main", body);

    assert!(matches!(ir.kind(c), NodeKind::Leaf { .. }));
    assert_eq!(ir.as_block(body), Some(&[branch][..]));
    assert_eq!(ir.as_block(c), None);

    let (arms, else_result) = ir.as_branch(branch).unwrap();
    assert_eq!(arms.len(), 1);
    assert_eq!(arms[0].condition, c);
    assert_eq!(arms[0].result, r);
    assert_eq!(else_result, Some(e));

    let (name, fn_body) = ir.as_function(ir.root()).unwrap();
    assert_eq!(name, "main");
    assert_eq!(fn_body, body);
    assert_eq!(ir.as_function(c), None);
}

#[test]
fn labels() {
    let mut b = FunctionIrBuilder::new();
    let x = b.leaf("x");
    let body = b.block(vec![x]);
    let ir = b.function("main", body);

    assert_eq!(ir.label(x), "x");
    assert_eq!(ir.label(body), "block");
    assert_eq!(ir.label(ir.root()), "main");
}

#[test]
fn ids_iterate_in_creation_order() {
    let mut b = FunctionIrBuilder::new();
    let x = b.leaf("x");
    let body = b.block(vec![x]);
    let ir = b.function("main", body);

    let ids: Vec<_> = ir.ids().collect();
    assert_eq!(ids, vec![x, body, ir.root()]);
    assert_eq!(ir.len(), 3);
    assert!(!ir.is_empty());
}

#[test]
fn serializes_to_json() {
    let mut b = FunctionIrBuilder::new();
    let x = b.leaf("x");
    let body = b.block(vec![x]);
    let ir = b.function("main", body);

    let json = serde_json::to_value(&ir).unwrap();
    assert_eq!(json["root"], 2);
    assert_eq!(json["nodes"][0]["Leaf"]["label"], "x");
}
