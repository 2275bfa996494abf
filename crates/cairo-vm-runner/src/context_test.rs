use std::collections::HashMap;

use cairo_vm_hints::cell;
use cairo_vm_memory::MemoryAddress;
use pretty_assertions::assert_eq;
use starknet_types_core::felt::Felt;
use test_log::test;

use super::{ExecutionContext, ExecutionScopes, ScopeValue};
use crate::errors::HintError;

#[test]
fn test_scopes() {
    let mut scopes = ExecutionScopes::new();
    scopes.assign_or_update_variable("a", ScopeValue::Int(1));
    assert_eq!(scopes.get("a"), Ok(ScopeValue::Int(1)));

    scopes.enter_scope(HashMap::from([("b".to_string(), ScopeValue::Felt(Felt::TWO))]));
    assert_eq!(scopes.depth(), 2);
    assert_eq!(scopes.get_felt("b"), Ok(Felt::TWO));
    // Only the innermost scope is visible.
    assert_eq!(scopes.get("a"), Err(HintError::MissingScopeVariable("a".into())));

    scopes.exit_scope().unwrap();
    assert_eq!(scopes.get("a"), Ok(ScopeValue::Int(1)));
    assert_eq!(scopes.exit_scope(), Err(HintError::CannotExitMainScope));
}

#[test]
fn test_update_and_delete_variable() {
    let mut scopes = ExecutionScopes::default();
    scopes.assign_or_update_variable("excluded", ScopeValue::ExcludedArc(0));
    scopes.assign_or_update_variable("excluded", ScopeValue::ExcludedArc(2));
    assert_eq!(scopes.get_excluded_arc("excluded"), Ok(2));

    scopes.delete_variable("excluded");
    assert_eq!(
        scopes.get_excluded_arc("excluded"),
        Err(HintError::MissingScopeVariable("excluded".into()))
    );
}

#[test]
fn test_typed_lookup_mismatch() {
    let mut scopes = ExecutionScopes::default();
    scopes.assign_or_update_variable("ptr", ScopeValue::Address(MemoryAddress::new(2, 0)));

    assert_eq!(
        scopes.get_felt("ptr"),
        Err(HintError::ScopeValueKindMismatch {
            name: "ptr".into(),
            expected: "felt",
            actual: "address"
        })
    );
}

#[test]
fn test_cell_ref_to_address() {
    let ctx = ExecutionContext::new(10, 4);

    assert_eq!(ctx.cell_ref_to_address(&cell!([ap + 2])), Ok(MemoryAddress::new(1, 12)));
    assert_eq!(ctx.cell_ref_to_address(&cell!([fp - 3])), Ok(MemoryAddress::new(1, 1)));
    assert!(ctx.cell_ref_to_address(&cell!([fp - 5])).is_err());
}
