use pretty_assertions::assert_eq;
use test_case::test_case;
use test_log::test;

use super::{BinOpRhs, CellRef, Operation, Register, ResOperand};
use crate::{cell, operand};

#[test]
fn test_cell_literals() {
    assert_eq!(cell!([ap + 5]), CellRef::ap(5));
    assert_eq!(cell!([fp - 3]), CellRef::fp(-3));
    assert_eq!(cell!([ap]), CellRef { register: Register::AP, offset: 0 });
    let offset = 7;
    assert_eq!(cell!([fp + offset]), CellRef::fp(7));
}

#[test]
fn test_operand_literals() {
    assert_eq!(operand!([ap + 2]), ResOperand::Deref(CellRef::ap(2)));
    assert_eq!(operand!([[fp - 3] + 2]), ResOperand::DoubleDeref(CellRef::fp(-3), 2));
    assert_eq!(operand!([[ap]]), ResOperand::DoubleDeref(CellRef::ap(0), 0));
    assert_eq!(operand!([[ap + 1] - 4]), ResOperand::DoubleDeref(CellRef::ap(1), -4));
    assert_eq!(
        operand!([ap] + 5),
        ResOperand::bin_op(Operation::Add, CellRef::ap(0), BinOpRhs::immediate(5))
    );
    assert_eq!(
        operand!([fp + 1] * [ap - 2]),
        ResOperand::bin_op(Operation::Mul, CellRef::fp(1), BinOpRhs::Cell(CellRef::ap(-2)))
    );
    assert_eq!(operand!(-7), ResOperand::immediate(-7));
    assert_eq!(ResOperand::from(CellRef::fp(4)), operand!([fp + 4]));
}

#[test_case(operand!([ap + 6]), "[ap + 6]"; "deref")]
#[test_case(operand!([fp]), "[fp]"; "zero offset")]
#[test_case(operand!([[fp - 3] + 2]), "[[fp - 3] + 2]"; "double deref")]
#[test_case(operand!([[ap + 1] - 2]), "[[ap + 1] - 2]"; "double deref back")]
#[test_case(operand!([[ap]]), "[[ap]]"; "double deref no offset")]
#[test_case(operand!([ap] + 5), "[ap] + 5"; "add immediate")]
#[test_case(operand!([fp + 1] * [ap + 2]), "[fp + 1] * [ap + 2]"; "mul cells")]
#[test_case(operand!(-7), "-7"; "immediate")]
fn test_operand_display(operand: ResOperand, expected: &str) {
    assert_eq!(operand.to_string(), expected);
}

#[test]
fn test_operand_serde() {
    let operand = operand!([[fp - 3] + 2]);
    let serialized = serde_json::to_string(&operand).unwrap();
    assert_eq!(serialized, r#"{"DoubleDeref":[{"register":"FP","offset":-3},2]}"#);
    assert_eq!(serde_json::from_str::<ResOperand>(&serialized).unwrap(), operand);

    let immediate: ResOperand = serde_json::from_str(r#"{"Immediate":"-0x1"}"#).unwrap();
    assert_eq!(immediate, operand!(-1));

    let bin_op: ResOperand = serde_json::from_str(
        r#"{"BinOp":{"op":"Add","a":{"register":"AP","offset":0},"b":{"Immediate":"0x3"}}}"#,
    )
    .unwrap();
    assert_eq!(bin_op, operand!([ap] + 3));
}
