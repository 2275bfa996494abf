use indoc::indoc;
use pretty_assertions::assert_eq;
use test_log::test;

use crate::hints::Hint;
use crate::operand::{BinOpRhs, CellRef, Operation, Register, ResOperand};
use crate::{cell, operand};

#[test]
fn test_alloc_segment_format() {
    let dst = CellRef { register: Register::AP, offset: 5 };
    let hint = Hint::AllocSegment { dst };

    assert_eq!(hint.to_string(), "memory[ap + 5] = segments.add()");
}

#[test]
fn test_less_than_format() {
    let ap_based = operand!([ap + 6]);
    let fp_based = operand!([fp + 4]);
    let immediate = operand!(3);

    assert_eq!(
        Hint::TestLessThan {
            lhs: ap_based.clone(),
            rhs: fp_based.clone(),
            dst: CellRef { register: Register::AP, offset: 0 }
        }
        .to_string(),
        "memory[ap] = memory[ap + 6] < memory[fp + 4]"
    );
    assert_eq!(
        Hint::TestLessThan {
            lhs: fp_based,
            rhs: immediate.clone(),
            dst: CellRef { register: Register::AP, offset: 0 }
        }
        .to_string(),
        "memory[ap] = memory[fp + 4] < 3"
    );
    assert_eq!(
        Hint::TestLessThanOrEqual {
            lhs: immediate,
            rhs: ap_based,
            dst: CellRef { register: Register::AP, offset: 0 }
        }
        .to_string(),
        "memory[ap] = 3 <= memory[ap + 6]"
    );
}

#[test]
fn test_less_than_or_equal_address_format() {
    assert_eq!(
        Hint::TestLessThanOrEqualAddress {
            lhs: operand!([fp - 3] + 2),
            rhs: operand!([[ap + 1]]),
            dst: cell!([ap + 2]),
        }
        .to_string(),
        "memory[ap + 2] = memory[fp - 3] + 2 <= memory[memory[ap + 1]]"
    );
}

#[test]
fn test_bin_op_operand_format() {
    let lhs = ResOperand::bin_op(Operation::Mul, CellRef::fp(-3), BinOpRhs::immediate(3));
    assert_eq!(lhs, operand!([fp - 3] * 3));

    assert_eq!(
        Hint::DivMod { lhs, rhs: operand!(7), quotient: cell!([ap]), remainder: cell!([ap + 1]) }
            .to_string(),
        "(memory[ap], memory[ap + 1]) = divmod((memory[fp - 3] * 3) % PRIME, 7)"
    );
}

#[test]
fn test_debug_hint_format() {
    assert_eq!(
        Hint::DebugPrint { start: operand!([ap + 6]), end: operand!([fp - 8]) }.to_string(),
        indoc! {"

            curr = memory[ap + 6]
            end = memory[fp - 8]
            while curr != end:
                print(hex(memory[curr]))
                curr += 1
        "}
    );
}

#[test]
fn test_linear_split_format() {
    assert_eq!(
        Hint::LinearSplit {
            value: operand!([fp - 4]),
            scalar: operand!(42),
            max_x: operand!(9999999999_u64),
            x: cell!([ap]),
            y: cell!([ap + 1]),
        }
        .to_string(),
        indoc! {"

            (value, scalar) = (memory[fp - 4], 42)
            x = min(value // scalar, 9999999999)
            y = value - x * scalar
            memory[ap] = x
            memory[ap + 1] = y
        "}
    );
}

#[test]
fn test_arc_flags_format() {
    assert_eq!(
        Hint::AssertLeIsFirstArcExcluded { skip_exclude_a_flag: cell!([ap + 3]) }.to_string(),
        "memory[ap + 3] = 1 if excluded == 2 else 0"
    );
    assert_eq!(
        Hint::AssertLeIsSecondArcExcluded { skip_exclude_b_minus_a: cell!([fp]) }.to_string(),
        "memory[fp] = 1 if excluded == 1 else 0"
    );
}

#[test]
fn test_scope_hints_format() {
    assert_eq!(Hint::EnterScope.to_string(), "vm_enter_scope()");
    assert_eq!(Hint::ExitScope.to_string(), "vm_exit_scope()");
    assert_eq!(Hint::ExitScope.name(), "ExitScope");
}

#[test]
fn test_hint_deserialization() {
    let hint: Hint = serde_json::from_str(indoc! {r#"
        {
            "WideMul128": {
                "lhs": {"Deref": {"register": "FP", "offset": -4}},
                "rhs": {"Immediate": "0x101"},
                "high": {"register": "AP", "offset": 0},
                "low": {"register": "AP", "offset": 1}
            }
        }
    "#})
    .unwrap();

    assert_eq!(
        hint,
        Hint::WideMul128 {
            lhs: operand!([fp - 4]),
            rhs: operand!(257),
            high: cell!([ap]),
            low: cell!([ap + 1]),
        }
    );
    assert_eq!(hint.name(), "WideMul128");
    assert_eq!(serde_json::from_str::<Hint>(&serde_json::to_string(&hint).unwrap()).unwrap(), hint);

    let hint: Hint = serde_json::from_str(r#""EnterScope""#).unwrap();
    assert_eq!(hint, Hint::EnterScope);
}
