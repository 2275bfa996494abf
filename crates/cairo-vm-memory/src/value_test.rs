use pretty_assertions::assert_eq;
use starknet_types_core::felt::Felt;
use test_case::test_case;
use test_log::test;

use super::MemoryValue;
use crate::address::MemoryAddress;
use crate::errors::MemoryError;

#[test_case(
    MemoryValue::from_int(3),
    MemoryValue::from_int(4),
    MemoryValue::from_int(7);
    "felt + felt"
)]
#[test_case(
    MemoryValue::from_segment_and_offset(2, 5),
    MemoryValue::from_int(4),
    MemoryValue::from_segment_and_offset(2, 9);
    "relocatable + felt"
)]
#[test_case(
    MemoryValue::from_int(4),
    MemoryValue::from_segment_and_offset(2, 5),
    MemoryValue::from_segment_and_offset(2, 9);
    "felt + relocatable"
)]
#[test_case(
    MemoryValue::from_segment_and_offset(2, 5),
    MemoryValue::from_int(-5),
    MemoryValue::from_segment_and_offset(2, 0);
    "relocatable + negative felt"
)]
fn test_add(lhs: MemoryValue, rhs: MemoryValue, expected: MemoryValue) {
    assert_eq!(lhs.checked_add(&rhs), Ok(expected));
}

#[test]
fn test_add_invalid() {
    let lhs = MemoryValue::from_segment_and_offset(1, 1);
    let rhs = MemoryValue::from_segment_and_offset(1, 2);
    assert_eq!(lhs.checked_add(&rhs), Err(MemoryError::InvalidOperand { op: "+", lhs, rhs }));
    assert!(matches!(
        lhs.checked_add(&MemoryValue::from_int(u128::MAX)),
        Err(MemoryError::OffsetOutOfRange { .. })
    ));
}

#[test_case(
    MemoryValue::from_int(10),
    MemoryValue::from_int(4),
    MemoryValue::from_int(6);
    "felt - felt"
)]
#[test_case(
    MemoryValue::from_segment_and_offset(2, 5),
    MemoryValue::from_int(4),
    MemoryValue::from_segment_and_offset(2, 1);
    "relocatable - felt"
)]
#[test_case(
    MemoryValue::from_segment_and_offset(2, 5),
    MemoryValue::from_segment_and_offset(2, 3),
    MemoryValue::from_int(2);
    "relocatable - relocatable"
)]
#[test_case(
    MemoryValue::from_segment_and_offset(2, 3),
    MemoryValue::from_segment_and_offset(2, 5),
    MemoryValue::from_int(-2);
    "negative relocatable difference"
)]
fn test_sub(lhs: MemoryValue, rhs: MemoryValue, expected: MemoryValue) {
    assert_eq!(lhs.checked_sub(&rhs), Ok(expected));
}

#[test]
fn test_sub_invalid() {
    let address = MemoryValue::from_segment_and_offset(2, 3);
    assert_eq!(
        address.checked_sub(&MemoryValue::from_segment_and_offset(1, 3)),
        Err(MemoryError::SegmentMismatch {
            lhs: MemoryAddress::new(2, 3),
            rhs: MemoryAddress::new(1, 3)
        })
    );
    assert!(matches!(
        MemoryValue::from_int(1).checked_sub(&address),
        Err(MemoryError::InvalidOperand { op: "-", .. })
    ));
    assert!(address.checked_sub(&MemoryValue::from_int(4)).is_err());
}

#[test]
fn test_mul_and_div() {
    let six = MemoryValue::from_int(6);
    let three = MemoryValue::from_int(3);
    assert_eq!(six.checked_mul(&three), Ok(MemoryValue::from_int(18)));
    assert_eq!(six.checked_div(&three), Ok(MemoryValue::from_int(2)));
    // Division is in the field: 1 / 2 is the inverse of 2.
    let half = MemoryValue::from_int(1).checked_div(&MemoryValue::from_int(2)).unwrap();
    assert_eq!(half.checked_mul(&MemoryValue::from_int(2)), Ok(MemoryValue::from_int(1)));
    assert_eq!(
        six.checked_div(&MemoryValue::from_int(0)),
        Err(MemoryError::DivisionByZero { lhs: Felt::from(6) })
    );

    let address = MemoryValue::from_segment_and_offset(1, 1);
    assert!(matches!(address.checked_mul(&three), Err(MemoryError::InvalidOperand { .. })));
    assert!(matches!(three.checked_div(&address), Err(MemoryError::InvalidOperand { .. })));
}

#[test]
fn test_equality_and_order() {
    let felt = MemoryValue::from_int(1);
    let address = MemoryValue::from_segment_and_offset(0, 1);
    assert_ne!(felt, address);
    assert_eq!(felt.partial_cmp(&address), None);
    assert!(!(felt < address) && !(felt <= address));

    assert!(MemoryValue::from_int(1) < MemoryValue::from_int(-1));
    assert!(
        MemoryValue::from_segment_and_offset(1, 9) < MemoryValue::from_segment_and_offset(2, 0)
    );
}

#[test]
fn test_accessors() {
    assert_eq!(MemoryValue::from_int(12).to_u64(), Some(12));
    assert_eq!(MemoryValue::from_int(-1).to_u64(), None);
    assert_eq!(
        MemoryValue::from_segment_and_offset(3, 4).as_address(),
        Some(MemoryAddress::new(3, 4))
    );
    assert_eq!(MemoryValue::from_segment_and_offset(3, 4).as_felt(), None);
    assert!(!MemoryValue::Unknown.is_known());
    assert_eq!(MemoryValue::from_segment_and_offset(3, 4).to_string(), "3:4");
}
