use starknet_types_core::felt::Felt;
use thiserror::Error;

use crate::address::MemoryAddress;
use crate::value::MemoryValue;

/// Errors of the segmented memory and of the arithmetic over its values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Offset {offset} applied to {address} is out of bounds.")]
    InvalidOffset { address: MemoryAddress, offset: i128 },
    #[error("Cannot subtract addresses of different segments: {lhs} - {rhs}.")]
    SegmentMismatch { lhs: MemoryAddress, rhs: MemoryAddress },
    #[error("Subtracting {rhs} from {lhs} results in a negative offset.")]
    NegativeResult { lhs: MemoryAddress, rhs: MemoryAddress },
    #[error("Value {value} does not fit in an address offset.")]
    OffsetOutOfRange { value: Felt },
    #[error("Invalid operands for `{op}`: {lhs} and {rhs}.")]
    InvalidOperand { op: &'static str, lhs: MemoryValue, rhs: MemoryValue },
    #[error("Cannot divide {lhs} by zero.")]
    DivisionByZero { lhs: Felt },
    #[error("Unknown value at address {0}.")]
    UnknownValue(MemoryAddress),
    #[error("Inconsistent write at address {address}: {old} != {new}.")]
    InconsistentWrite { address: MemoryAddress, old: MemoryValue, new: MemoryValue },
    #[error("Segment {0} was not allocated.")]
    UnknownSegment(usize),
    #[error("Cannot write an unknown value to address {0}.")]
    WriteUnknownValue(MemoryAddress),
    #[error("Address {0} is beyond the addressable range.")]
    OffsetTooLarge(MemoryAddress),
    #[error("Expected integer at address {address}, found {value}.")]
    ExpectedInteger { address: MemoryAddress, value: MemoryValue },
    #[error("Expected relocatable at address {address}, found {value}.")]
    ExpectedRelocatable { address: MemoryAddress, value: MemoryValue },
    #[error("Missing relocation base for segment {0}.")]
    MissingRelocation(usize),
    #[error("Memory was already relocated.")]
    AlreadyRelocated,
}
