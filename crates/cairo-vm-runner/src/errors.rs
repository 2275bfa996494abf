use cairo_vm_memory::{MemoryAddress, MemoryError, MemoryValue};
use num_bigint::BigUint;
use starknet_types_core::felt::Felt;
use thiserror::Error;

/// Errors raised while executing a single hint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error("Cannot divide by zero: `{operand}` is 0.")]
    DivisionByZero { operand: &'static str },
    #[error("`{operand}` should be u128, found {value}.")]
    NotU128 { operand: &'static str, value: Felt },
    #[error("Invalid size for `{operand}`: {value}.")]
    InvalidSize { operand: &'static str, value: Felt },
    #[error("Value {value} of `{operand}` is out of range.")]
    ValueOutOfRange { operand: &'static str, value: Felt },
    #[error("Expected an address for `{operand}`, found {value}.")]
    NotAnAddress { operand: &'static str, value: MemoryValue },
    #[error("Illegal argument for a buffer: {0}.")]
    IllegalBuffer(String),
    #[error("Neither {0} nor 3 times it has a square root.")]
    NoFieldSqrt(Felt),
    #[error("Variable `{0}` is not in scope.")]
    MissingScopeVariable(String),
    #[error("Variable `{name}` holds a {actual}, expected a {expected}.")]
    ScopeValueKindMismatch { name: String, expected: &'static str, actual: &'static str },
    #[error("Cannot exit the main scope.")]
    CannotExitMainScope,
    #[error("Expected integer at address {0}.")]
    ExpectedInteger(MemoryAddress),
    #[error("{value} is not invertible modulo {modulus}.")]
    NotInvertible { value: BigUint, modulus: BigUint },
    #[error(
        "Circuit evaluation is stuck at add gate {add_index} and mul gate {mul_index}: every \
         remaining gate has more than one unknown value."
    )]
    CircuitNonconvergent { add_index: u64, mul_index: u64 },
}
