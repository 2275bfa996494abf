use std::fmt::Display;

use cairo_vm_utils::bigint::BigIntAsHex;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "operand_test.rs"]
mod test;

/// The registers hint operands are relative to. Both point into the execution segment.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Register {
    /// The allocation pointer.
    AP,
    /// The frame pointer.
    FP,
}
impl Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Register::AP => "ap",
            Register::FP => "fp",
        })
    }
}

/// The execution segment cell at `register + offset`.
///
/// Hints write their results to cell references and read their inputs through them.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub register: Register,
    pub offset: i16,
}
impl CellRef {
    pub const fn new(register: Register, offset: i16) -> Self {
        Self { register, offset }
    }

    pub const fn ap(offset: i16) -> Self {
        Self::new(Register::AP, offset)
    }

    pub const fn fp(offset: i16) -> Self {
        Self::new(Register::FP, offset)
    }
}
/// Renders as `[ap + 2]`, `[fp - 3]` or `[ap]`.
impl Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.offset {
            0 => write!(f, "[{}]", self.register),
            offset if offset < 0 => write!(f, "[{} - {}]", self.register, offset.unsigned_abs()),
            offset => write!(f, "[{} + {offset}]", self.register),
        }
    }
}

/// The right hand side of a binary operation: a cell or a constant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOpRhs {
    Cell(CellRef),
    Immediate(BigIntAsHex),
}
impl BinOpRhs {
    pub fn immediate(value: impl Into<BigInt>) -> Self {
        Self::Immediate(BigIntAsHex { value: value.into() })
    }
}
impl Display for BinOpRhs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOpRhs::Cell(cell) => write!(f, "{cell}"),
            BinOpRhs::Immediate(value) => write!(f, "{}", value.value),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Mul,
}
impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Mul => "*",
        }
    }
}

/// `a op b`, where `a` is always read from a cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinOp {
    pub op: Operation,
    pub a: CellRef,
    pub b: BinOpRhs,
}
impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.a, self.op.symbol(), self.b)
    }
}

/// A value a hint reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResOperand {
    /// A constant, taken modulo the field prime when resolved.
    Immediate(BigIntAsHex),
    /// The content of a cell.
    Deref(CellRef),
    /// The content of the cell at the address stored in a cell, shifted by an extra offset.
    DoubleDeref(CellRef, i16),
    /// A binary operation on the content of a cell.
    BinOp(BinOp),
}
impl ResOperand {
    pub fn immediate(value: impl Into<BigInt>) -> Self {
        Self::Immediate(BigIntAsHex { value: value.into() })
    }

    pub fn bin_op(op: Operation, a: CellRef, b: BinOpRhs) -> Self {
        Self::BinOp(BinOp { op, a, b })
    }
}
impl From<CellRef> for ResOperand {
    fn from(cell: CellRef) -> Self {
        Self::Deref(cell)
    }
}
impl Display for ResOperand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResOperand::Immediate(value) => write!(f, "{}", value.value),
            ResOperand::Deref(cell) => write!(f, "{cell}"),
            ResOperand::DoubleDeref(cell, 0) => write!(f, "[{cell}]"),
            ResOperand::DoubleDeref(cell, extra) if *extra < 0 => {
                write!(f, "[{cell} - {}]", extra.unsigned_abs())
            }
            ResOperand::DoubleDeref(cell, extra) => write!(f, "[{cell} + {extra}]"),
            ResOperand::BinOp(bin_op) => write!(f, "{bin_op}"),
        }
    }
}
