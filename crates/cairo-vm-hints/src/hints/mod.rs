use std::fmt::{Display, Formatter};

use indoc::writedoc;
use serde::{Deserialize, Serialize};

use crate::operand::{BinOpRhs, CellRef, ResOperand};

#[cfg(test)]
mod test;

// Represents a cairo hint.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub enum Hint {
    AllocSegment {
        dst: CellRef,
    },
    /// Allocates `size` cells from a segment shared by all constant size allocations.
    AllocConstantSize {
        size: ResOperand,
        dst: CellRef,
    },
    TestLessThan {
        lhs: ResOperand,
        rhs: ResOperand,
        dst: CellRef,
    },
    TestLessThanOrEqual {
        lhs: ResOperand,
        rhs: ResOperand,
        dst: CellRef,
    },
    /// Variant of TestLessThanOrEqual that compares addresses.
    TestLessThanOrEqualAddress {
        lhs: ResOperand,
        rhs: ResOperand,
        dst: CellRef,
    },
    /// Multiplies two 128-bit integers and returns two 128-bit integers: the high and low parts
    /// of the product.
    WideMul128 {
        lhs: ResOperand,
        rhs: ResOperand,
        high: CellRef,
        low: CellRef,
    },
    /// Computes lhs/rhs and returns the quotient and remainder.
    ///
    /// Note: the hint may be used to write an already assigned memory cell.
    DivMod {
        lhs: ResOperand,
        rhs: ResOperand,
        quotient: CellRef,
        remainder: CellRef,
    },
    /// Divides dividend (represented by 2 128bit limbs) by divisor (represented by 2 128bit
    /// limbs). Returns the quotient (represented by 2 128bit limbs) and remainder (represented by
    /// 2 128bit limbs).
    Uint256DivMod {
        dividend0: ResOperand,
        dividend1: ResOperand,
        divisor0: ResOperand,
        divisor1: ResOperand,
        quotient0: CellRef,
        quotient1: CellRef,
        remainder0: CellRef,
        remainder1: CellRef,
    },
    /// Divides dividend (represented by 4 128bit limbs) by divisor (represented by 2 128bit
    /// limbs). Returns the quotient (represented by 4 128bit limbs) and remainder (represented
    /// by 2 128bit limbs).
    Uint512DivModByUint256 {
        dividend0: ResOperand,
        dividend1: ResOperand,
        dividend2: ResOperand,
        dividend3: ResOperand,
        divisor0: ResOperand,
        divisor1: ResOperand,
        quotient0: CellRef,
        quotient1: CellRef,
        quotient2: CellRef,
        quotient3: CellRef,
        remainder0: CellRef,
        remainder1: CellRef,
    },
    SquareRoot {
        value: ResOperand,
        dst: CellRef,
    },
    /// Computes the square root of value_low<<128+value_high, stores the 64bit limbs of the
    /// result in sqrt0 and sqrt1 as well as the 128bit limbs of the remainder in remainder_low
    /// and remainder_high. The remainder is defined as `value - sqrt**2`.
    /// Lastly it checks whether `2*sqrt - remainder >= 2**128`.
    Uint256SquareRoot {
        value_low: ResOperand,
        value_high: ResOperand,
        sqrt0: CellRef,
        sqrt1: CellRef,
        remainder_low: CellRef,
        remainder_high: CellRef,
        sqrt_mul_2_minus_remainder_ge_u128: CellRef,
    },
    /// Generates the decomposition of `b` modulo `n` used by the u256 inverse libfunc: either an
    /// inverse `r` with `r * b = 1 + k * n`, or a common divisor `g` with `b = g * s` and
    /// `n = g * t`.
    Uint256InvModN {
        b0: ResOperand,
        b1: ResOperand,
        n0: ResOperand,
        n1: ResOperand,
        g0_or_no_inv: CellRef,
        g1_option: CellRef,
        s_or_r0: CellRef,
        s_or_r1: CellRef,
        t_or_k0: CellRef,
        t_or_k1: CellRef,
    },
    /// Finds some `x` and `y` such that `x * scalar + y = value` and `x <= max_x`.
    LinearSplit {
        value: ResOperand,
        scalar: ResOperand,
        max_x: ResOperand,
        x: CellRef,
        y: CellRef,
    },
    /// Samples a point on the EC.
    RandomEcPoint {
        x: CellRef,
        y: CellRef,
    },
    /// Writes a square root of `val` if `val` is a quadratic residue, and a square root of
    /// `3 * val` otherwise.
    ///
    /// Since 3 is not a quadratic residue, exactly one of `val` and `3 * val` is a quadratic
    /// residue (unless `val` is 0). The two cases are told apart by the root written: the smaller
    /// of `root` and `-root` (as canonical integers) for `val`, the larger one for `3 * val`.
    FieldSqrt {
        val: ResOperand,
        sqrt: CellRef,
    },
    /// Finds the two smallest of the arcs `a`, `b - a` and `PRIME - 1 - b`, and writes their
    /// decompositions to the range check segment.
    AssertLeFindSmallArcs {
        range_check_ptr: ResOperand,
        a: ResOperand,
        b: ResOperand,
    },
    /// Writes whether the arc (a, b) was excluded.
    AssertLeIsFirstArcExcluded {
        skip_exclude_a_flag: CellRef,
    },
    /// Writes whether the arc (b, PRIME - 1) was excluded.
    AssertLeIsSecondArcExcluded {
        skip_exclude_b_minus_a: CellRef,
    },
    /// Prints the values from start to end.
    /// Both must be pointers.
    DebugPrint {
        start: ResOperand,
        end: ResOperand,
    },
    /// Fills the values buffer of a circuit, given the add and mul mod builtin pointers.
    EvalCircuit {
        n_add_mods: ResOperand,
        add_mod_builtin: ResOperand,
        n_mul_mods: ResOperand,
        mul_mod_builtin: ResOperand,
    },
    EnterScope,
    ExitScope,
}

impl Hint {
    /// The name of the hint, used when reporting failures.
    pub fn name(&self) -> &'static str {
        match self {
            Hint::AllocSegment { .. } => "AllocSegment",
            Hint::AllocConstantSize { .. } => "AllocConstantSize",
            Hint::TestLessThan { .. } => "TestLessThan",
            Hint::TestLessThanOrEqual { .. } => "TestLessThanOrEqual",
            Hint::TestLessThanOrEqualAddress { .. } => "TestLessThanOrEqualAddress",
            Hint::WideMul128 { .. } => "WideMul128",
            Hint::DivMod { .. } => "DivMod",
            Hint::Uint256DivMod { .. } => "Uint256DivMod",
            Hint::Uint512DivModByUint256 { .. } => "Uint512DivModByUint256",
            Hint::SquareRoot { .. } => "SquareRoot",
            Hint::Uint256SquareRoot { .. } => "Uint256SquareRoot",
            Hint::Uint256InvModN { .. } => "Uint256InvModN",
            Hint::LinearSplit { .. } => "LinearSplit",
            Hint::RandomEcPoint { .. } => "RandomEcPoint",
            Hint::FieldSqrt { .. } => "FieldSqrt",
            Hint::AssertLeFindSmallArcs { .. } => "AssertLeFindSmallArcs",
            Hint::AssertLeIsFirstArcExcluded { .. } => "AssertLeIsFirstArcExcluded",
            Hint::AssertLeIsSecondArcExcluded { .. } => "AssertLeIsSecondArcExcluded",
            Hint::DebugPrint { .. } => "DebugPrint",
            Hint::EvalCircuit { .. } => "EvalCircuit",
            Hint::EnterScope => "EnterScope",
            Hint::ExitScope => "ExitScope",
        }
    }
}

/// Formats the right hand side of a binary operation as a python expression.
struct BinOpRhsFormatter<'a>(&'a BinOpRhs);
impl Display for BinOpRhsFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            BinOpRhs::Cell(cell) => write!(f, "memory{cell}"),
            BinOpRhs::Immediate(value) => write!(f, "{}", value.value),
        }
    }
}

/// Formats an operand as a python expression. Binary operations on integers are reduced modulo
/// the prime, binary operations on addresses are not.
struct PythonicOperand<'a> {
    operand: &'a ResOperand,
    is_address: bool,
}
impl Display for PythonicOperand<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.operand {
            ResOperand::Immediate(value) => write!(f, "{}", value.value),
            ResOperand::Deref(cell) => write!(f, "memory{cell}"),
            ResOperand::DoubleDeref(cell, 0) => write!(f, "memory[memory{cell}]"),
            ResOperand::DoubleDeref(cell, extra) if *extra < 0 => {
                write!(f, "memory[memory{cell} - {}]", extra.unsigned_abs())
            }
            ResOperand::DoubleDeref(cell, extra) => write!(f, "memory[memory{cell} + {extra}]"),
            ResOperand::BinOp(bin_op) => {
                let (a, op, b) = (bin_op.a, bin_op.op.symbol(), BinOpRhsFormatter(&bin_op.b));
                let expr = format!("memory{a} {op} {b}");
                if self.is_address { write!(f, "{expr}") } else { write!(f, "({expr}) % PRIME") }
            }
        }
    }
}

fn as_integer(operand: &ResOperand) -> PythonicOperand<'_> {
    PythonicOperand { operand, is_address: false }
}

fn as_address(operand: &ResOperand) -> PythonicOperand<'_> {
    PythonicOperand { operand, is_address: true }
}

impl Display for Hint {
    /// Formats the hint as the equivalent python hint.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::AllocSegment { dst } => write!(f, "memory{dst} = segments.add()"),
            Hint::AllocConstantSize { size, dst } => {
                let size = as_integer(size);
                writedoc!(
                    f,
                    "

                        if '__boxed_segment' not in globals():
                            __boxed_segment = segments.add()
                        memory{dst} = __boxed_segment
                        __boxed_segment += {size}
                    "
                )
            }
            Hint::TestLessThan { lhs, rhs, dst } => {
                let [lhs, rhs] = [lhs, rhs].map(as_integer);
                write!(f, "memory{dst} = {lhs} < {rhs}")
            }
            Hint::TestLessThanOrEqual { lhs, rhs, dst } => {
                let [lhs, rhs] = [lhs, rhs].map(as_integer);
                write!(f, "memory{dst} = {lhs} <= {rhs}")
            }
            Hint::TestLessThanOrEqualAddress { lhs, rhs, dst } => {
                let [lhs, rhs] = [lhs, rhs].map(as_address);
                write!(f, "memory{dst} = {lhs} <= {rhs}")
            }
            Hint::WideMul128 { lhs, rhs, high, low } => {
                let [lhs, rhs] = [lhs, rhs].map(as_integer);
                write!(f, "(memory{high}, memory{low}) = divmod({lhs} * {rhs}, 2**128)")
            }
            Hint::DivMod { lhs, rhs, quotient, remainder } => {
                let [lhs, rhs] = [lhs, rhs].map(as_integer);
                write!(f, "(memory{quotient}, memory{remainder}) = divmod({lhs}, {rhs})")
            }
            Hint::Uint256DivMod {
                dividend0,
                dividend1,
                divisor0,
                divisor1,
                quotient0,
                quotient1,
                remainder0,
                remainder1,
            } => {
                let [dividend0, dividend1, divisor0, divisor1] =
                    [dividend0, dividend1, divisor0, divisor1].map(as_integer);
                writedoc!(
                    f,
                    "

                        dividend = {dividend0} + {dividend1} * 2**128
                        divisor = {divisor0} + {divisor1} * 2**128
                        quotient, remainder = divmod(dividend, divisor)
                        memory{quotient0} = quotient & 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
                        memory{quotient1} = quotient >> 128
                        memory{remainder0} = remainder & 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
                        memory{remainder1} = remainder >> 128
                    "
                )
            }
            Hint::Uint512DivModByUint256 {
                dividend0,
                dividend1,
                dividend2,
                dividend3,
                divisor0,
                divisor1,
                quotient0,
                quotient1,
                quotient2,
                quotient3,
                remainder0,
                remainder1,
            } => {
                let [dividend0, dividend1, dividend2, dividend3, divisor0, divisor1] =
                    [dividend0, dividend1, dividend2, dividend3, divisor0, divisor1]
                        .map(as_integer);
                writedoc!(
                    f,
                    "

                        dividend = {dividend0} + {dividend1} * 2**128 + {dividend2} * 2**256 + \
                     {dividend3} * 2**384
                        divisor = {divisor0} + {divisor1} * 2**128
                        quotient, remainder = divmod(dividend, divisor)
                        memory{quotient0} = quotient & 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
                        memory{quotient1} = (quotient >> 128) & 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
                        memory{quotient2} = (quotient >> 256) & 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
                        memory{quotient3} = quotient >> 384
                        memory{remainder0} = remainder & 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
                        memory{remainder1} = remainder >> 128
                    "
                )
            }
            Hint::SquareRoot { value, dst } => {
                let value = as_integer(value);
                writedoc!(
                    f,
                    "

                        import math
                        memory{dst} = math.isqrt({value})
                    "
                )
            }
            Hint::Uint256SquareRoot {
                value_low,
                value_high,
                sqrt0,
                sqrt1,
                remainder_low,
                remainder_high,
                sqrt_mul_2_minus_remainder_ge_u128,
            } => {
                let [value_low, value_high] = [value_low, value_high].map(as_integer);
                writedoc!(
                    f,
                    "

                        import math;
                        value = {value_low} + {value_high} * 2**128
                        root = math.isqrt(value)
                        remainder = value - root ** 2
                        memory{sqrt0} = root & 0xFFFFFFFFFFFFFFFF
                        memory{sqrt1} = root >> 64
                        memory{remainder_low} = remainder & 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
                        memory{remainder_high} = remainder >> 128
                        memory{sqrt_mul_2_minus_remainder_ge_u128} = root * 2 - remainder >= 2**128
                    "
                )
            }
            Hint::Uint256InvModN {
                b0,
                b1,
                n0,
                n1,
                g0_or_no_inv,
                g1_option,
                s_or_r0,
                s_or_r1,
                t_or_k0,
                t_or_k1,
            } => {
                let [b0, b1, n0, n1] = [b0, b1, n0, n1].map(as_integer);
                writedoc!(
                    f,
                    "

                        from starkware.python.math_utils import igcdex
                        b = {b0} + ({b1} << 128)
                        n = {n0} + ({n1} << 128)
                        (_, r, g) = igcdex(n, b)
                        if n == 1:
                            memory{s_or_r0} = {b0}
                            memory{s_or_r1} = {b1}
                            memory{t_or_k0} = 1
                            memory{t_or_k1} = 0
                            memory{g0_or_no_inv} = 1
                            memory{g1_option} = 0
                        elif g != 1:
                            if g % 2 == 0:
                                g = 2
                            s = b // g
                            t = n // g
                            memory{g0_or_no_inv} = g & 0xffffffffffffffffffffffffffffffff
                            memory{g1_option} = g >> 128
                            memory{s_or_r0} = s & 0xffffffffffffffffffffffffffffffff
                            memory{s_or_r1} = s >> 128
                            memory{t_or_k0} = t & 0xffffffffffffffffffffffffffffffff
                            memory{t_or_k1} = t >> 128
                        else:
                            r %= n
                            k = (r * b - 1) // n
                            memory{g0_or_no_inv} = 0
                            memory{g1_option} = 0
                            memory{s_or_r0} = r & 0xffffffffffffffffffffffffffffffff
                            memory{s_or_r1} = r >> 128
                            memory{t_or_k0} = k & 0xffffffffffffffffffffffffffffffff
                            memory{t_or_k1} = k >> 128
                    "
                )
            }
            Hint::LinearSplit { value, scalar, max_x, x, y } => {
                let [value, scalar, max_x] = [value, scalar, max_x].map(as_integer);
                writedoc!(
                    f,
                    "

                        (value, scalar) = ({value}, {scalar})
                        x = min(value // scalar, {max_x})
                        y = value - x * scalar
                        memory{x} = x
                        memory{y} = y
                    "
                )
            }
            Hint::RandomEcPoint { x, y } => {
                writedoc!(
                    f,
                    "

                        from starkware.crypto.signature.signature import ALPHA, BETA, FIELD_PRIME
                        from starkware.python.math_utils import random_ec_point
                        (memory{x}, memory{y}) = random_ec_point(FIELD_PRIME, ALPHA, BETA)
                    "
                )
            }
            Hint::FieldSqrt { val, sqrt } => {
                let val = as_integer(val);
                writedoc!(
                    f,
                    "

                        from starkware.crypto.signature.signature import FIELD_PRIME
                        from starkware.python.math_utils import is_quad_residue, sqrt

                        val = {val}
                        if is_quad_residue(val, FIELD_PRIME):
                            memory{sqrt} = sqrt(val, FIELD_PRIME)
                        else:
                            memory{sqrt} = -sqrt(val * 3, FIELD_PRIME)
                    "
                )
            }
            Hint::AssertLeFindSmallArcs { range_check_ptr, a, b } => {
                let [range_check_ptr, a, b] = [range_check_ptr, a, b].map(as_integer);
                writedoc!(
                    f,
                    "

                        import itertools

                        from starkware.cairo.common.math_utils import assert_integer
                        assert_integer({a})
                        assert_integer({b})
                        a = {a} % PRIME
                        b = {b} % PRIME
                        assert a <= b, f'a = {{a}} is not less than or equal to b = {{b}}.'

                        # Find an arc less than PRIME / 3, and another less than PRIME / 2.
                        lengths_and_indices = [(a, 0), (b - a, 1), (PRIME - 1 - b, 2)]
                        lengths_and_indices.sort()
                        assert lengths_and_indices[0][0] <= PRIME // 3 and lengths_and_indices[1][0] <= PRIME // 2
                        excluded = lengths_and_indices[2][1]

                        memory[{range_check_ptr} + 1], memory[{range_check_ptr} + 0] = (
                            divmod(lengths_and_indices[0][0], 3544607988759775765608368578435044694))
                        memory[{range_check_ptr} + 3], memory[{range_check_ptr} + 2] = (
                            divmod(lengths_and_indices[1][0], 5316911983139663648412552867652567041))
                    "
                )
            }
            Hint::AssertLeIsFirstArcExcluded { skip_exclude_a_flag } => {
                write!(f, "memory{skip_exclude_a_flag} = 1 if excluded == 2 else 0")
            }
            Hint::AssertLeIsSecondArcExcluded { skip_exclude_b_minus_a } => {
                write!(f, "memory{skip_exclude_b_minus_a} = 1 if excluded == 1 else 0")
            }
            Hint::DebugPrint { start, end } => {
                let [start, end] = [start, end].map(as_address);
                writedoc!(
                    f,
                    "

                        curr = {start}
                        end = {end}
                        while curr != end:
                            print(hex(memory[curr]))
                            curr += 1
                    "
                )
            }
            Hint::EvalCircuit { n_add_mods, add_mod_builtin, n_mul_mods, mul_mod_builtin } => {
                let [n_add_mods, n_mul_mods] = [n_add_mods, n_mul_mods].map(as_integer);
                let [add_mod_builtin, mul_mod_builtin] =
                    [add_mod_builtin, mul_mod_builtin].map(as_address);
                writedoc!(
                    f,
                    "

                        from starkware.cairo.lang.builtins.modulo.mod_builtin_runner import ModBuiltinRunner

                        ModBuiltinRunner.fill_memory(
                            memory=memory,
                            add_mod=({add_mod_builtin}, builtin_runners[\"add_mod_builtin\"], {n_add_mods}),
                            mul_mod=({mul_mod_builtin}, builtin_runners[\"mul_mod_builtin\"], {n_mul_mods}),
                        )
                    "
                )
            }
            Hint::EnterScope => write!(f, "vm_enter_scope()"),
            Hint::ExitScope => write!(f, "vm_exit_scope()"),
        }
    }
}
