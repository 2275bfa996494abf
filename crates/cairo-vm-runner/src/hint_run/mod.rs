use std::collections::HashMap;
use std::ops::Shl;

use cairo_vm_hints::hints::Hint;
use cairo_vm_hints::operand::{BinOp, BinOpRhs, CellRef, Operation, ResOperand};
use cairo_vm_memory::{Memory, MemoryAddress, MemoryValue};
use cairo_vm_utils::{pow_2, try_extract_matches};
use itertools::Itertools;
use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{Signed, ToPrimitive, Zero};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use starknet_types_core::felt::{Felt, NonZeroFelt};

use crate::config::HintRunnerConfig;
use crate::context::{ExecutionContext, ScopeValue};
use crate::errors::HintError;

pub mod circuit;


/// The scope variable holding the arc left out by `AssertLeFindSmallArcs`.
const EXCLUDED_ARC: &str = "excluded";

/// The beta coefficient of the Stark curve `y^2 = x^3 + x + beta`.
const BETA: Felt =
    Felt::from_hex_unchecked("0x6f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89");

/// Writes a value to the execution segment cell `cell_ref` points to.
macro_rules! insert_value_to_cellref {
    ($memory:ident, $ctx:ident, $cell_ref:expr, $value:expr) => {
        $memory.write($ctx.cell_ref_to_address($cell_ref)?, MemoryValue::from($value))
    };
}

/// Fetches the felt value of a cell.
fn get_cell_val(
    memory: &Memory,
    ctx: &ExecutionContext,
    cell: &CellRef,
) -> Result<Felt, HintError> {
    Ok(memory.read_felt(ctx.cell_ref_to_address(cell)?)?)
}

/// Fetches the value of a cell, felt or address.
fn get_cell_maybe(
    memory: &Memory,
    ctx: &ExecutionContext,
    cell: &CellRef,
) -> Result<MemoryValue, HintError> {
    Ok(memory.read(ctx.cell_ref_to_address(cell)?)?)
}

/// Fetches the address stored in a cell plus an offset, useful for pointers.
pub fn get_ptr(
    memory: &Memory,
    ctx: &ExecutionContext,
    cell: &CellRef,
    offset: &Felt,
) -> Result<MemoryAddress, HintError> {
    Ok(memory.read_address(ctx.cell_ref_to_address(cell)?)?.add_felt(offset)?)
}

/// Fetches the felt a pointer stored at `cell` plus an offset points to.
fn get_double_deref_val(
    memory: &Memory,
    ctx: &ExecutionContext,
    cell: &CellRef,
    offset: &Felt,
) -> Result<Felt, HintError> {
    Ok(memory.read_felt(get_ptr(memory, ctx, cell, offset)?)?)
}

fn get_double_deref_maybe(
    memory: &Memory,
    ctx: &ExecutionContext,
    cell: &CellRef,
    offset: &Felt,
) -> Result<MemoryValue, HintError> {
    Ok(memory.read(get_ptr(memory, ctx, cell, offset)?)?)
}

fn bin_op_rhs_val(
    memory: &Memory,
    ctx: &ExecutionContext,
    operand: &BinOpRhs,
) -> Result<Felt, HintError> {
    match operand {
        BinOpRhs::Cell(cell) => get_cell_val(memory, ctx, cell),
        BinOpRhs::Immediate(x) => Ok(Felt::from(x.value.clone())),
    }
}

/// Fetches the felt value of `res_operand`.
pub fn get_val(
    memory: &Memory,
    ctx: &ExecutionContext,
    res_operand: &ResOperand,
) -> Result<Felt, HintError> {
    match res_operand {
        ResOperand::Deref(cell) => get_cell_val(memory, ctx, cell),
        ResOperand::DoubleDeref(cell, offset) => {
            get_double_deref_val(memory, ctx, cell, &(*offset).into())
        }
        ResOperand::Immediate(x) => Ok(Felt::from(x.value.clone())),
        ResOperand::BinOp(op) => {
            let a = get_cell_val(memory, ctx, &op.a)?;
            let b = bin_op_rhs_val(memory, ctx, &op.b)?;
            match op.op {
                Operation::Add => Ok(a + b),
                Operation::Mul => Ok(a * b),
            }
        }
    }
}

/// Fetches the value of `res_operand`, felt or address.
fn get_maybe(
    memory: &Memory,
    ctx: &ExecutionContext,
    res_operand: &ResOperand,
) -> Result<MemoryValue, HintError> {
    match res_operand {
        ResOperand::Deref(cell) => get_cell_maybe(memory, ctx, cell),
        ResOperand::DoubleDeref(cell, offset) => {
            get_double_deref_maybe(memory, ctx, cell, &(*offset).into())
        }
        ResOperand::Immediate(x) => Ok(Felt::from(x.value.clone()).into()),
        ResOperand::BinOp(op) => {
            let a = get_cell_maybe(memory, ctx, &op.a)?;
            let b = MemoryValue::from(bin_op_rhs_val(memory, ctx, &op.b)?);
            Ok(match op.op {
                Operation::Add => a.checked_add(&b)?,
                Operation::Mul => a.checked_mul(&b)?,
            })
        }
    }
}

/// Extracts a parameter assumed to be a buffer: a cell holding a pointer, optionally plus an
/// immediate offset.
pub fn extract_buffer(buffer: &ResOperand) -> Result<(&CellRef, Felt), HintError> {
    match buffer {
        ResOperand::Deref(cell) => Ok((cell, Felt::ZERO)),
        ResOperand::BinOp(BinOp { op: Operation::Add, a, b }) => {
            let offset = try_extract_matches!(b, BinOpRhs::Immediate)
                .ok_or_else(|| HintError::IllegalBuffer(buffer.to_string()))?;
            Ok((a, Felt::from(offset.value.clone())))
        }
        _ => Err(HintError::IllegalBuffer(buffer.to_string())),
    }
}

/// Extracts a parameter assumed to be a buffer, and converts it into an address.
pub fn extract_relocatable(
    memory: &Memory,
    ctx: &ExecutionContext,
    buffer: &ResOperand,
) -> Result<MemoryAddress, HintError> {
    let (base, offset) = extract_buffer(buffer)?;
    get_ptr(memory, ctx, base, &offset)
}

/// Allocates `size` cells on the segment shared by all constant size allocations.
/// The segment is created on the first allocation.
fn alloc_memory(
    memory: &mut Memory,
    ctx: &mut ExecutionContext,
    size: u64,
) -> Result<MemoryAddress, HintError> {
    let next_address = match ctx.constant_size_segment {
        Some(address) => address,
        None => memory.allocate_segment(),
    };
    ctx.constant_size_segment = Some((next_address + size)?);
    Ok(next_address)
}

/// Fetches a value that must fit in 128 bits.
fn get_u128_val(
    memory: &Memory,
    ctx: &ExecutionContext,
    operand: &'static str,
    res_operand: &ResOperand,
) -> Result<BigUint, HintError> {
    let value = get_val(memory, ctx, res_operand)?;
    let value_big = value.to_biguint();
    if value_big.bits() > 128 {
        return Err(HintError::NotU128 { operand, value });
    }
    Ok(value_big)
}

fn nonzero(value: BigUint, operand: &'static str) -> Result<BigUint, HintError> {
    if value.is_zero() { Err(HintError::DivisionByZero { operand }) } else { Ok(value) }
}

/// Executes a core hint.
pub fn execute_core_hint(
    memory: &mut Memory,
    ctx: &mut ExecutionContext,
    hint: &Hint,
    config: &HintRunnerConfig,
    rng: &mut ChaCha8Rng,
) -> Result<(), HintError> {
    match hint {
        Hint::AllocSegment { dst } => {
            let segment = memory.allocate_segment();
            insert_value_to_cellref!(memory, ctx, dst, segment)?;
        }
        Hint::AllocConstantSize { size, dst } => {
            let size_val = get_val(memory, ctx, size)?;
            let object_size = size_val
                .to_biguint()
                .to_u64()
                .ok_or(HintError::InvalidSize { operand: "size", value: size_val })?;
            let ptr = alloc_memory(memory, ctx, object_size)?;
            insert_value_to_cellref!(memory, ctx, dst, ptr)?;
        }
        Hint::TestLessThan { lhs, rhs, dst } => {
            let lhs_val = get_val(memory, ctx, lhs)?;
            let rhs_val = get_val(memory, ctx, rhs)?;
            insert_value_to_cellref!(
                memory,
                ctx,
                dst,
                Felt::from(usize::from(lhs_val < rhs_val))
            )?;
        }
        Hint::TestLessThanOrEqual { lhs, rhs, dst } => {
            let lhs_val = get_val(memory, ctx, lhs)?;
            let rhs_val = get_val(memory, ctx, rhs)?;
            insert_value_to_cellref!(
                memory,
                ctx,
                dst,
                Felt::from(usize::from(lhs_val <= rhs_val))
            )?;
        }
        Hint::TestLessThanOrEqualAddress { lhs, rhs, dst } => {
            let lhs_val = get_maybe(memory, ctx, lhs)?;
            let rhs_val = get_maybe(memory, ctx, rhs)?;
            let lhs_address = lhs_val
                .as_address()
                .ok_or(HintError::NotAnAddress { operand: "lhs", value: lhs_val })?;
            let rhs_address = rhs_val
                .as_address()
                .ok_or(HintError::NotAnAddress { operand: "rhs", value: rhs_val })?;
            insert_value_to_cellref!(
                memory,
                ctx,
                dst,
                Felt::from(usize::from(lhs_address <= rhs_address))
            )?;
        }
        Hint::WideMul128 { lhs, rhs, high, low } => {
            let mask128 = BigUint::from(u128::MAX);
            let lhs_val = get_u128_val(memory, ctx, "lhs", lhs)?;
            let rhs_val = get_u128_val(memory, ctx, "rhs", rhs)?;
            let prod = lhs_val * rhs_val;
            insert_value_to_cellref!(memory, ctx, high, Felt::from(prod.clone() >> 128))?;
            insert_value_to_cellref!(memory, ctx, low, Felt::from(prod & mask128))?;
        }
        Hint::DivMod { lhs, rhs, quotient, remainder } => {
            let lhs_val = get_val(memory, ctx, lhs)?.to_biguint();
            let rhs_val = nonzero(get_val(memory, ctx, rhs)?.to_biguint(), "rhs")?;
            let (quotient_val, remainder_val) = lhs_val.div_rem(&rhs_val);
            insert_value_to_cellref!(memory, ctx, quotient, Felt::from(quotient_val))?;
            insert_value_to_cellref!(memory, ctx, remainder, Felt::from(remainder_val))?;
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
            let pow_2_128 = pow_2(128);
            let dividend0 = get_val(memory, ctx, dividend0)?.to_biguint();
            let dividend1 = get_val(memory, ctx, dividend1)?.to_biguint();
            let divisor0 = get_val(memory, ctx, divisor0)?.to_biguint();
            let divisor1 = get_val(memory, ctx, divisor1)?.to_biguint();
            let dividend: BigUint = dividend0 + dividend1.shl(128);
            let divisor = nonzero(divisor0 + divisor1.shl(128), "divisor")?;
            let (quotient, remainder) = dividend.div_rem(&divisor);
            let (limb1, limb0) = quotient.div_rem(&pow_2_128);
            insert_value_to_cellref!(memory, ctx, quotient0, Felt::from(limb0))?;
            insert_value_to_cellref!(memory, ctx, quotient1, Felt::from(limb1))?;
            let (limb1, limb0) = remainder.div_rem(&pow_2_128);
            insert_value_to_cellref!(memory, ctx, remainder0, Felt::from(limb0))?;
            insert_value_to_cellref!(memory, ctx, remainder1, Felt::from(limb1))?;
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
            let pow_2_128 = pow_2(128);
            let dividend0 = get_val(memory, ctx, dividend0)?.to_biguint();
            let dividend1 = get_val(memory, ctx, dividend1)?.to_biguint();
            let dividend2 = get_val(memory, ctx, dividend2)?.to_biguint();
            let dividend3 = get_val(memory, ctx, dividend3)?.to_biguint();
            let divisor0 = get_val(memory, ctx, divisor0)?.to_biguint();
            let divisor1 = get_val(memory, ctx, divisor1)?.to_biguint();
            let dividend: BigUint =
                dividend0 + dividend1.shl(128) + dividend2.shl(256) + dividend3.shl(384);
            let divisor = nonzero(divisor0 + divisor1.shl(128), "divisor")?;
            let (quotient, remainder) = dividend.div_rem(&divisor);
            let (quotient, limb0) = quotient.div_rem(&pow_2_128);
            insert_value_to_cellref!(memory, ctx, quotient0, Felt::from(limb0))?;
            let (quotient, limb1) = quotient.div_rem(&pow_2_128);
            insert_value_to_cellref!(memory, ctx, quotient1, Felt::from(limb1))?;
            let (limb3, limb2) = quotient.div_rem(&pow_2_128);
            insert_value_to_cellref!(memory, ctx, quotient2, Felt::from(limb2))?;
            insert_value_to_cellref!(memory, ctx, quotient3, Felt::from(limb3))?;
            let (limb1, limb0) = remainder.div_rem(&pow_2_128);
            insert_value_to_cellref!(memory, ctx, remainder0, Felt::from(limb0))?;
            insert_value_to_cellref!(memory, ctx, remainder1, Felt::from(limb1))?;
        }
        Hint::SquareRoot { value, dst } => {
            let val = get_val(memory, ctx, value)?.to_biguint();
            insert_value_to_cellref!(memory, ctx, dst, Felt::from(val.sqrt()))?;
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
            let pow_2_128 = pow_2(128);
            let pow_2_64 = pow_2(64);
            let value_low = get_val(memory, ctx, value_low)?.to_biguint();
            let value_high = get_val(memory, ctx, value_high)?.to_biguint();
            let value = value_low + value_high * &pow_2_128;
            let sqrt = value.sqrt();
            let remainder = value - &sqrt * &sqrt;
            let sqrt_mul_2_minus_remainder_ge_u128_val =
                &sqrt * 2u32 - &remainder >= pow_2_128;

            // Guess sqrt limbs.
            let (sqrt1_val, sqrt0_val) = sqrt.div_rem(&pow_2_64);
            insert_value_to_cellref!(memory, ctx, sqrt0, Felt::from(sqrt0_val))?;
            insert_value_to_cellref!(memory, ctx, sqrt1, Felt::from(sqrt1_val))?;

            // Guess remainder limbs.
            let (remainder_high_val, remainder_low_val) = remainder.div_rem(&pow_2_128);
            insert_value_to_cellref!(memory, ctx, remainder_low, Felt::from(remainder_low_val))?;
            insert_value_to_cellref!(memory, ctx, remainder_high, Felt::from(remainder_high_val))?;
            insert_value_to_cellref!(
                memory,
                ctx,
                sqrt_mul_2_minus_remainder_ge_u128,
                Felt::from(usize::from(sqrt_mul_2_minus_remainder_ge_u128_val))
            )?;
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
            let pow_2_128 = BigInt::from(pow_2(128));
            let b0 = get_val(memory, ctx, b0)?.to_bigint();
            let b1 = get_val(memory, ctx, b1)?.to_bigint();
            let n0 = get_val(memory, ctx, n0)?.to_bigint();
            let n1 = get_val(memory, ctx, n1)?.to_bigint();
            let b: BigInt = b0.clone() + b1.clone().shl(128);
            let n: BigInt = n0 + n1.shl(128);
            if n.is_zero() {
                return Err(HintError::DivisionByZero { operand: "n" });
            }
            let ExtendedGcd { gcd: mut g, x: _, y: mut r } = n.extended_gcd(&b);
            if n == 1.into() {
                insert_value_to_cellref!(memory, ctx, s_or_r0, Felt::from(b0))?;
                insert_value_to_cellref!(memory, ctx, s_or_r1, Felt::from(b1))?;
                insert_value_to_cellref!(memory, ctx, t_or_k0, Felt::ONE)?;
                insert_value_to_cellref!(memory, ctx, t_or_k1, Felt::ZERO)?;
                insert_value_to_cellref!(memory, ctx, g0_or_no_inv, Felt::ONE)?;
                insert_value_to_cellref!(memory, ctx, g1_option, Felt::ZERO)?;
            } else if g != 1.into() {
                // Keeps `g0_or_no_inv` non-zero when there is no inverse.
                if g.is_even() {
                    g = 2u32.into();
                }
                let (limb1, limb0) = (&b / &g).div_rem(&pow_2_128);
                insert_value_to_cellref!(memory, ctx, s_or_r0, Felt::from(limb0))?;
                insert_value_to_cellref!(memory, ctx, s_or_r1, Felt::from(limb1))?;
                let (limb1, limb0) = (&n / &g).div_rem(&pow_2_128);
                insert_value_to_cellref!(memory, ctx, t_or_k0, Felt::from(limb0))?;
                insert_value_to_cellref!(memory, ctx, t_or_k1, Felt::from(limb1))?;
                let (limb1, limb0) = g.div_rem(&pow_2_128);
                insert_value_to_cellref!(memory, ctx, g0_or_no_inv, Felt::from(limb0))?;
                insert_value_to_cellref!(memory, ctx, g1_option, Felt::from(limb1))?;
            } else {
                r %= &n;
                if r.is_negative() {
                    r += &n;
                }
                let k: BigInt = (&r * b - 1) / n;
                let (limb1, limb0) = r.div_rem(&pow_2_128);
                insert_value_to_cellref!(memory, ctx, s_or_r0, Felt::from(limb0))?;
                insert_value_to_cellref!(memory, ctx, s_or_r1, Felt::from(limb1))?;
                let (limb1, limb0) = k.div_rem(&pow_2_128);
                insert_value_to_cellref!(memory, ctx, t_or_k0, Felt::from(limb0))?;
                insert_value_to_cellref!(memory, ctx, t_or_k1, Felt::from(limb1))?;
                insert_value_to_cellref!(memory, ctx, g0_or_no_inv, Felt::ZERO)?;
                insert_value_to_cellref!(memory, ctx, g1_option, Felt::ZERO)?;
            }
        }
        Hint::LinearSplit { value, scalar, max_x, x, y } => {
            let value = get_val(memory, ctx, value)?;
            let scalar = get_val(memory, ctx, scalar)?;
            let max_x = get_val(memory, ctx, max_x)?;
            let divisor = NonZeroFelt::try_from(scalar)
                .map_err(|_| HintError::DivisionByZero { operand: "scalar" })?;
            let x_value = value.floor_div(&divisor).min(max_x);
            let y_value = value - x_value * scalar;
            insert_value_to_cellref!(memory, ctx, x, x_value)?;
            insert_value_to_cellref!(memory, ctx, y, y_value)?;
        }
        Hint::RandomEcPoint { x, y } => {
            // Keep sampling a random field element `X` until `X^3 + X + beta` is a quadratic
            // residue.
            let (random_x, random_y) = loop {
                // 31 bytes are always below the prime.
                let x_bytes: [u8; 31] = rng.random();
                let random_x = Felt::from_bytes_be_slice(&x_bytes);
                let random_y_squared = random_x * random_x * random_x + random_x + BETA;
                if let Some(random_y) = random_y_squared.sqrt() {
                    break (random_x, random_y);
                }
            };
            insert_value_to_cellref!(memory, ctx, x, random_x)?;
            insert_value_to_cellref!(memory, ctx, y, random_y)?;
        }
        Hint::FieldSqrt { val, sqrt } => {
            let val = get_val(memory, ctx, val)?;
            // 3 is not a square, so exactly one of `val` and `3 * val` is a square (for a
            // non-zero `val`). Non-residues are reported through the negated root.
            let res = match val.sqrt() {
                Some(root) => std::cmp::min(root, -root),
                None => {
                    let root = (val * Felt::THREE).sqrt().ok_or(HintError::NoFieldSqrt(val))?;
                    std::cmp::max(root, -root)
                }
            };
            insert_value_to_cellref!(memory, ctx, sqrt, res)?;
        }
        Hint::AssertLeFindSmallArcs { range_check_ptr, a, b } => {
            let a_val = get_val(memory, ctx, a)?;
            let b_val = get_val(memory, ctx, b)?;
            let mut lengths_and_indices = [(a_val, 0), (b_val - a_val, 1), (Felt::MAX - b_val, 2)];
            lengths_and_indices.sort();
            ctx.scopes.assign_or_update_variable(
                EXCLUDED_ARC,
                ScopeValue::ExcludedArc(lengths_and_indices[2].1),
            );
            // ceil((PRIME / 3) / 2 ** 128).
            let prime_over_3_high = 3544607988759775765608368578435044694_u128;
            // ceil((PRIME / 2) / 2 ** 128).
            let prime_over_2_high = 5316911983139663648412552867652567041_u128;
            let range_check_ptr = extract_relocatable(memory, ctx, range_check_ptr)?;
            let (smallest_high, smallest_low) =
                lengths_and_indices[0].0.to_biguint().div_rem(&BigUint::from(prime_over_3_high));
            let (middle_high, middle_low) =
                lengths_and_indices[1].0.to_biguint().div_rem(&BigUint::from(prime_over_2_high));
            for (i, limb) in [smallest_low, smallest_high, middle_low, middle_high]
                .into_iter()
                .enumerate()
            {
                memory.write((range_check_ptr + i as u64)?, Felt::from(limb).into())?;
            }
        }
        Hint::AssertLeIsFirstArcExcluded { skip_exclude_a_flag } => {
            let excluded_arc = ctx.scopes.get_excluded_arc(EXCLUDED_ARC)?;
            insert_value_to_cellref!(
                memory,
                ctx,
                skip_exclude_a_flag,
                Felt::from(usize::from(excluded_arc == 2))
            )?;
        }
        Hint::AssertLeIsSecondArcExcluded { skip_exclude_b_minus_a } => {
            let excluded_arc = ctx.scopes.get_excluded_arc(EXCLUDED_ARC)?;
            insert_value_to_cellref!(
                memory,
                ctx,
                skip_exclude_b_minus_a,
                Felt::from(usize::from(excluded_arc == 1))
            )?;
        }
        Hint::DebugPrint { start, end } => {
            eprint!("{}", format_for_debug(&read_felts(memory, ctx, start, end)?));
        }
        Hint::EvalCircuit { n_add_mods, add_mod_builtin, n_mul_mods, mul_mod_builtin } => {
            let add_mod_builtin = extract_relocatable(memory, ctx, add_mod_builtin)?;
            let n_add_mods = get_count(memory, ctx, "n_add_mods", n_add_mods)?;
            let mul_mod_builtin = extract_relocatable(memory, ctx, mul_mod_builtin)?;
            let n_mul_mods = get_count(memory, ctx, "n_mul_mods", n_mul_mods)?;

            circuit::eval_circuit(
                memory,
                add_mod_builtin,
                n_add_mods,
                mul_mod_builtin,
                n_mul_mods,
                config.circuit_word_bit_len,
            )?;
        }
        Hint::EnterScope => ctx.scopes.enter_scope(HashMap::new()),
        Hint::ExitScope => ctx.scopes.exit_scope()?,
    };
    Ok(())
}

/// Fetches a gate count.
fn get_count(
    memory: &Memory,
    ctx: &ExecutionContext,
    operand: &'static str,
    res_operand: &ResOperand,
) -> Result<u64, HintError> {
    let value = get_val(memory, ctx, res_operand)?;
    value.to_biguint().to_u64().ok_or(HintError::ValueOutOfRange { operand, value })
}

/// Reads the felts in `[start, end)`.
fn read_felts(
    memory: &Memory,
    ctx: &ExecutionContext,
    start: &ResOperand,
    end: &ResOperand,
) -> Result<Vec<Felt>, HintError> {
    let start = extract_relocatable(memory, ctx, start)?;
    let end = extract_relocatable(memory, ctx, end)?;
    let count = end.sub_address(start)?;
    (0..count)
        .map(|i| -> Result<Felt, HintError> { Ok(memory.read_felt((start + i)?)?) })
        .collect()
}

/// Formats the given felts as debug lines, one lowercase hex value per line.
fn format_for_debug(felts: &[Felt]) -> String {
    felts.iter().map(|felt| format!("[DEBUG] {:x}\n", felt.to_biguint())).join("")
}
