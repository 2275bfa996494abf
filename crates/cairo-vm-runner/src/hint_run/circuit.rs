use std::ops::Shl;

use cairo_vm_memory::{Memory, MemoryAddress, MemoryValue};
use cairo_vm_utils::pow_2;
use log::debug;
use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Signed, Zero};
use starknet_types_core::felt::Felt;

use crate::errors::HintError;

#[cfg(test)]
#[path = "circuit_test.rs"]
mod test;

/// The number of limbs of a circuit value.
pub const VALUE_SIZE: u64 = 4;
/// The number of cells of a mod builtin instance: the modulus, the values pointer, the offsets
/// pointer and the number of remaining gates.
pub const MOD_BUILTIN_INSTANCE_SIZE: u64 = 7;
/// The number of offsets describing a gate.
pub const OFFSETS_PER_GATE: u64 = 3;
/// The offset of the values pointer inside a mod builtin instance.
const VALUES_PTR_OFFSET: u64 = 4;
/// The offset of the offsets pointer inside a mod builtin instance.
const OFFSETS_PTR_OFFSET: u64 = 5;
/// The offset of the gate count inside a mod builtin instance.
const N_OFFSET: u64 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateKind {
    Add,
    Mul,
}

struct CircuitInstance<'a> {
    memory: &'a mut Memory,
    values_ptr: MemoryAddress,
    add_mod_offsets: MemoryAddress,
    mul_mod_offsets: MemoryAddress,
    modulus: BigUint,
    word_bit_len: u32,
}

impl CircuitInstance<'_> {
    /// Given an address of an offset, gives the corresponding address in the values buffer.
    fn get_value_ptr(&self, offset_addr: MemoryAddress) -> Result<MemoryAddress, HintError> {
        let offset = self
            .memory
            .read(offset_addr)?
            .to_u64()
            .ok_or(HintError::ExpectedInteger(offset_addr))?;
        Ok((self.values_ptr + offset)?)
    }

    /// Given the kind of a gate and the index of one of its offsets, gives the address of that
    /// offset.
    fn offset_addr(&self, kind: GateKind, index: u64) -> Result<MemoryAddress, HintError> {
        let offsets = match kind {
            GateKind::Add => self.add_mod_offsets,
            GateKind::Mul => self.mul_mod_offsets,
        };
        Ok((offsets + index)?)
    }

    /// Reads the value the `index` offset of the gate list points to.
    fn read_gate_value(&self, kind: GateKind, index: u64) -> Result<Option<BigUint>, HintError> {
        let addr = self.get_value_ptr(self.offset_addr(kind, index)?)?;
        read_circuit_value(self.memory, addr, self.word_bit_len)
    }

    /// Writes `value` where the `index` offset of the gate list points to.
    fn write_gate_value(
        &mut self,
        kind: GateKind,
        index: u64,
        value: BigUint,
    ) -> Result<(), HintError> {
        let addr = self.get_value_ptr(self.offset_addr(kind, index)?)?;
        write_circuit_value(self.memory, addr, value, self.word_bit_len)
    }

    /// Fills the missing value of a gate.
    ///
    /// Returns true if the gate holds all its values once done, false if more than one of its
    /// values is unknown.
    fn fill_gate(&mut self, kind: GateKind, gate_index: u64) -> Result<bool, HintError> {
        let index = OFFSETS_PER_GATE * gate_index;
        let lhs = self.read_gate_value(kind, index)?;
        let rhs = self.read_gate_value(kind, index + 1)?;
        let res = self.read_gate_value(kind, index + 2)?;

        match (lhs, rhs, res) {
            (Some(lhs), Some(rhs), res) => {
                let computed = match kind {
                    GateKind::Add => lhs + rhs,
                    GateKind::Mul => lhs * rhs,
                }
                .mod_floor(&self.modulus);
                let satisfied = res.is_some_and(|res| res.mod_floor(&self.modulus) == computed);
                if !satisfied {
                    self.write_gate_value(kind, index + 2, computed)?;
                }
                Ok(true)
            }
            (None, Some(known), Some(res)) => {
                let solved = self.solve_operand(kind, known, res)?;
                self.write_gate_value(kind, index, solved)?;
                Ok(true)
            }
            (Some(known), None, Some(res)) => {
                let solved = self.solve_operand(kind, known, res)?;
                self.write_gate_value(kind, index + 1, solved)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Solves `x op known = res` for `x`.
    fn solve_operand(
        &self,
        kind: GateKind,
        known: BigUint,
        res: BigUint,
    ) -> Result<BigUint, HintError> {
        match kind {
            GateKind::Add => {
                Ok(positive_modulus(&(BigInt::from(res) - BigInt::from(known)), &self.modulus))
            }
            GateKind::Mul => {
                let known = known.mod_floor(&self.modulus);
                if known.is_zero() {
                    return Err(HintError::DivisionByZero { operand: "mul gate input" });
                }
                match invert_or_nullify(known.clone(), &self.modulus) {
                    (true, inverse) => Ok((res * inverse).mod_floor(&self.modulus)),
                    (false, _) => Err(HintError::NotInvertible {
                        value: known,
                        modulus: self.modulus.clone(),
                    }),
                }
            }
        }
    }
}

/// Reads a circuit value from the memory.
///
/// Returns `None` if any of the limbs was not written yet.
fn read_circuit_value(
    memory: &Memory,
    addr: MemoryAddress,
    word_bit_len: u32,
) -> Result<Option<BigUint>, HintError> {
    let bound = pow_2(word_bit_len);
    let mut res = BigUint::zero();
    for i in (0..VALUE_SIZE).rev() {
        let addr_i = (addr + i)?;
        match memory.get_maybe(addr_i) {
            Some(MemoryValue::Felt(limb)) => {
                let limb = limb.to_biguint();
                if limb >= bound {
                    return Err(HintError::ExpectedInteger(addr_i));
                }
                res = res.shl(word_bit_len) + limb;
            }
            Some(_) => return Err(HintError::ExpectedInteger(addr_i)),
            None => return Ok(None),
        }
    }
    Ok(Some(res))
}

/// Writes a circuit value to the memory.
fn write_circuit_value(
    memory: &mut Memory,
    addr: MemoryAddress,
    mut value: BigUint,
    word_bit_len: u32,
) -> Result<(), HintError> {
    let bound = pow_2(word_bit_len);
    for i in 0..VALUE_SIZE {
        let (new_value, rem) = value.div_rem(&bound);
        memory.write((addr + i)?, Felt::from(rem).into())?;
        value = new_value;
    }
    Ok(())
}

/// Fills the values of a circuit.
///
/// Gates of each kind are filled in order. An add gate is filled whenever possible, otherwise
/// the next mul gate is.
fn fill_values(
    c: &mut CircuitInstance<'_>,
    n_add_mods: u64,
    n_mul_mods: u64,
) -> Result<(), HintError> {
    let mut addmod_idx = 0;
    let mut mulmod_idx = 0;
    while addmod_idx < n_add_mods || mulmod_idx < n_mul_mods {
        if addmod_idx < n_add_mods && c.fill_gate(GateKind::Add, addmod_idx)? {
            addmod_idx += 1;
        } else if mulmod_idx < n_mul_mods && c.fill_gate(GateKind::Mul, mulmod_idx)? {
            mulmod_idx += 1;
        } else {
            return Err(HintError::CircuitNonconvergent {
                add_index: addmod_idx,
                mul_index: mulmod_idx,
            });
        }
    }
    Ok(())
}

/// Returns (value % modulus).
fn positive_modulus(value: &BigInt, modulus: &BigUint) -> BigUint {
    let value_mod = value.magnitude().mod_floor(modulus);
    if value.is_negative() && !value_mod.is_zero() { modulus - value_mod } else { value_mod }
}

/// Given a value and a modulus, either finds its inverse or finds a non-zero value that nullifies
/// the value.
///
/// If the value is invertible, returns (true, inverse), otherwise returns (false, nullifier).
fn invert_or_nullify(value: BigUint, modulus: &BigUint) -> (bool, BigUint) {
    let value = BigInt::from(value);
    let modulus_int = BigInt::from(modulus.clone());
    let ExtendedGcd::<_> { gcd, x, y: _ } = value.extended_gcd(&modulus_int);

    let gcd = gcd.magnitude().clone();
    if gcd.is_one() {
        return (true, positive_modulus(&x, modulus));
    }
    // `gcd` divides the value, so value * (modulus / gcd) = (value / gcd) * modulus = 0.
    (false, modulus / gcd)
}

/// Fills the instances of a mod builtin.
fn fill_instances(
    memory: &mut Memory,
    builtin_ptr: MemoryAddress,
    n_instances: u64,
    modulus: &[Felt],
    values_ptr: MemoryAddress,
    offsets_ptr: MemoryAddress,
) -> Result<(), HintError> {
    for i in 0..n_instances {
        let instance_ptr = (builtin_ptr + i * MOD_BUILTIN_INSTANCE_SIZE)?;

        for (idx, value) in (0..).zip(modulus) {
            memory.write((instance_ptr + idx)?, (*value).into())?;
        }

        memory.write((instance_ptr + VALUES_PTR_OFFSET)?, values_ptr.into())?;
        memory.write(
            (instance_ptr + OFFSETS_PTR_OFFSET)?,
            (offsets_ptr + i * OFFSETS_PER_GATE)?.into(),
        )?;
        memory.write((instance_ptr + N_OFFSET)?, Felt::from(n_instances - i).into())?;
    }

    Ok(())
}

/// Evaluates a circuit and fills the builtin instances and the values buffer.
///
/// The modulus and the values pointer are read from the first add mod instance, or from the
/// first mul mod instance when there are no add gates.
pub fn eval_circuit(
    memory: &mut Memory,
    add_mod_builtin: MemoryAddress,
    n_add_mods: u64,
    mul_mod_builtin: MemoryAddress,
    n_mul_mods: u64,
    word_bit_len: u32,
) -> Result<(), HintError> {
    if n_add_mods == 0 && n_mul_mods == 0 {
        return Ok(());
    }
    let header_ptr = if n_add_mods == 0 { mul_mod_builtin } else { add_mod_builtin };
    let modulus = read_circuit_value(memory, header_ptr, word_bit_len)?
        .ok_or(HintError::ExpectedInteger(header_ptr))?;
    if modulus.is_zero() {
        return Err(HintError::DivisionByZero { operand: "modulus" });
    }
    let values_ptr = memory.read_address((header_ptr + VALUES_PTR_OFFSET)?)?;
    let add_mod_offsets = if n_add_mods == 0 {
        values_ptr
    } else {
        memory.read_address((add_mod_builtin + OFFSETS_PTR_OFFSET)?)?
    };
    let mul_mod_offsets = if n_mul_mods == 0 {
        values_ptr
    } else {
        memory.read_address((mul_mod_builtin + OFFSETS_PTR_OFFSET)?)?
    };
    debug!(
        "Evaluating circuit modulo {modulus} with {n_add_mods} add gates and {n_mul_mods} mul \
         gates."
    );

    let mut c = CircuitInstance {
        memory: &mut *memory,
        values_ptr,
        add_mod_offsets,
        mul_mod_offsets,
        modulus,
        word_bit_len,
    };
    fill_values(&mut c, n_add_mods, n_mul_mods)?;

    // The limbs were validated when the modulus was read.
    let modulus: Vec<Felt> = memory
        .read_consecutive(header_ptr, VALUE_SIZE)?
        .iter()
        .filter_map(MemoryValue::as_felt)
        .collect();
    fill_instances(memory, add_mod_builtin, n_add_mods, &modulus, values_ptr, add_mod_offsets)?;
    fill_instances(memory, mul_mod_builtin, n_mul_mods, &modulus, values_ptr, mul_mod_offsets)?;
    Ok(())
}
