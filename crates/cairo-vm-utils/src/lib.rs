//! Cairo VM execution core utilities.

pub mod bigint;
pub mod extract_matches;

/// Returns `2^bits` as a `BigUint`.
pub fn pow_2(bits: u32) -> num_bigint::BigUint {
    num_bigint::BigUint::from(1_u32) << bits
}
