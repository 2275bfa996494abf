//! Operand references and hint descriptors of the Cairo VM.
//!
//! A [`hints::Hint`] names a non-deterministic computation together with the operands it reads
//! and the cells it writes. Operands are expressed relative to the `ap` and `fp` registers.

pub mod hints;
pub mod inline;
pub mod operand;
