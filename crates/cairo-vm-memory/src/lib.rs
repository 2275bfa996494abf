//! Segmented memory of the Cairo VM.
//!
//! Memory is split into independently growing segments. Each cell is written at most once and
//! holds either a field element or a relocatable address into another segment. Once execution
//! ends, segments are laid out one after the other in a flat address space.

pub mod address;
pub mod errors;
pub mod memory;
pub mod value;

pub use address::MemoryAddress;
pub use errors::MemoryError;
pub use memory::{EXECUTION_SEGMENT, Memory, PROGRAM_SEGMENT, Segment};
pub use value::MemoryValue;
