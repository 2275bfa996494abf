use std::fmt::Display;
use std::ops::Add;

use num_traits::ToPrimitive;
use starknet_types_core::felt::Felt;

use crate::errors::MemoryError;

#[cfg(test)]
#[path = "address_test.rs"]
mod test;

/// An address in the segmented memory: a segment index and an offset inside that segment.
///
/// Addresses are ordered by segment index first, then by offset.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MemoryAddress {
    pub segment_index: usize,
    pub offset: u64,
}
impl MemoryAddress {
    pub fn new(segment_index: usize, offset: u64) -> Self {
        Self { segment_index, offset }
    }

    /// Returns the address shifted by a signed offset.
    pub fn add_offset(self, offset: i64) -> Result<Self, MemoryError> {
        match self.offset.checked_add_signed(offset) {
            Some(offset) => Ok(Self { offset, ..self }),
            None => Err(MemoryError::InvalidOffset { address: self, offset: offset.into() }),
        }
    }

    /// Returns the distance from `other` to `self`. Both must be in the same segment and `other`
    /// must not be past `self`.
    pub fn sub_address(self, other: Self) -> Result<u64, MemoryError> {
        if self.segment_index != other.segment_index {
            return Err(MemoryError::SegmentMismatch { lhs: self, rhs: other });
        }
        self.offset
            .checked_sub(other.offset)
            .ok_or(MemoryError::NegativeResult { lhs: self, rhs: other })
    }

    /// Returns the address shifted by a field element.
    ///
    /// The new offset is computed in the field, so adding `-1` moves one cell back.
    pub fn add_felt(self, rhs: &Felt) -> Result<Self, MemoryError> {
        let value = Felt::from(self.offset) + *rhs;
        let offset = felt_to_offset(&value)?;
        Ok(Self { offset, ..self })
    }

    /// Returns the address shifted back by a field element interpreted as an unsigned integer.
    pub fn sub_felt(self, rhs: &Felt) -> Result<Self, MemoryError> {
        let delta = felt_to_offset(rhs)?;
        match self.offset.checked_sub(delta) {
            Some(offset) => Ok(Self { offset, ..self }),
            None => Err(MemoryError::InvalidOffset { address: self, offset: -i128::from(delta) }),
        }
    }
}

impl Add<u64> for MemoryAddress {
    type Output = Result<MemoryAddress, MemoryError>;

    fn add(self, rhs: u64) -> Self::Output {
        match self.offset.checked_add(rhs) {
            Some(offset) => Ok(Self { offset, ..self }),
            None => Err(MemoryError::InvalidOffset { address: self, offset: rhs.into() }),
        }
    }
}

impl Display for MemoryAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.segment_index, self.offset)
    }
}

/// Converts a field element to an address offset.
pub fn felt_to_offset(value: &Felt) -> Result<u64, MemoryError> {
    value.to_biguint().to_u64().ok_or(MemoryError::OffsetOutOfRange { value: *value })
}
