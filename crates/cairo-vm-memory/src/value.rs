use std::cmp::Ordering;
use std::fmt::Display;

use num_traits::ToPrimitive;
use starknet_types_core::felt::{Felt, NonZeroFelt};

use crate::address::MemoryAddress;
use crate::errors::MemoryError;

#[cfg(test)]
#[path = "value_test.rs"]
mod test;

/// The content of a memory cell.
///
/// `Unknown` describes the absence of a value and is never stored in memory.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub enum MemoryValue {
    #[default]
    Unknown,
    Felt(Felt),
    Relocatable(MemoryAddress),
}
impl MemoryValue {
    pub fn from_int<T: Into<Felt>>(value: T) -> Self {
        Self::Felt(value.into())
    }

    pub fn from_segment_and_offset(segment_index: usize, offset: u64) -> Self {
        Self::Relocatable(MemoryAddress::new(segment_index, offset))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn as_felt(&self) -> Option<Felt> {
        match self {
            Self::Felt(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<MemoryAddress> {
        match self {
            Self::Relocatable(address) => Some(*address),
            _ => None,
        }
    }

    /// Returns the value as a `u64`, if it is a field element small enough.
    pub fn to_u64(&self) -> Option<u64> {
        self.as_felt()?.to_biguint().to_u64()
    }

    /// Adds two values. A relocatable plus a felt is pointer arithmetic, in either order.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MemoryError> {
        match (self, rhs) {
            (Self::Felt(lhs), Self::Felt(rhs)) => Ok(Self::Felt(*lhs + *rhs)),
            (Self::Relocatable(address), Self::Felt(felt))
            | (Self::Felt(felt), Self::Relocatable(address)) => {
                Ok(Self::Relocatable(address.add_felt(felt)?))
            }
            _ => Err(self.invalid_operands("+", rhs)),
        }
    }

    /// Subtracts two values. The difference of two addresses in the same segment is a felt,
    /// negative differences wrap around the field.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MemoryError> {
        match (self, rhs) {
            (Self::Felt(lhs), Self::Felt(rhs)) => Ok(Self::Felt(*lhs - *rhs)),
            (Self::Relocatable(address), Self::Felt(felt)) => {
                Ok(Self::Relocatable(address.sub_felt(felt)?))
            }
            (Self::Relocatable(lhs), Self::Relocatable(rhs)) => {
                if lhs.segment_index != rhs.segment_index {
                    return Err(MemoryError::SegmentMismatch { lhs: *lhs, rhs: *rhs });
                }
                Ok(Self::Felt(Felt::from(lhs.offset) - Felt::from(rhs.offset)))
            }
            _ => Err(self.invalid_operands("-", rhs)),
        }
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MemoryError> {
        match (self, rhs) {
            (Self::Felt(lhs), Self::Felt(rhs)) => Ok(Self::Felt(*lhs * *rhs)),
            _ => Err(self.invalid_operands("*", rhs)),
        }
    }

    /// Divides two felts in the field.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, MemoryError> {
        match (self, rhs) {
            (Self::Felt(lhs), Self::Felt(rhs)) => {
                let divisor = NonZeroFelt::try_from(*rhs)
                    .map_err(|_| MemoryError::DivisionByZero { lhs: *lhs })?;
                Ok(Self::Felt(lhs.field_div(&divisor)))
            }
            _ => Err(self.invalid_operands("/", rhs)),
        }
    }

    fn invalid_operands(&self, op: &'static str, rhs: &Self) -> MemoryError {
        MemoryError::InvalidOperand { op, lhs: *self, rhs: *rhs }
    }
}

impl PartialOrd for MemoryValue {
    /// Felts compare as unsigned integers and addresses by segment then offset. Values of
    /// different kinds are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Unknown, Self::Unknown) => Some(Ordering::Equal),
            (Self::Felt(lhs), Self::Felt(rhs)) => Some(lhs.cmp(rhs)),
            (Self::Relocatable(lhs), Self::Relocatable(rhs)) => Some(lhs.cmp(rhs)),
            _ => None,
        }
    }
}

impl From<Felt> for MemoryValue {
    fn from(value: Felt) -> Self {
        Self::Felt(value)
    }
}

impl From<MemoryAddress> for MemoryValue {
    fn from(address: MemoryAddress) -> Self {
        Self::Relocatable(address)
    }
}

impl Display for MemoryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Felt(value) => write!(f, "{value}"),
            Self::Relocatable(address) => write!(f, "{address}"),
        }
    }
}
