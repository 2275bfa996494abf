use log::debug;
use starknet_types_core::felt::Felt;

use crate::address::MemoryAddress;
use crate::errors::MemoryError;
use crate::value::MemoryValue;

#[cfg(test)]
#[path = "memory_test.rs"]
mod test;

/// The segment holding the program bytecode.
pub const PROGRAM_SEGMENT: usize = 0;
/// The segment `ap` and `fp` point into.
pub const EXECUTION_SEGMENT: usize = 1;

/// A growable sequence of write-once cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    cells: Vec<Option<MemoryValue>>,
}
impl Segment {
    /// The number of cells up to and including the last written one.
    pub fn len(&self) -> u64 {
        self.cells.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, offset: u64) -> Option<MemoryValue> {
        let index = usize::try_from(offset).ok()?;
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<MemoryValue>] {
        &self.cells
    }
}

/// The VM memory: an ordered collection of segments.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    segments: Vec<Segment>,
    /// Set once the memory is relocated, after which it is frozen.
    relocation_table: Option<Vec<u64>>,
}
impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a memory with `n_segments` empty segments, e.g. 2 for the program and execution
    /// segments.
    pub fn with_segments(n_segments: usize) -> Self {
        Self { segments: vec![Segment::default(); n_segments], relocation_table: None }
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, segment_index: usize) -> Option<&Segment> {
        self.segments.get(segment_index)
    }

    pub fn segment_size(&self, segment_index: usize) -> Result<u64, MemoryError> {
        Ok(self.get_segment(segment_index)?.len())
    }

    /// Adds a new empty segment and returns its base address.
    pub fn allocate_segment(&mut self) -> MemoryAddress {
        self.segments.push(Segment::default());
        let segment_index = self.segments.len() - 1;
        debug!("Allocated segment {segment_index}.");
        MemoryAddress::new(segment_index, 0)
    }

    /// Writes a value to a cell. Writing the value a cell already holds is a no-op, writing a
    /// different one fails.
    pub fn write(&mut self, address: MemoryAddress, value: MemoryValue) -> Result<(), MemoryError> {
        if self.relocation_table.is_some() {
            return Err(MemoryError::AlreadyRelocated);
        }
        if !value.is_known() {
            return Err(MemoryError::WriteUnknownValue(address));
        }
        let index =
            usize::try_from(address.offset).map_err(|_| MemoryError::OffsetTooLarge(address))?;
        let segment = self
            .segments
            .get_mut(address.segment_index)
            .ok_or(MemoryError::UnknownSegment(address.segment_index))?;
        if index >= segment.cells.len() {
            let len = index.checked_add(1).ok_or(MemoryError::OffsetTooLarge(address))?;
            segment
                .cells
                .try_reserve(len - segment.cells.len())
                .map_err(|_| MemoryError::OffsetTooLarge(address))?;
            segment.cells.resize(len, None);
        }
        match segment.cells[index] {
            None => {
                segment.cells[index] = Some(value);
                Ok(())
            }
            Some(old) if old == value => Ok(()),
            Some(old) => Err(MemoryError::InconsistentWrite { address, old, new: value }),
        }
    }

    /// Reads a written cell.
    pub fn read(&self, address: MemoryAddress) -> Result<MemoryValue, MemoryError> {
        self.get_segment(address.segment_index)?
            .get(address.offset)
            .ok_or(MemoryError::UnknownValue(address))
    }

    /// Returns the value of a cell, or `None` if it was not written.
    pub fn get_maybe(&self, address: MemoryAddress) -> Option<MemoryValue> {
        self.segments.get(address.segment_index)?.get(address.offset)
    }

    pub fn read_felt(&self, address: MemoryAddress) -> Result<Felt, MemoryError> {
        let value = self.read(address)?;
        value.as_felt().ok_or(MemoryError::ExpectedInteger { address, value })
    }

    pub fn read_address(&self, address: MemoryAddress) -> Result<MemoryAddress, MemoryError> {
        let value = self.read(address)?;
        value.as_address().ok_or(MemoryError::ExpectedRelocatable { address, value })
    }

    /// Reads `count` consecutive cells starting at `address`.
    pub fn read_consecutive(
        &self,
        address: MemoryAddress,
        count: u64,
    ) -> Result<Vec<MemoryValue>, MemoryError> {
        let mut values = Vec::new();
        let mut current = address;
        for i in 0..count {
            values.push(self.read(current)?);
            if i + 1 < count {
                current = (current + 1)?;
            }
        }
        Ok(values)
    }

    /// Computes the base of every segment in the flat address space.
    ///
    /// The first segment starts at 1 and every segment follows the previous one. The returned
    /// table has one more entry than there are segments: the end of the flat memory.
    pub fn relocation_table(&self) -> Vec<u64> {
        let mut table = Vec::with_capacity(self.segments.len() + 1);
        let mut base = 1;
        table.push(base);
        for segment in &self.segments {
            base += segment.len();
            table.push(base);
        }
        table
    }

    /// Maps an address to its flat position given the base of every segment.
    pub fn relocate_address(
        address: MemoryAddress,
        base_offsets: &[u64],
    ) -> Result<u64, MemoryError> {
        let base = base_offsets
            .get(address.segment_index)
            .ok_or(MemoryError::MissingRelocation(address.segment_index))?;
        base.checked_add(address.offset).ok_or(MemoryError::OffsetTooLarge(address))
    }

    /// Lays the segments out in a flat memory, replacing every relocatable value by the flat
    /// address it points to. The memory can't be written afterwards.
    pub fn relocate(&mut self, base_offsets: &[u64]) -> Result<Vec<Option<Felt>>, MemoryError> {
        if self.relocation_table.is_some() {
            return Err(MemoryError::AlreadyRelocated);
        }
        let mut flat: Vec<Option<Felt>> = Vec::new();
        for (segment_index, segment) in self.segments.iter().enumerate() {
            let base = Self::relocate_address(MemoryAddress::new(segment_index, 0), base_offsets)?;
            for (offset, cell) in segment.cells.iter().enumerate() {
                let Some(value) = cell else { continue };
                let address = MemoryAddress::new(segment_index, offset as u64);
                let position = base
                    .checked_add(address.offset)
                    .and_then(|position| usize::try_from(position).ok())
                    .ok_or(MemoryError::OffsetTooLarge(address))?;
                let value = match value {
                    MemoryValue::Felt(felt) => *felt,
                    MemoryValue::Relocatable(address) => {
                        Felt::from(Self::relocate_address(*address, base_offsets)?)
                    }
                    MemoryValue::Unknown => continue,
                };
                if position >= flat.len() {
                    let len = position.checked_add(1).ok_or(MemoryError::OffsetTooLarge(address))?;
                    flat.try_reserve(len - flat.len())
                        .map_err(|_| MemoryError::OffsetTooLarge(address))?;
                    flat.resize(len, None);
                }
                flat[position] = Some(value);
            }
        }
        debug!("Relocated {} segments into {} cells.", self.segments.len(), flat.len());
        self.relocation_table = Some(base_offsets.to_vec());
        Ok(flat)
    }

    pub fn is_relocated(&self) -> bool {
        self.relocation_table.is_some()
    }

    fn get_segment(&self, segment_index: usize) -> Result<&Segment, MemoryError> {
        self.segments.get(segment_index).ok_or(MemoryError::UnknownSegment(segment_index))
    }
}
