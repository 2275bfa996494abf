use std::collections::HashMap;

use cairo_vm_hints::operand::{CellRef, Register};
use cairo_vm_memory::{EXECUTION_SEGMENT, MemoryAddress};
use starknet_types_core::felt::Felt;

use crate::errors::HintError;

#[cfg(test)]
#[path = "context_test.rs"]
mod test;

/// A value stored in the scope store.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeValue {
    Felt(Felt),
    Int(i64),
    Address(MemoryAddress),
    /// The index (0, 1 or 2) of the arc left out by `AssertLeFindSmallArcs`.
    ExcludedArc(usize),
}
impl ScopeValue {
    fn kind(&self) -> &'static str {
        match self {
            ScopeValue::Felt(_) => "felt",
            ScopeValue::Int(_) => "int",
            ScopeValue::Address(_) => "address",
            ScopeValue::ExcludedArc(_) => "excluded arc",
        }
    }
}

/// A stack of named-variable scopes shared between cooperating hints.
///
/// There is always at least the main scope. Hints read and write the innermost scope only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionScopes {
    scopes: Vec<HashMap<String, ScopeValue>>,
}
impl Default for ExecutionScopes {
    fn default() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }
}
impl ExecutionScopes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_scope(&mut self, new_scope: HashMap<String, ScopeValue>) {
        self.scopes.push(new_scope);
    }

    pub fn exit_scope(&mut self) -> Result<(), HintError> {
        if self.scopes.len() == 1 {
            return Err(HintError::CannotExitMainScope);
        }
        self.scopes.pop();
        Ok(())
    }

    /// The number of active scopes, including the main one.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn assign_or_update_variable(&mut self, name: &str, value: ScopeValue) {
        self.innermost_mut().insert(name.to_string(), value);
    }

    pub fn delete_variable(&mut self, name: &str) {
        self.innermost_mut().remove(name);
    }

    pub fn get(&self, name: &str) -> Result<ScopeValue, HintError> {
        self.scopes
            .last()
            .and_then(|scope| scope.get(name))
            .copied()
            .ok_or_else(|| HintError::MissingScopeVariable(name.to_string()))
    }

    pub fn get_felt(&self, name: &str) -> Result<Felt, HintError> {
        match self.get(name)? {
            ScopeValue::Felt(value) => Ok(value),
            other => Err(kind_mismatch(name, "felt", &other)),
        }
    }

    pub fn get_excluded_arc(&self, name: &str) -> Result<usize, HintError> {
        match self.get(name)? {
            ScopeValue::ExcludedArc(index) => Ok(index),
            other => Err(kind_mismatch(name, "excluded arc", &other)),
        }
    }

    fn innermost_mut(&mut self) -> &mut HashMap<String, ScopeValue> {
        if self.scopes.is_empty() {
            self.scopes.push(HashMap::new());
        }
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }
}

fn kind_mismatch(name: &str, expected: &'static str, actual: &ScopeValue) -> HintError {
    HintError::ScopeValueKindMismatch { name: name.to_string(), expected, actual: actual.kind() }
}

/// The state a hint runs against: the registers, the scope store and allocation bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Allocation pointer, an offset into the execution segment.
    pub ap: u64,
    /// Frame pointer, an offset into the execution segment.
    pub fp: u64,
    pub scopes: ExecutionScopes,
    /// The next free address of the segment shared by `AllocConstantSize` allocations, once it
    /// was created.
    pub constant_size_segment: Option<MemoryAddress>,
}
impl ExecutionContext {
    pub fn new(ap: u64, fp: u64) -> Self {
        Self { ap, fp, ..Default::default() }
    }

    /// Returns the execution segment address a cell reference points to.
    pub fn cell_ref_to_address(&self, cell_ref: &CellRef) -> Result<MemoryAddress, HintError> {
        let base = match cell_ref.register {
            Register::AP => self.ap,
            Register::FP => self.fp,
        };
        Ok(MemoryAddress::new(EXECUTION_SEGMENT, base).add_offset(cell_ref.offset.into())?)
    }
}
