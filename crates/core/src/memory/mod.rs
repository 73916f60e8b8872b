//! Sparse memory store.
//!
//! A mapping from decoded address to 64-bit value that materializes only the
//! entries a program actually writes. The 36-bit address space is far too large
//! to back densely, and the observable result of a run is an aggregate sum plus
//! per-address lookups, so a hash map is the right shape. No iteration order is
//! guaranteed.

use std::collections::HashMap;

use crate::common::addr::MemAddr;

/// Address-keyed value store holding only written entries.
///
/// Entries are created or overwritten by writes; the last write to an address
/// wins and entries are never deleted during a run. Each store is owned by
/// exactly one decoder instance.
#[derive(Clone, Debug, Default)]
pub struct SparseMemory {
    cells: HashMap<MemAddr, u64>,
}

impl SparseMemory {
    /// Creates an empty store.
    #[inline]
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Writes `value` at `addr`, overwriting any previous entry.
    #[inline]
    pub fn write(&mut self, addr: MemAddr, value: u64) {
        let _previous = self.cells.insert(addr, value);
    }

    /// Returns the value at `addr`, or `None` if it was never written.
    #[inline]
    pub fn read(&self, addr: MemAddr) -> Option<u64> {
        self.cells.get(&addr).copied()
    }

    /// Returns the number of written entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether no entry has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the unsigned sum of all resident values.
    ///
    /// This is the decoder's sole externally observed aggregate; accumulation
    /// wraps on overflow.
    pub fn values_sum(&self) -> u64 {
        self.cells
            .values()
            .fold(0u64, |acc, value| acc.wrapping_add(*value))
    }

    /// Iterates over `(address, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (MemAddr, u64)> + '_ {
        self.cells.iter().map(|(addr, value)| (*addr, *value))
    }
}
