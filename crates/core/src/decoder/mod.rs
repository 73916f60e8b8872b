//! The memory decoder: a single-pass interpreter over a command sequence.
//!
//! This module executes a parsed program against one mask register and one sparse
//! memory store. It provides:
//! 1. **Strategies:** The two fixed write interpretations, chosen once at construction.
//! 2. **Dispatch:** One exhaustive match over the command type; no virtual dispatch.
//! 3. **Isolation:** Per-run entry points that construct an independent decoder each,
//!    so no mask or memory state can leak between strategy evaluations.
//!
//! Processing is strictly sequential: mask state and memory are mutated in place
//! and later commands depend on earlier ones.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::command::Command;
use crate::common::addr::MemAddr;
use crate::common::error::ExecError;
use crate::mask::{Bitmask, expand};
use crate::memory::SparseMemory;
use crate::stats::RunStats;

/// One of the two fixed interpretations of a write command.
///
/// Selected once per decoder construction and never changed mid-run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodingStrategy {
    /// The mask is applied to the written value; the address is used verbatim.
    ValueMasking,
    /// The mask is applied to the written address, expanding every floating bit
    /// into both assignments; the value is stored raw.
    AddressFloating,
}

impl fmt::Display for DecodingStrategy {
    /// Formats the strategy using its configuration spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueMasking => f.write_str("value-masking"),
            Self::AddressFloating => f.write_str("address-floating"),
        }
    }
}

/// The command interpreter.
///
/// Holds the active mask (none until the first `SetMask`), the memory store,
/// and the strategy fixed at construction. A decoder is single-use: construct,
/// [`run`](Self::run), then query [`memory_values_sum`](Self::memory_values_sum).
#[derive(Debug)]
pub struct Decoder {
    strategy: DecodingStrategy,
    mask: Option<Bitmask>,
    memory: SparseMemory,
    stats: RunStats,
}

impl Decoder {
    /// Creates a decoder with empty memory, no active mask, and the given strategy.
    pub fn new(strategy: DecodingStrategy) -> Self {
        Self {
            strategy,
            mask: None,
            memory: SparseMemory::new(),
            stats: RunStats::default(),
        }
    }

    /// Returns the strategy this decoder was constructed with.
    #[inline]
    pub const fn strategy(&self) -> DecodingStrategy {
        self.strategy
    }

    /// Returns the currently active mask, or `None` before the first `SetMask`.
    #[inline]
    pub const fn current_mask(&self) -> Option<Bitmask> {
        self.mask
    }

    /// Returns the memory store for inspection.
    #[inline]
    pub const fn memory(&self) -> &SparseMemory {
        &self.memory
    }

    /// Returns the statistics collected so far.
    #[inline]
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Executes a full command sequence in order.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::WriteBeforeMask`] if a write command is reached
    /// before any mask has been set; memory updates up to the offending
    /// command have been applied at that point.
    pub fn run(&mut self, program: &[Command]) -> Result<(), ExecError> {
        for (index, command) in program.iter().enumerate() {
            self.step(index, command)?;
        }
        Ok(())
    }

    /// Returns the unsigned sum of all values resident in memory.
    #[inline]
    pub fn memory_values_sum(&self) -> u64 {
        self.memory.values_sum()
    }

    /// Executes one command. `index` is the command's position in the sequence,
    /// used only for error attribution.
    fn step(&mut self, index: usize, command: &Command) -> Result<(), ExecError> {
        self.stats.record_command();
        match *command {
            Command::SetMask(mask) => {
                tracing::debug!(mask = %mask, "mask replaced");
                self.mask = Some(mask);
                self.stats.record_mask_set();
            }
            Command::Write { address, value } => {
                let mask = self.mask.ok_or(ExecError::WriteBeforeMask { index })?;
                match self.strategy {
                    DecodingStrategy::ValueMasking => {
                        self.memory.write(address, mask.apply_to_value(value));
                        self.stats.record_write(1);
                    }
                    DecodingStrategy::AddressFloating => {
                        let target = mask.masked_address(address);
                        let fanout = 1u64 << target.floating.count_ones();
                        tracing::trace!(
                            base = target.base.val(),
                            fanout,
                            "expanding floating-address write"
                        );
                        for combination in expand::combinations(target.floating) {
                            self.memory
                                .write(MemAddr::new(target.base.val() | combination), value);
                        }
                        self.stats.record_write(fanout);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Runs `program` under [`DecodingStrategy::ValueMasking`] on a fresh decoder.
///
/// # Errors
///
/// Returns [`ExecError::WriteBeforeMask`] if a write precedes the first mask.
pub fn run_value_masking(program: &[Command]) -> Result<u64, ExecError> {
    run_with_strategy(DecodingStrategy::ValueMasking, program)
}

/// Runs `program` under [`DecodingStrategy::AddressFloating`] on a fresh decoder.
///
/// # Errors
///
/// Returns [`ExecError::WriteBeforeMask`] if a write precedes the first mask.
pub fn run_address_floating(program: &[Command]) -> Result<u64, ExecError> {
    run_with_strategy(DecodingStrategy::AddressFloating, program)
}

/// Runs `program` under `strategy` on a fresh decoder and returns the memory sum.
///
/// Each call constructs an independent decoder, so two strategy evaluations of
/// the same program can never observe each other's state.
///
/// # Errors
///
/// Returns [`ExecError::WriteBeforeMask`] if a write precedes the first mask.
pub fn run_with_strategy(
    strategy: DecodingStrategy,
    program: &[Command],
) -> Result<u64, ExecError> {
    let mut decoder = Decoder::new(strategy);
    decoder.run(program)?;
    Ok(decoder.memory_values_sum())
}
