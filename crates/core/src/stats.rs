//! Run statistics collection and reporting.
//!
//! This module tracks counters for a single decoder run. It provides:
//! 1. **Command mix:** Total commands, mask replacements, and write commands.
//! 2. **Write amplification:** Cells touched and the widest single-write fan-out.
//! 3. **Reporting:** A plain-text summary and serde serialization for machine output.
//!
//! Wall-clock timing is deliberately absent: measuring and displaying execution
//! time belongs to the harness driving the decoder, not to the run itself.

use serde::Serialize;

/// Counters collected over one decoder run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Total commands executed.
    pub commands_run: u64,
    /// Mask-replacement commands executed.
    pub masks_set: u64,
    /// Write commands executed.
    pub write_commands: u64,
    /// Memory cells written, counting every expanded address.
    pub cells_written: u64,
    /// Largest address fan-out of a single write (1 under value masking).
    pub widest_expansion: u64,
}

impl RunStats {
    /// Records one executed command of any kind.
    #[inline]
    pub(crate) const fn record_command(&mut self) {
        self.commands_run += 1;
    }

    /// Records a mask replacement.
    #[inline]
    pub(crate) const fn record_mask_set(&mut self) {
        self.masks_set += 1;
    }

    /// Records a write command that touched `fanout` cells.
    #[inline]
    pub(crate) const fn record_write(&mut self, fanout: u64) {
        self.write_commands += 1;
        self.cells_written += fanout;
        if fanout > self.widest_expansion {
            self.widest_expansion = fanout;
        }
    }

    /// Prints a human-readable summary to stdout.
    pub fn print(&self) {
        println!("Run statistics:");
        println!("  commands:         {}", self.commands_run);
        println!("  masks set:        {}", self.masks_set);
        println!("  write commands:   {}", self.write_commands);
        println!("  cells written:    {}", self.cells_written);
        println!("  widest expansion: {}", self.widest_expansion);
    }
}
