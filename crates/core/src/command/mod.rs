//! Program commands.
//!
//! A masked-memory program is an ordered sequence of two command kinds: replace
//! the active mask, or write a value to an address. Order is semantically
//! significant; the mask in effect for a write is the most recent `SetMask`
//! before it in the sequence.

use std::fmt;

use crate::common::addr::MemAddr;
use crate::mask::Bitmask;

/// Line-oriented program parser.
pub mod parse;

pub use parse::{parse_line, parse_program};

/// One command of a masked-memory program.
///
/// The enum is closed on purpose: the decoder matches it exhaustively at its
/// single dispatch site, so adding a command kind is a compile-time-checked
/// change everywhere it matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the decoder's active mask wholesale.
    SetMask(Bitmask),
    /// Write `value` at `address`, as interpreted by the active strategy.
    Write {
        /// The written (pre-decoding) address.
        address: MemAddr,
        /// The written (pre-masking) value.
        value: u64,
    },
}

impl fmt::Display for Command {
    /// Renders the command back to its program-line form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetMask(mask) => write!(f, "mask = {mask}"),
            Self::Write { address, value } => write!(f, "mem[{}] = {value}", address.val()),
        }
    }
}
