//! Masked-memory decoding library.
//!
//! This crate implements an interpreter for masked memory initialization programs with the following:
//! 1. **Command:** Parsing of `mask = …` / `mem[…] = …` program lines into typed commands.
//! 2. **Mask:** A fixed-width (36-bit) three-valued bitmask and floating-bit address expansion.
//! 3. **Memory:** A sparse address-to-value store with an aggregate-sum query.
//! 4. **Decoder:** The command interpreter, parameterized by one of two decoding strategies.
//! 5. **Support:** Configuration, run statistics, and shared address/error types.

/// Program commands and the line-oriented command parser.
pub mod command;
/// Common types and constants (addresses, bit-width constants, error taxonomy).
pub mod common;
/// Run configuration (defaults, strategy selection, JSON deserialization).
pub mod config;
/// The memory decoder: command interpreter and per-strategy entry points.
pub mod decoder;
/// The three-valued bitmask and floating-bit combination expansion.
pub mod mask;
/// Sparse memory store keyed by decoded address.
pub mod memory;
/// Run statistics collection and reporting.
pub mod stats;

/// Program command type; one `mask` or `mem` line each.
pub use crate::command::Command;
/// Program parser; use on the full program text, one command per line.
pub use crate::command::parse_program;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main interpreter type; construct one per run with `Decoder::new`.
pub use crate::decoder::{Decoder, DecodingStrategy, run_address_floating, run_value_masking};
/// The 36-bit three-valued mask applied to written values or addresses.
pub use crate::mask::Bitmask;
/// Address-keyed value store holding only written entries.
pub use crate::memory::SparseMemory;
