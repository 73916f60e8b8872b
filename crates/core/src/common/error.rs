//! Parse and execution error definitions.
//!
//! This module defines the error taxonomy for the decoder. It provides:
//! 1. **Parse Errors:** Malformed program lines, reported with their 1-based line number.
//! 2. **Pattern Errors:** Mask-text violations, independent of any surrounding line.
//! 3. **Execution Errors:** Precondition violations raised while running a command sequence.
//!
//! Parsing is all-or-nothing: the first malformed line aborts the parse and no partial
//! command sequence is ever produced. Execution errors are not recovered internally.

use thiserror::Error;

use super::constants::MASK_WIDTH;

/// A malformed line in a masked-memory program.
///
/// Every variant carries the 1-based number of the offending line so callers can
/// point at it without re-scanning the input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line matches neither the `mask = …` nor the `mem[…] = …` shape.
    #[error("line {line}: unrecognized command `{content}`")]
    UnrecognizedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, verbatim.
        content: String,
    },

    /// The bracketed address token of a write command is not an unsigned integer.
    #[error("line {line}: invalid memory address `{token}`")]
    InvalidAddress {
        /// 1-based line number.
        line: usize,
        /// The rejected address token.
        token: String,
    },

    /// The value token of a write command is not an unsigned integer.
    #[error("line {line}: invalid write value `{token}`")]
    InvalidValue {
        /// 1-based line number.
        line: usize,
        /// The rejected value token.
        token: String,
    },

    /// The mask pattern of a `mask = …` line is malformed.
    #[error("line {line}: {source}")]
    BadMaskPattern {
        /// 1-based line number.
        line: usize,
        /// The underlying pattern violation.
        source: MaskPatternError,
    },
}

/// A violation of the mask pattern grammar: exactly [`MASK_WIDTH`] characters
/// drawn from `{0,1,X}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MaskPatternError {
    /// The pattern is not exactly [`MASK_WIDTH`] characters long.
    #[error("mask pattern must be exactly {MASK_WIDTH} characters, got {actual}")]
    Length {
        /// Number of characters found.
        actual: usize,
    },

    /// The pattern contains a character outside `{0,1,X}`.
    #[error("mask pattern contains `{found}` at offset {offset}; expected one of `0`, `1`, `X`")]
    Char {
        /// The rejected character.
        found: char,
        /// 0-based character offset from the left end of the pattern.
        offset: usize,
    },
}

/// A precondition violation raised while executing a command sequence.
///
/// The decoder assumes syntactically valid input; the only runtime failure is a
/// write arriving before any mask has been set, which is a caller error and is
/// surfaced immediately rather than papered over with a default mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// A write command was executed before the first `mask = …` command.
    #[error("write command at index {index} executed before any mask was set")]
    WriteBeforeMask {
        /// 0-based index of the offending command in the sequence.
        index: usize,
    },
}
