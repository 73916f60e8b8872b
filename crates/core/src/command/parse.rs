//! Line-oriented program parser.
//!
//! Turns raw program text into a typed command sequence. Each non-empty line is
//! one command; the two accepted shapes are:
//!
//! ```text
//! mask = <36 characters over {0,1,X}>
//! mem[<unsigned address>] = <unsigned value>
//! ```
//!
//! Parsing is purely syntactic (no address-range checks) and all-or-nothing:
//! the first malformed line aborts with a [`ParseError`] naming it, and no
//! partial sequence is returned.

use crate::command::Command;
use crate::common::addr::MemAddr;
use crate::common::error::ParseError;
use crate::mask::Bitmask;

/// Prefix of a mask-replacement line, up to and including the assignment token.
const MASK_PREFIX: &str = "mask = ";

/// Prefix of a memory-write line, up to and including the opening bracket.
const MEM_PREFIX: &str = "mem[";

/// Assignment token separating a write's bracket expression from its value.
const ASSIGN_TOKEN: &str = " = ";

/// Parses a full program, one command per line.
///
/// Lines are numbered from 1. Blank lines are not part of the program grammar
/// and are rejected like any other unrecognized shape.
///
/// # Errors
///
/// Returns the [`ParseError`] for the first malformed line.
pub fn parse_program(input: &str) -> Result<Vec<Command>, ParseError> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(line, index + 1))
        .collect()
}

/// Parses a single program line.
///
/// # Arguments
///
/// * `line` - The line text, without its trailing newline.
/// * `number` - The 1-based line number, carried into any error.
///
/// # Errors
///
/// Returns a [`ParseError`] if the line matches neither command shape, if an
/// address or value token is not an unsigned integer, or if a mask pattern
/// violates the 36-character `{0,1,X}` grammar.
pub fn parse_line(line: &str, number: usize) -> Result<Command, ParseError> {
    if let Some(pattern) = line.strip_prefix(MASK_PREFIX) {
        let mask = Bitmask::parse(pattern).map_err(|source| ParseError::BadMaskPattern {
            line: number,
            source,
        })?;
        return Ok(Command::SetMask(mask));
    }

    if let Some(rest) = line.strip_prefix(MEM_PREFIX) {
        let Some((addr_token, after_bracket)) = rest.split_once(']') else {
            return Err(unrecognized(line, number));
        };
        let Some(value_token) = after_bracket.strip_prefix(ASSIGN_TOKEN) else {
            return Err(unrecognized(line, number));
        };

        let address = addr_token
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidAddress {
                line: number,
                token: addr_token.to_owned(),
            })?;
        let value = value_token
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidValue {
                line: number,
                token: value_token.to_owned(),
            })?;

        return Ok(Command::Write {
            address: MemAddr::new(address),
            value,
        });
    }

    Err(unrecognized(line, number))
}

fn unrecognized(line: &str, number: usize) -> ParseError {
    ParseError::UnrecognizedLine {
        line: number,
        content: line.to_owned(),
    }
}
