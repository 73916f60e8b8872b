//! Program parser — accepted shapes, rejected shapes, line attribution.
//!
//! The parser contract is all-or-nothing: a single malformed line fails the
//! whole parse with an error naming that line, and nothing else is validated
//! beyond syntax.

use maskmem_core::command::Command;
use maskmem_core::common::error::{MaskPatternError, ParseError};
use maskmem_core::mask::Bitmask;
use maskmem_core::parse_program;
use rstest::rstest;

use crate::common::harness::{addr, mask_line, mask_pattern};

// ──────────────────────────────────────────────────────────
// Accepted shapes
// ──────────────────────────────────────────────────────────

#[test]
fn parses_mask_line() {
    let line = mask_line('X', "X");
    let program = parse_program(&line).unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_eq!(program, vec![Command::SetMask(Bitmask::all_pass())]);
}

#[test]
fn parses_write_line() {
    let program = parse_program("mem[42] = 100").unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_eq!(
        program,
        vec![Command::Write {
            address: addr(42),
            value: 100
        }]
    );
}

#[test]
fn preserves_command_order() {
    let text = format!("{}\nmem[8] = 11\nmem[7] = 101", mask_line('X', "1XXXX0X"));
    let program = parse_program(&text).unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_eq!(program.len(), 3);
    assert!(matches!(program[0], Command::SetMask(_)));
    assert_eq!(
        program[1],
        Command::Write {
            address: addr(8),
            value: 11
        }
    );
    assert_eq!(
        program[2],
        Command::Write {
            address: addr(7),
            value: 101
        }
    );
}

#[test]
fn accepts_full_width_addresses() {
    // The address space is 36 bits wide; addresses must not be truncated to 32.
    let top = (1u64 << 36) - 1;
    let program = parse_program(&format!("mem[{top}] = 1"))
        .unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_eq!(
        program,
        vec![Command::Write {
            address: addr(top),
            value: 1
        }]
    );
}

#[test]
fn parsed_mask_round_trips_through_display() {
    let pattern = mask_pattern('0', "1XXXX0X");
    let program = parse_program(&format!("mask = {pattern}"))
        .unwrap_or_else(|e| panic!("parse failed: {e}"));
    let Command::SetMask(mask) = program[0] else {
        panic!("expected a mask command");
    };
    assert_eq!(mask.to_string(), pattern);
}

// ──────────────────────────────────────────────────────────
// Rejected shapes
// ──────────────────────────────────────────────────────────

#[rstest]
#[case::empty_line("")]
#[case::unknown_keyword("msk = 000000000000000000000000000000000000")]
#[case::mask_without_assignment("mask 000000000000000000000000000000000000")]
#[case::write_without_bracket("mem 42 = 100")]
#[case::write_unclosed_bracket("mem[42 = 100")]
#[case::write_without_assignment("mem[42]100")]
fn rejects_unrecognized_lines(#[case] line: &str) {
    assert!(matches!(
        parse_program(line),
        Err(ParseError::UnrecognizedLine { line: 1, .. })
    ));
}

#[rstest]
#[case::alphabetic("mem[forty] = 100")]
#[case::empty("mem[] = 100")]
#[case::negative("mem[-4] = 100")]
fn rejects_non_numeric_addresses(#[case] line: &str) {
    assert!(matches!(
        parse_program(line),
        Err(ParseError::InvalidAddress { line: 1, .. })
    ));
}

#[rstest]
#[case::alphabetic("mem[4] = ten")]
#[case::empty("mem[4] = ")]
#[case::negative("mem[4] = -1")]
fn rejects_non_numeric_values(#[case] line: &str) {
    assert!(matches!(
        parse_program(line),
        Err(ParseError::InvalidValue { line: 1, .. })
    ));
}

#[rstest]
#[case::too_short(35)]
#[case::too_long(37)]
fn rejects_wrong_length_masks(#[case] width: usize) {
    let line = format!("mask = {}", "X".repeat(width));
    assert!(matches!(
        parse_program(&line),
        Err(ParseError::BadMaskPattern {
            line: 1,
            source: MaskPatternError::Length { actual }
        }) if actual == width
    ));
}

#[test]
fn rejects_mask_with_foreign_character() {
    let line = mask_line('0', "2");
    assert!(matches!(
        parse_program(&line),
        Err(ParseError::BadMaskPattern {
            line: 1,
            source: MaskPatternError::Char {
                found: '2',
                offset: 35
            }
        })
    ));
}

// ──────────────────────────────────────────────────────────
// Error attribution
// ──────────────────────────────────────────────────────────

#[test]
fn error_names_the_offending_line() {
    let text = format!("{}\nmem[oops] = 1", mask_line('X', "X"));
    let err = match parse_program(&text) {
        Err(e) => e,
        Ok(_) => panic!("expected a parse error"),
    };
    assert_eq!(
        err,
        ParseError::InvalidAddress {
            line: 2,
            token: "oops".to_owned()
        }
    );
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn failure_yields_no_partial_sequence() {
    // A valid prefix must not leak out when a later line is malformed.
    let text = format!("{}\nmem[1] = 2\nnot a command", mask_line('X', "X"));
    assert!(parse_program(&text).is_err());
}
