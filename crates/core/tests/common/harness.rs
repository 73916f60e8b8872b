//! Builders and helpers shared across the decoder tests.

use maskmem_core::command::Command;
use maskmem_core::common::addr::MemAddr;
use maskmem_core::decoder::Decoder;
use maskmem_core::parse_program;

/// Installs a test-friendly tracing subscriber; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Parses a program given as individual lines, panicking on any parse error.
///
/// Use only for programs the test knows to be well formed.
pub fn program(lines: &[&str]) -> Vec<Command> {
    let text = lines.join("\n");
    parse_program(&text).unwrap_or_else(|e| panic!("test program failed to parse: {e}"))
}

/// Left-pads `tail` with `fill` to the full 36-character mask width.
pub fn mask_pattern(fill: char, tail: &str) -> String {
    let mut pattern = String::new();
    for _ in 0..(36 - tail.chars().count()) {
        pattern.push(fill);
    }
    pattern.push_str(tail);
    pattern
}

/// Builds a full `mask = …` program line from a mask tail.
pub fn mask_line(fill: char, tail: &str) -> String {
    format!("mask = {}", mask_pattern(fill, tail))
}

/// Wraps a raw address for lookups against the sparse memory store.
pub const fn addr(raw: u64) -> MemAddr {
    MemAddr::new(raw)
}

/// Runs a program that the test expects to succeed, panicking otherwise.
pub fn run_ok(decoder: &mut Decoder, program: &[Command]) {
    decoder
        .run(program)
        .unwrap_or_else(|e| panic!("decoder run failed: {e}"));
}
