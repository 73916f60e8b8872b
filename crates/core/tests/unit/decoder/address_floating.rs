//! Address-floating strategy — the mask expands the written address.

use maskmem_core::common::error::ExecError;
use maskmem_core::decoder::{Decoder, DecodingStrategy, run_address_floating};
use pretty_assertions::assert_eq;

use crate::common::harness::{addr, init_tracing, mask_line, program, run_ok};

#[test]
fn expands_floating_addresses_end_to_end() {
    init_tracing();
    let program = program(&[
        &mask_line('0', "X1001X"),
        "mem[42] = 100",
        &mask_line('0', "X0XX"),
        "mem[26] = 1",
    ]);

    let mut decoder = Decoder::new(DecodingStrategy::AddressFloating);
    run_ok(&mut decoder, &program);

    // First write lands on {26, 27, 58, 59}; the second covers
    // {16..19, 24..27} and overwrites the overlap at 26 and 27.
    assert_eq!(decoder.memory().len(), 10);
    assert_eq!(decoder.memory().read(addr(58)), Some(100));
    assert_eq!(decoder.memory().read(addr(59)), Some(100));
    assert_eq!(decoder.memory().read(addr(16)), Some(1));
    assert_eq!(decoder.memory().read(addr(19)), Some(1));
    assert_eq!(decoder.memory().read(addr(26)), Some(1));
    assert_eq!(decoder.memory().read(addr(27)), Some(1));
    assert_eq!(decoder.memory_values_sum(), 208);
}

#[test]
fn zero_floating_bits_writes_exactly_one_address() {
    let program = program(&[&mask_line('0', "11"), "mem[4] = 100"]);
    let mut decoder = Decoder::new(DecodingStrategy::AddressFloating);
    run_ok(&mut decoder, &program);

    assert_eq!(decoder.memory().len(), 1);
    assert_eq!(decoder.memory().read(addr(7)), Some(100));
}

#[test]
fn values_are_stored_raw() {
    // The mask decodes the address only; a value the mask would rewrite
    // under value masking must land in memory untouched.
    let program = program(&[&mask_line('0', "11"), "mem[4] = 5"]);
    let mut decoder = Decoder::new(DecodingStrategy::AddressFloating);
    run_ok(&mut decoder, &program);

    assert_eq!(decoder.memory().read(addr(7)), Some(5));
}

#[test]
fn zero_positions_pass_address_bits_through() {
    let program = program(&[&mask_line('0', "0"), "mem[170] = 9"]);
    let mut decoder = Decoder::new(DecodingStrategy::AddressFloating);
    run_ok(&mut decoder, &program);

    assert_eq!(decoder.memory().len(), 1);
    assert_eq!(decoder.memory().read(addr(170)), Some(9));
}

#[test]
fn tracks_expansion_statistics() {
    let program = program(&[
        &mask_line('0', "X1001X"),
        "mem[42] = 100",
        &mask_line('0', "X0XX"),
        "mem[26] = 1",
    ]);
    let mut decoder = Decoder::new(DecodingStrategy::AddressFloating);
    run_ok(&mut decoder, &program);

    let stats = decoder.stats();
    assert_eq!(stats.commands_run, 4);
    assert_eq!(stats.masks_set, 2);
    assert_eq!(stats.write_commands, 2);
    assert_eq!(stats.cells_written, 12);
    assert_eq!(stats.widest_expansion, 8);
}

#[test]
fn write_before_any_mask_fails_fast() {
    let program = program(&["mem[1] = 2"]);
    assert_eq!(
        run_address_floating(&program),
        Err(ExecError::WriteBeforeMask { index: 0 })
    );
}
