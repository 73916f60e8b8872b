//! The three-valued 36-bit bitmask.
//!
//! This module implements the mask at the heart of both decoding strategies. It provides:
//! 1. **Parsing:** Construction from the 36-character `{0,1,X}` pattern text.
//! 2. **Value Masking:** Forcing written-value bits to 0/1 while passing `X` positions through.
//! 3. **Address Decoding:** Splitting a written address into a forced base and a floating field.
//! 4. **Expansion:** Enumeration of all concrete assignments to the floating bits (see [`expand`]).

use std::fmt::{self, Write as _};

use crate::common::addr::MemAddr;
use crate::common::constants::{
    ADDRESS_SPACE_MASK, FLOATING_CHAR, FORCE_ONE_CHAR, FORCE_ZERO_CHAR, MASK_WIDTH,
};
use crate::common::error::MaskPatternError;

/// Floating-bit combination expansion.
pub mod expand;

/// A fixed-width three-valued mask over the 36-bit address/value space.
///
/// Each bit position is one of: force-0 (pattern `0`), force-1 (pattern `1`), or
/// pass-through/floating (pattern `X`). The two stored fields are disjoint by
/// construction; a bit set in neither field is a force-0 position. A mask is
/// immutable once built and replaces, never merges with, the decoder's previous
/// mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmask {
    /// Bit set ⇔ the pattern character at that position was `X`.
    floating: u64,
    /// Bit set ⇔ the pattern character at that position was `1`.
    force_one: u64,
}

/// The decoded form of a written address under the address-floating strategy.
///
/// `base` carries the forced-1 bits and the pass-through bits of the original
/// address, with every floating position cleared to 0; the concrete target
/// addresses are `base | c` for each combination `c` over `floating`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskedAddress {
    /// The written address with mask `1` bits forced on and floating bits cleared.
    pub base: MemAddr,
    /// Bit set ⇔ that position must be enumerated over both 0 and 1.
    pub floating: u64,
}

impl Bitmask {
    /// Parses a mask from its 36-character pattern text.
    ///
    /// The pattern is scanned with the rightmost character mapping to bit 0 and
    /// the leftmost to bit 35. `X` marks a floating position, `1` a forced-one
    /// position, and `0` a forced-zero position.
    ///
    /// # Errors
    ///
    /// Returns [`MaskPatternError`] if the pattern is not exactly 36 characters
    /// or contains a character outside `{0,1,X}`.
    pub fn parse(pattern: &str) -> Result<Self, MaskPatternError> {
        let len = pattern.chars().count();
        if len != MASK_WIDTH as usize {
            return Err(MaskPatternError::Length { actual: len });
        }

        let mut floating = 0u64;
        let mut force_one = 0u64;
        for (offset, ch) in pattern.chars().enumerate() {
            let bit = 1u64 << (MASK_WIDTH as usize - 1 - offset);
            match ch {
                FLOATING_CHAR => floating |= bit,
                FORCE_ONE_CHAR => force_one |= bit,
                FORCE_ZERO_CHAR => {}
                found => return Err(MaskPatternError::Char { found, offset }),
            }
        }

        Ok(Self { floating, force_one })
    }

    /// Returns the all-pass-through mask (every position `X`).
    ///
    /// Under [`apply_to_value`](Self::apply_to_value) this mask is the identity
    /// on the 36-bit value range.
    #[inline]
    pub const fn all_pass() -> Self {
        Self {
            floating: ADDRESS_SPACE_MASK,
            force_one: 0,
        }
    }

    /// Returns the floating field (bit set ⇔ pattern `X`).
    #[inline]
    pub const fn floating(&self) -> u64 {
        self.floating
    }

    /// Returns the forced-one field (bit set ⇔ pattern `1`).
    #[inline]
    pub const fn force_one(&self) -> u64 {
        self.force_one
    }

    /// Returns the number of floating positions in this mask.
    #[inline]
    pub const fn floating_bit_count(&self) -> u32 {
        self.floating.count_ones()
    }

    /// Applies the mask to a written value.
    ///
    /// `X` positions pass the corresponding value bit through unchanged, `1`
    /// positions force the bit to 1, and `0` positions force it to 0. This is
    /// the full contract; there is no partial application.
    #[inline]
    pub const fn apply_to_value(&self, value: u64) -> u64 {
        (value & self.floating) | self.force_one
    }

    /// Decodes a written address into its forced base and floating field.
    ///
    /// `1` positions force the address bit to 1, `X` positions are cleared in
    /// the base (they are completed by expansion), and `0` positions pass the
    /// original address bit through untouched, since neither stored field
    /// covers them.
    #[inline]
    pub const fn masked_address(&self, address: MemAddr) -> MaskedAddress {
        MaskedAddress {
            base: MemAddr::new((address.val() | self.force_one) & !self.floating),
            floating: self.floating,
        }
    }
}

impl fmt::Display for Bitmask {
    /// Renders the mask back to its 36-character `{0,1,X}` pattern form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in (0..MASK_WIDTH).rev() {
            let bit = 1u64 << position;
            let ch = if self.floating & bit != 0 {
                FLOATING_CHAR
            } else if self.force_one & bit != 0 {
                FORCE_ONE_CHAR
            } else {
                FORCE_ZERO_CHAR
            };
            f.write_char(ch)?;
        }
        Ok(())
    }
}
