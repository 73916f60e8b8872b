//! Common utilities and types used throughout the masked-memory decoder.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the decoder. It includes:
//! 1. **Address Type:** A strong type for decoded memory addresses.
//! 2. **Constants:** The mask width, the address-space mask, and the mask alphabet.
//! 3. **Error Handling:** Parse and execution error taxonomies.

/// Decoded memory address type.
pub mod addr;

/// Mask-width and alphabet constants used throughout the decoder.
pub mod constants;

/// Parse and execution error types.
pub mod error;

pub use addr::MemAddr;
pub use constants::{ADDRESS_SPACE_MASK, MASK_WIDTH};
pub use error::{ExecError, MaskPatternError, ParseError};
