//! Configuration system for the decoder.
//!
//! This module defines the configuration structure used to parameterize a run.
//! Configuration is supplied as JSON (see [`Config::from_json`]) or via
//! `Config::default()`; the CLI maps its flags onto the same structure.

use serde::Deserialize;

use crate::decoder::DecodingStrategy;

/// Run configuration.
///
/// `strategy` selects which decoding strategy to evaluate; `None` means run
/// both, each on an independent decoder. `trace_commands` raises the default
/// log verbosity so every executed command is visible.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Strategy to evaluate; `None` evaluates both.
    pub strategy: Option<DecodingStrategy>,
    /// Emit a trace event for every executed command.
    pub trace_commands: bool,
}

impl Config {
    /// Deserializes a configuration from JSON text.
    ///
    /// Unknown fields are rejected so a typo in a config file fails loudly
    /// instead of silently falling back to a default.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] for malformed JSON or
    /// unknown/ill-typed fields.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
