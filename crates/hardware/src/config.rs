//! Configuration for a datapath model.
//!
//! This module defines the knobs that parameterize a [`Model`](crate::Model). It provides:
//! 1. **Defaults:** Baseline limits applied when a field is omitted.
//! 2. **Semantics:** Which interpretation of the gate, shift, and equality operations to use.
//! 3. **Structure:** [`ModelConfig`], deserializable from JSON or built with `ModelConfig::default()`.

use serde::Deserialize;

use crate::common::error::Result;

/// Default configuration constants for a model.
mod defaults {
    /// Maximum number of nets (signals) a single model may allocate.
    ///
    /// Every input, constant, register output, and component output is a net.
    pub const MAX_NETS: usize = 65_536;
}

/// Operation semantics used by gates and the ALU.
///
/// The two modes only differ for the gate fold, the right shifts, the shift
/// amount, and `EQ`. Every other operation behaves identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Semantics {
    /// Reproduces the reference datapath exactly.
    ///
    /// Gates fold bit 0 of every input starting from `true`. `SRL` computes
    /// `signed(a) + unsigned(b)`. `SRA` is a logical shift. `EQ` is unimplemented.
    #[default]
    Reference,
    /// RISC-V architectural behavior.
    ///
    /// Gates apply their operator across the full width starting from the
    /// operator's identity. `SRL` and `SRA` are true right shifts, `SRA`
    /// sign-extending from bit `n-1`. Shift amounts are masked to the low
    /// `log2` bits of the width. `EQ` yields 1 or 0.
    #[serde(alias = "Riscv")]
    Architectural,
}

/// Root configuration of a [`Model`](crate::Model).
///
/// # Examples
///
/// ```
/// use rvsim_datapath::{ModelConfig, Semantics};
///
/// let json = r#"{ "semantics": "Architectural", "trace_updates": true }"#;
/// let config = ModelConfig::from_json(json).unwrap();
/// assert_eq!(config.semantics, Semantics::Architectural);
/// assert!(config.trace_updates);
/// assert_eq!(config.max_nets, ModelConfig::default().max_nets);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelConfig {
    /// Operation semantics for gates and the ALU.
    #[serde(default)]
    pub semantics: Semantics,

    /// Emit a `trace!` event for every combinational update and register commit.
    #[serde(default)]
    pub trace_updates: bool,

    /// Upper bound on the number of nets the model may allocate.
    #[serde(default = "ModelConfig::default_max_nets")]
    pub max_nets: usize,
}

impl ModelConfig {
    /// Returns the default net limit.
    const fn default_max_nets() -> usize {
        defaults::MAX_NETS
    }

    /// Parses a configuration from JSON. Omitted fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`](crate::SimError::Config) on malformed JSON or unknown enum values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns a configuration using the given semantics and defaults elsewhere.
    pub fn with_semantics(semantics: Semantics) -> Self {
        Self {
            semantics,
            ..Self::default()
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            semantics: Semantics::default(),
            trace_updates: false,
            max_nets: defaults::MAX_NETS,
        }
    }
}
