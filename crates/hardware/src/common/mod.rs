//! Common types and constants used throughout the datapath model.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Signals:** The fixed-width [`Signal`] value carried on every wire.
//! 2. **Handles:** Arena IDs used as non-owning references between components.
//! 3. **Constants:** Architectural and control widths plus the no-immediate sentinel.
//! 4. **Error Handling:** [`SimError`], [`UnitFault`], and the crate [`Result`] alias.
//! 5. **Register File:** The 32-entry architectural register file with its ports.

/// Append-only arenas and the typed handles that index them.
pub mod arena;

/// Architectural and control-signal constants.
pub mod constants;

/// Error types for construction, wiring, and operation failures.
pub mod error;

/// Register file with combinational read ports and a clocked write port.
pub mod reg;

/// Fixed-width signal values.
pub mod signal;

pub use arena::{RegFileId, RegId, SignalId, UnitId};
pub use constants::{NO_IMMEDIATE, XLEN};
pub use error::{Result, SimError, UnitFault};
pub use reg::{RegisterFile, RegisterFilePorts};
pub use signal::Signal;
