//! Bit-accurate RISC-V datapath primitives.
//!
//! This crate models the building blocks of a synchronous RISC-V datapath with the following:
//! 1. **Signals:** Fixed-width bit vectors with signed, unsigned, and boolean views.
//! 2. **Clocking:** Registers advanced by a two-phase (save, then commit) clock.
//! 3. **Units:** Multiplexers, gates, an opcode-selected ALU, and instruction/immediate decoders.
//! 4. **Register File:** 32 architectural registers with combinational reads and a clocked write.
//! 5. **ISA:** RV32IM classification and immediate reconstruction.
//!
//! Everything lives inside a [`Model`], which hands out handles for wiring and
//! owns the clock. Models are independent of each other.

/// Common types and constants (signals, handles, errors, register file).
pub mod common;
/// Model configuration (semantics, tracing, limits).
pub mod config;
/// Datapath core (model, clock protocol, combinational units, architectural state).
pub mod core;
/// Instruction set (field extraction, classification, immediate decode, RV32I/M tables).
pub mod isa;

/// Fixed-width signal value.
pub use crate::common::Signal;
/// Handles issued by a [`Model`].
pub use crate::common::{RegFileId, RegId, SignalId, UnitId};
/// Crate error types and result alias.
pub use crate::common::{Result, SimError, UnitFault};
/// Register file inputs.
pub use crate::common::RegisterFilePorts;
/// Sentinel produced for instructions without an immediate.
pub use crate::common::NO_IMMEDIATE;
/// Model configuration; use `ModelConfig::default()` or deserialize from JSON.
pub use crate::config::{ModelConfig, Semantics};
/// The datapath model.
pub use crate::core::Model;
/// Unit operators.
pub use crate::core::units::alu::AluOp;
pub use crate::core::units::gate::GateOp;
/// Instruction classes and the immediate decode helper.
pub use crate::isa::{RvInstr, decode_immediate};
