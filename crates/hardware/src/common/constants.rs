//! Datapath-wide constants.
//!
//! This module defines the constants shared by the units of the datapath. It includes:
//! 1. **Architectural Widths:** XLEN, instruction width, register index width.
//! 2. **Control Widths:** Widths of the ALU opcode and instruction-class control signals.
//! 3. **Diagnostics:** The sentinel emitted when an instruction carries no immediate.

/// Width of an architectural register and of the immediate decoder output.
pub const XLEN: u32 = 32;

/// Width of an instruction word.
pub const INSTRUCTION_WIDTH: u32 = 32;

/// Number of architectural general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Width of a register index (`rd`, `rs1`, `rs2`).
pub const REG_INDEX_WIDTH: u32 = 5;

/// Width of a write-enable strobe.
pub const ENABLE_WIDTH: u32 = 1;

/// Width of the ALU opcode control signal.
pub const ALU_CTRL_WIDTH: u32 = 5;

/// Width of the signal carrying an instruction class ([`RvInstr`](crate::isa::RvInstr) code).
pub const INSTR_CLASS_WIDTH: u32 = 6;

/// Value produced by the immediate decoder for instructions without an immediate.
///
/// This is a diagnostic pattern, not an architectural value. Callers must test for
/// it (or consult [`RvInstr::has_immediate`](crate::isa::RvInstr::has_immediate))
/// before using the decoder output.
pub const NO_IMMEDIATE: u32 = 0xDEAD_BEEF;
