//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcode tables, field extraction, instruction classification, and
//! immediate reconstruction, organized by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit).
//! * `rv32m`: Standard Extension for Integer Multiplication and Division.

/// Instruction classes carried on the instruction-class signal.
pub mod class;

/// Field decoding and immediate reconstruction for all instruction formats.
pub mod decode;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

/// Integer multiply/divide extension (MUL, DIV, REM instructions).
pub mod rv32m;

pub use class::{ImmediateFormat, RvInstr};
pub use decode::{Decoded, decode, decode_immediate};
