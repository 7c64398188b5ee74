//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) is used in R-type instructions, and in the
//! shift-immediate forms, to separate operations sharing a `funct3`.

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA, SRAI).
pub const ALT: u32 = 0b0100000;
