//! RISC-V M-Extension Function Codes (funct3).
//!
//! Identifies the specific multiply or divide operation when `opcode == OP_REG`
//! and `funct7 == M_EXTENSION`.

/// Multiply, lower 32 bits.
pub const MUL: u32 = 0b000;

/// Multiply High (signed * signed).
pub const MULH: u32 = 0b001;

/// Multiply High Signed/Unsigned (signed * unsigned).
pub const MULHSU: u32 = 0b010;

/// Multiply High Unsigned (unsigned * unsigned).
pub const MULHU: u32 = 0b011;

/// Divide (signed).
pub const DIV: u32 = 0b100;

/// Divide Unsigned.
pub const DIVU: u32 = 0b101;

/// Remainder (signed).
pub const REM: u32 = 0b110;

/// Remainder Unsigned.
pub const REMU: u32 = 0b111;
