//! RISC-V Multiply/Divide Extension (M).
//!
//! The 'M' extension shares the `OP_REG` opcode with base integer arithmetic
//! and is distinguished by `funct7 == M_EXTENSION`.

/// Function code 3 definitions for multiply/divide operations.
pub mod funct3;

/// M-Extension selector in the funct7 field.
pub const M_EXTENSION: u32 = 0b0000001;
