//! RISC-V Instruction Decoder.
//!
//! This module turns a 32-bit RV32IM encoding into a structured [`Decoded`] record
//! and reconstructs the immediate of each format (I, S, B, U, J). Immediates are
//! sign-extended to [`XLEN`] bits and reported as raw `u32` bit patterns.
//!
//! Classes without an immediate produce [`NO_IMMEDIATE`].

use crate::common::constants::{INSTRUCTION_WIDTH, NO_IMMEDIATE, XLEN};
use crate::isa::class::{ImmediateFormat, RvInstr};
use crate::isa::instruction::{InstructionBits, decode_b_fields, decode_j_fields};

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Total number of bits in I-Type and S-Type immediates.
const I_IMM_BITS: u32 = 12;

/// Mask selecting `imm[11:5]` of an S-Type instruction in place (bits 25-31).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_HIGH_MASK: u32 = 0xFE00_0000;

/// Shift moving `imm[11:5]` from bit 25 down to bit 5.
const S_IMM_HIGH_SHIFT: u32 = 20;

/// Mask selecting `imm[4:0]` of an S-Type instruction in place (bits 7-11).
const S_IMM_LOW_MASK: u32 = 0x0000_0F80;

/// Shift moving `imm[4:0]` from bit 7 down to bit 0.
const S_IMM_LOW_SHIFT: u32 = 7;

/// Total number of bits in B-Type immediate (13 bits, sign-extended).
const B_IMM_BITS: u32 = 13;

/// Bit mask for extracting U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Total number of bits in J-Type immediate (21 bits, sign-extended).
const J_IMM_BITS: u32 = 21;

/// Decoded representation of a RISC-V instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw instruction word.
    pub raw: u32,
    /// Instruction class.
    pub class: RvInstr,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code 3.
    pub funct3: u32,
    /// Function code 7.
    pub funct7: u32,
    /// Immediate, or [`NO_IMMEDIATE`] when the class carries none.
    pub imm: u32,
}

/// Decodes a RISC-V instruction into its component fields.
pub fn decode(inst: u32) -> Decoded {
    let class = RvInstr::classify(inst);
    Decoded {
        raw: inst,
        class,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: decode_immediate(class, inst),
    }
}

/// Reconstructs the immediate of `inst` using the layout of `class`.
///
/// The class is trusted as given; it is not re-derived from `inst`.
///
/// # Arguments
///
/// * `class` - Instruction class selecting the immediate layout.
/// * `inst`  - The raw 32-bit instruction word.
///
/// # Returns
///
/// An [`XLEN`]-bit pattern, sign-extended except for U-Type, or
/// [`NO_IMMEDIATE`] when the class carries no immediate.
pub const fn decode_immediate(class: RvInstr, inst: u32) -> u32 {
    match class.immediate_format() {
        ImmediateFormat::U => inst & U_IMM_MASK,
        ImmediateFormat::J => decode_j_type_imm(inst),
        ImmediateFormat::I => sign_extend(inst >> I_IMM_SHIFT, I_IMM_BITS),
        ImmediateFormat::B => decode_b_type_imm(inst),
        ImmediateFormat::S => decode_s_type_imm(inst),
        ImmediateFormat::None => NO_IMMEDIATE,
    }
}

/// S-Type: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
const fn decode_s_type_imm(inst: u32) -> u32 {
    let combined =
        ((inst & S_IMM_HIGH_MASK) >> S_IMM_HIGH_SHIFT) | ((inst & S_IMM_LOW_MASK) >> S_IMM_LOW_SHIFT);
    sign_extend(combined, I_IMM_BITS)
}

/// B-Type: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
///
/// The offset is always even; bit 0 of the result is zero.
const fn decode_b_type_imm(inst: u32) -> u32 {
    let f = decode_b_fields(inst);
    let combined = (f.imm_12 << 12) | (f.imm_11 << 11) | (f.imm_10_5 << 5) | (f.imm_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// J-Type: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
const fn decode_j_type_imm(inst: u32) -> u32 {
    let f = decode_j_fields(inst);
    let combined = (f.imm_20 << 20) | (f.imm_19_12 << 12) | (f.imm_11 << 11) | (f.imm_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends the low `bits` of `val` to [`XLEN`] bits.
const fn sign_extend(val: u32, bits: u32) -> u32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (((val << shift) as i32) >> shift) as u32 & (u32::MAX >> (u32::BITS - XLEN))
}
