//! Instruction field extraction.
//!
//! Provides the raw bit-field parser used by the decoders:
//! 1. **Common Fields:** [`InstructionBits`] extracts opcode, register, and function fields.
//! 2. **J-Type Groups:** [`decode_j_fields`] returns the scattered JAL immediate groups.
//! 3. **B-Type Groups:** [`decode_b_fields`] returns the scattered branch immediate groups.
//!
//! The parser only slices bits. Reassembling and sign-extending the immediate is the
//! job of [`decode_immediate`](crate::isa::decode::decode_immediate).

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit position of the `rd` field.
pub const RD_SHIFT: u32 = 7;
/// Bit position of the `funct3` field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit position of the `rs1` field.
pub const RS1_SHIFT: u32 = 15;
/// Bit position of the `rs2` field.
pub const RS2_SHIFT: u32 = 20;
/// Bit position of the `funct7` field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Bit groups of a J-type instruction, in encoding order (MSB first).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JFields {
    /// `imm[20]`, instruction bit 31.
    pub imm_20: u32,
    /// `imm[10:1]`, instruction bits 30-21.
    pub imm_10_1: u32,
    /// `imm[11]`, instruction bit 20.
    pub imm_11: u32,
    /// `imm[19:12]`, instruction bits 19-12.
    pub imm_19_12: u32,
    /// Destination register, bits 11-7.
    pub rd: u32,
    /// Major opcode, bits 6-0.
    pub opcode: u32,
}

impl JFields {
    /// Returns the groups as an ordered array, MSB group first.
    pub const fn groups(&self) -> [u32; 6] {
        [
            self.imm_20,
            self.imm_10_1,
            self.imm_11,
            self.imm_19_12,
            self.rd,
            self.opcode,
        ]
    }
}

/// Bit groups of a B-type instruction, in encoding order (MSB first).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BFields {
    /// `imm[12]`, instruction bit 31.
    pub imm_12: u32,
    /// `imm[10:5]`, instruction bits 30-25.
    pub imm_10_5: u32,
    /// Second source register, bits 24-20.
    pub rs2: u32,
    /// First source register, bits 19-15.
    pub rs1: u32,
    /// Branch condition, bits 14-12.
    pub funct3: u32,
    /// `imm[4:1]`, instruction bits 11-8.
    pub imm_4_1: u32,
    /// `imm[11]`, instruction bit 7.
    pub imm_11: u32,
    /// Major opcode, bits 6-0.
    pub opcode: u32,
}

impl BFields {
    /// Returns the groups as an ordered array, MSB group first.
    pub const fn groups(&self) -> [u32; 8] {
        [
            self.imm_12,
            self.imm_10_5,
            self.rs2,
            self.rs1,
            self.funct3,
            self.imm_4_1,
            self.imm_11,
            self.opcode,
        ]
    }
}

/// Extracts `width` bits of `inst` starting at bit `lsb`.
#[inline(always)]
const fn bits(inst: u32, lsb: u32, width: u32) -> u32 {
    (inst >> lsb) & ((1 << width) - 1)
}

/// Slices a J-type instruction into its bit groups.
pub const fn decode_j_fields(inst: u32) -> JFields {
    JFields {
        imm_20: bits(inst, 31, 1),
        imm_10_1: bits(inst, 21, 10),
        imm_11: bits(inst, 20, 1),
        imm_19_12: bits(inst, 12, 8),
        rd: bits(inst, RD_SHIFT, 5),
        opcode: inst & OPCODE_MASK,
    }
}

/// Slices a B-type instruction into its bit groups.
pub const fn decode_b_fields(inst: u32) -> BFields {
    BFields {
        imm_12: bits(inst, 31, 1),
        imm_10_5: bits(inst, 25, 6),
        rs2: bits(inst, RS2_SHIFT, 5),
        rs1: bits(inst, RS1_SHIFT, 5),
        funct3: bits(inst, FUNCT3_SHIFT, 3),
        imm_4_1: bits(inst, 8, 4),
        imm_11: bits(inst, 7, 1),
        opcode: inst & OPCODE_MASK,
    }
}
