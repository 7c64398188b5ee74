//! Instruction classification.
//!
//! Maps a raw RV32IM instruction word onto a closed [`RvInstr`] enumeration. The
//! class travels through the datapath as a [`INSTR_CLASS_WIDTH`]-bit signal and
//! selects the immediate format in the immediate decoder.
//!
//! [`INSTR_CLASS_WIDTH`]: crate::common::constants::INSTR_CLASS_WIDTH

use std::fmt;

use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, funct7, opcodes};
use crate::isa::rv32m::{self, funct3 as m_funct3};

/// Immediate layout selected by an instruction class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmediateFormat {
    /// `imm[31:12]`, low 12 bits zero (LUI, AUIPC).
    U,
    /// 21-bit scattered jump offset (JAL).
    J,
    /// `imm[11:0]` from bits 31-20 (JALR, loads, immediate ALU ops).
    I,
    /// 13-bit scattered branch offset.
    B,
    /// `imm[11:5] | imm[4:0]` split across bits 31-25 and 11-7 (stores).
    S,
    /// The instruction carries no architectural immediate.
    None,
}

/// RV32IM instruction classes.
///
/// The discriminant is the value carried on an instruction-class signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum RvInstr {
    Lui,
    Auipc,
    Jal,
    Jalr,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Mul,
    Mulh,
    Mulhsu,
    Mulhu,
    Div,
    Divu,
    Rem,
    Remu,
    Fence,
    Ecall,
    Ebreak,
    /// Any word that is not a recognised RV32IM encoding.
    Invalid,
}

impl RvInstr {
    /// Every class, indexed by its code.
    pub const ALL: [Self; 49] = [
        Self::Lui,
        Self::Auipc,
        Self::Jal,
        Self::Jalr,
        Self::Beq,
        Self::Bne,
        Self::Blt,
        Self::Bge,
        Self::Bltu,
        Self::Bgeu,
        Self::Lb,
        Self::Lh,
        Self::Lw,
        Self::Lbu,
        Self::Lhu,
        Self::Sb,
        Self::Sh,
        Self::Sw,
        Self::Addi,
        Self::Slti,
        Self::Sltiu,
        Self::Xori,
        Self::Ori,
        Self::Andi,
        Self::Slli,
        Self::Srli,
        Self::Srai,
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
        Self::Mul,
        Self::Mulh,
        Self::Mulhsu,
        Self::Mulhu,
        Self::Div,
        Self::Divu,
        Self::Rem,
        Self::Remu,
        Self::Fence,
        Self::Ecall,
        Self::Ebreak,
        Self::Invalid,
    ];

    /// The value carried on an instruction-class signal.
    pub const fn code(self) -> u64 {
        self as u64
    }

    /// Inverse of [`RvInstr::code`].
    pub fn from_code(code: u64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Classifies a raw instruction word.
    ///
    /// Words that do not decode to an RV32IM instruction yield [`RvInstr::Invalid`].
    pub fn classify(inst: u32) -> Self {
        let f3 = inst.funct3();
        let f7 = inst.funct7();
        match inst.opcode() {
            opcodes::OP_LUI => Self::Lui,
            opcodes::OP_AUIPC => Self::Auipc,
            opcodes::OP_JAL => Self::Jal,
            opcodes::OP_JALR if f3 == funct3::JALR => Self::Jalr,
            opcodes::OP_BRANCH => match f3 {
                funct3::BEQ => Self::Beq,
                funct3::BNE => Self::Bne,
                funct3::BLT => Self::Blt,
                funct3::BGE => Self::Bge,
                funct3::BLTU => Self::Bltu,
                funct3::BGEU => Self::Bgeu,
                _ => Self::Invalid,
            },
            opcodes::OP_LOAD => match f3 {
                funct3::LB => Self::Lb,
                funct3::LH => Self::Lh,
                funct3::LW => Self::Lw,
                funct3::LBU => Self::Lbu,
                funct3::LHU => Self::Lhu,
                _ => Self::Invalid,
            },
            opcodes::OP_STORE => match f3 {
                funct3::SB => Self::Sb,
                funct3::SH => Self::Sh,
                funct3::SW => Self::Sw,
                _ => Self::Invalid,
            },
            opcodes::OP_IMM => match (f3, f7) {
                (funct3::ADD_SUB, _) => Self::Addi,
                (funct3::SLT, _) => Self::Slti,
                (funct3::SLTU, _) => Self::Sltiu,
                (funct3::XOR, _) => Self::Xori,
                (funct3::OR, _) => Self::Ori,
                (funct3::AND, _) => Self::Andi,
                (funct3::SLL, funct7::DEFAULT) => Self::Slli,
                (funct3::SRL_SRA, funct7::DEFAULT) => Self::Srli,
                (funct3::SRL_SRA, funct7::ALT) => Self::Srai,
                _ => Self::Invalid,
            },
            opcodes::OP_REG => match (f7, f3) {
                (funct7::DEFAULT, funct3::ADD_SUB) => Self::Add,
                (funct7::DEFAULT, funct3::SLL) => Self::Sll,
                (funct7::DEFAULT, funct3::SLT) => Self::Slt,
                (funct7::DEFAULT, funct3::SLTU) => Self::Sltu,
                (funct7::DEFAULT, funct3::XOR) => Self::Xor,
                (funct7::DEFAULT, funct3::SRL_SRA) => Self::Srl,
                (funct7::DEFAULT, funct3::OR) => Self::Or,
                (funct7::DEFAULT, funct3::AND) => Self::And,
                (funct7::ALT, funct3::ADD_SUB) => Self::Sub,
                (funct7::ALT, funct3::SRL_SRA) => Self::Sra,
                (rv32m::M_EXTENSION, m_funct3::MUL) => Self::Mul,
                (rv32m::M_EXTENSION, m_funct3::MULH) => Self::Mulh,
                (rv32m::M_EXTENSION, m_funct3::MULHSU) => Self::Mulhsu,
                (rv32m::M_EXTENSION, m_funct3::MULHU) => Self::Mulhu,
                (rv32m::M_EXTENSION, m_funct3::DIV) => Self::Div,
                (rv32m::M_EXTENSION, m_funct3::DIVU) => Self::Divu,
                (rv32m::M_EXTENSION, m_funct3::REM) => Self::Rem,
                (rv32m::M_EXTENSION, m_funct3::REMU) => Self::Remu,
                _ => Self::Invalid,
            },
            opcodes::OP_MISC_MEM if f3 == funct3::FENCE => Self::Fence,
            opcodes::OP_SYSTEM => match inst {
                opcodes::ECALL => Self::Ecall,
                opcodes::EBREAK => Self::Ebreak,
                _ => Self::Invalid,
            },
            _ => Self::Invalid,
        }
    }

    /// The immediate layout this class uses.
    pub const fn immediate_format(self) -> ImmediateFormat {
        match self {
            Self::Lui | Self::Auipc => ImmediateFormat::U,
            Self::Jal => ImmediateFormat::J,
            Self::Jalr
            | Self::Lb
            | Self::Lh
            | Self::Lw
            | Self::Lbu
            | Self::Lhu
            | Self::Addi
            | Self::Slti
            | Self::Sltiu
            | Self::Xori
            | Self::Ori
            | Self::Andi
            | Self::Slli
            | Self::Srli
            | Self::Srai => ImmediateFormat::I,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bltu | Self::Bgeu => {
                ImmediateFormat::B
            }
            Self::Sb | Self::Sh | Self::Sw => ImmediateFormat::S,
            // Register-register, fence, and environment instructions carry no
            // immediate the datapath consumes.
            Self::Add
            | Self::Sub
            | Self::Sll
            | Self::Slt
            | Self::Sltu
            | Self::Xor
            | Self::Srl
            | Self::Sra
            | Self::Or
            | Self::And
            | Self::Mul
            | Self::Mulh
            | Self::Mulhsu
            | Self::Mulhu
            | Self::Div
            | Self::Divu
            | Self::Rem
            | Self::Remu
            | Self::Fence
            | Self::Ecall
            | Self::Ebreak
            | Self::Invalid => ImmediateFormat::None,
        }
    }

    /// Whether the immediate decoder produces a real value for this class.
    pub const fn has_immediate(self) -> bool {
        !matches!(self.immediate_format(), ImmediateFormat::None)
    }

    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bltu => "bltu",
            Self::Bgeu => "bgeu",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Slli => "slli",
            Self::Srli => "srli",
            Self::Srai => "srai",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Mul => "mul",
            Self::Mulh => "mulh",
            Self::Mulhsu => "mulhsu",
            Self::Mulhu => "mulhu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Rem => "rem",
            Self::Remu => "remu",
            Self::Fence => "fence",
            Self::Ecall => "ecall",
            Self::Ebreak => "ebreak",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for RvInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
