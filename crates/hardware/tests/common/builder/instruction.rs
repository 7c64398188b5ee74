use rvsim_datapath::isa::rv32i::opcodes::*;
use rvsim_datapath::isa::rv32m::M_EXTENSION;

/// Encodes RV32IM instructions for tests.
///
/// `imm` is the architectural immediate; `build` scatters it into the layout of
/// the opcode's format. For LUI/AUIPC it is the 20-bit upper value.
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    imm: i32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rd: 0,
            funct3: 0,
            rs1: 0,
            rs2: 0,
            funct7: 0,
            imm: 0,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    fn r(mut self, funct7: u32, funct3: u32, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.opcode = OP_REG;
        self.funct7 = funct7;
        self.funct3 = funct3;
        self.rd = rd;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self
    }

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b0000000, 0b000, rd, rs1, rs2)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b0100000, 0b000, rd, rs1, rs2)
    }

    pub fn sra(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b0100000, 0b101, rd, rs1, rs2)
    }

    pub fn mul(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(M_EXTENSION, 0b000, rd, rs1, rs2)
    }

    pub fn addi(mut self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode = OP_IMM;
        self.rd = rd;
        self.rs1 = rs1;
        self.funct3 = 0b000;
        self.imm = imm;
        self
    }

    pub fn srai(mut self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.opcode = OP_IMM;
        self.rd = rd;
        self.rs1 = rs1;
        self.funct3 = 0b101;
        self.imm = ((0b0100000 << 5) | (shamt & 0x1F)) as i32;
        self
    }

    pub fn lw(mut self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode = OP_LOAD;
        self.rd = rd;
        self.rs1 = rs1;
        self.funct3 = 0b010;
        self.imm = imm;
        self
    }

    pub fn sw(mut self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = OP_STORE;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = 0b010;
        self.imm = imm;
        self
    }

    pub fn beq(mut self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = OP_BRANCH;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = 0b000;
        self.imm = imm;
        self
    }

    pub fn bne(mut self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = OP_BRANCH;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = 0b001;
        self.imm = imm;
        self
    }

    pub fn jal(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_JAL;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn jalr(mut self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode = OP_JALR;
        self.rd = rd;
        self.rs1 = rs1;
        self.funct3 = 0b000;
        self.imm = imm;
        self
    }

    pub fn lui(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_LUI;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn auipc(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_AUIPC;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn build(self) -> u32 {
        let imm = self.imm as u32;
        let rd = (self.rd & 0x1F) << 7;
        let f3 = (self.funct3 & 0x7) << 12;
        let rs1 = (self.rs1 & 0x1F) << 15;
        let rs2 = (self.rs2 & 0x1F) << 20;
        let op = self.opcode & 0x7F;
        match self.opcode {
            OP_REG => ((self.funct7 & 0x7F) << 25) | rs2 | rs1 | f3 | rd | op,
            OP_STORE => {
                ((imm >> 5) & 0x7F) << 25 | rs2 | rs1 | f3 | (imm & 0x1F) << 7 | op
            }
            OP_BRANCH => {
                ((imm >> 12) & 1) << 31
                    | ((imm >> 5) & 0x3F) << 25
                    | rs2
                    | rs1
                    | f3
                    | ((imm >> 1) & 0xF) << 8
                    | ((imm >> 11) & 1) << 7
                    | op
            }
            OP_LUI | OP_AUIPC => (imm & 0xFFFFF) << 12 | rd | op,
            OP_JAL => {
                ((imm >> 20) & 1) << 31
                    | ((imm >> 1) & 0x3FF) << 21
                    | ((imm >> 11) & 1) << 20
                    | ((imm >> 12) & 0xFF) << 12
                    | rd
                    | op
            }
            _ => (imm & 0xFFF) << 20 | rs1 | f3 | rd | op,
        }
    }
}
