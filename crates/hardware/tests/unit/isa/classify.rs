//! Instruction classification tests.

use rstest::rstest;
use rvsim_datapath::RvInstr;
use rvsim_datapath::isa::ImmediateFormat;

use crate::common::builder::instruction::InstructionBuilder;

#[rstest]
#[case(InstructionBuilder::new().add(3, 1, 2).build(), RvInstr::Add)]
#[case(InstructionBuilder::new().sub(3, 1, 2).build(), RvInstr::Sub)]
#[case(InstructionBuilder::new().sra(3, 1, 2).build(), RvInstr::Sra)]
#[case(InstructionBuilder::new().mul(3, 1, 2).build(), RvInstr::Mul)]
#[case(InstructionBuilder::new().addi(1, 0, -1).build(), RvInstr::Addi)]
#[case(InstructionBuilder::new().srai(1, 2, 3).build(), RvInstr::Srai)]
#[case(InstructionBuilder::new().lw(5, 2, 8).build(), RvInstr::Lw)]
#[case(InstructionBuilder::new().sw(2, 5, 8).build(), RvInstr::Sw)]
#[case(InstructionBuilder::new().beq(1, 2, 8).build(), RvInstr::Beq)]
#[case(InstructionBuilder::new().bne(1, 0, -8).build(), RvInstr::Bne)]
#[case(InstructionBuilder::new().jal(1, 2048).build(), RvInstr::Jal)]
#[case(InstructionBuilder::new().jalr(0, 1, 0).build(), RvInstr::Jalr)]
#[case(InstructionBuilder::new().lui(5, 0x12345).build(), RvInstr::Lui)]
#[case(InstructionBuilder::new().auipc(5, 1).build(), RvInstr::Auipc)]
#[case(0x0000_0073, RvInstr::Ecall)]
#[case(0x0010_0073, RvInstr::Ebreak)]
#[case(0x0FF0_000F, RvInstr::Fence)]
#[case(0x0000_0000, RvInstr::Invalid)]
#[case(0xFFFF_FFFF, RvInstr::Invalid)]
fn classifies_encodings(#[case] inst: u32, #[case] expected: RvInstr) {
    assert_eq!(RvInstr::classify(inst), expected);
}

#[test]
fn codes_fit_the_class_signal() {
    for (i, class) in RvInstr::ALL.iter().enumerate() {
        assert_eq!(class.code(), i as u64);
        assert_eq!(RvInstr::from_code(class.code()), Some(*class));
        assert!(class.code() < 1 << 6);
    }
    assert_eq!(RvInstr::from_code(RvInstr::ALL.len() as u64), None);
}

#[test]
fn formats_follow_the_opcode_family() {
    assert_eq!(RvInstr::Lui.immediate_format(), ImmediateFormat::U);
    assert_eq!(RvInstr::Jal.immediate_format(), ImmediateFormat::J);
    assert_eq!(RvInstr::Jalr.immediate_format(), ImmediateFormat::I);
    assert_eq!(RvInstr::Bgeu.immediate_format(), ImmediateFormat::B);
    assert_eq!(RvInstr::Sh.immediate_format(), ImmediateFormat::S);
    assert_eq!(RvInstr::Remu.immediate_format(), ImmediateFormat::None);
    assert!(!RvInstr::Ecall.has_immediate());
    assert_eq!(RvInstr::Sltiu.to_string(), "sltiu");
}
