//! Instruction-class and immediate decoder tests.

use rvsim_datapath::{NO_IMMEDIATE, RvInstr, SignalId, SimError, UnitFault};

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

/// Instruction input feeding a class decoder feeding an immediate decoder.
fn decode_chain(ctx: &mut TestContext) -> (SignalId, SignalId, SignalId) {
    let instr = ctx.input("instr", 32);
    let class = ctx.model.instruction_decoder("id").unwrap();
    let imm = ctx.model.immediate_decoder("imm").unwrap();
    ctx.model.set_input(class, 0, instr).unwrap();
    let class_out = ctx.model.output(class).unwrap();
    ctx.model.set_input(imm, 0, instr).unwrap();
    ctx.model.set_control(imm, class_out).unwrap();
    (instr, class_out, ctx.model.output(imm).unwrap())
}

#[test]
fn classifies_and_extracts_through_the_model() {
    let mut ctx = TestContext::new();
    let (instr, class, imm) = decode_chain(&mut ctx);

    ctx.drive(instr, InstructionBuilder::new().addi(1, 0, -1).build().into());
    ctx.model.propagate().unwrap();
    assert_eq!(ctx.value(class), RvInstr::Addi.code());
    assert_eq!(ctx.value(imm), 0xFFFF_FFFF);

    ctx.drive(instr, InstructionBuilder::new().sw(1, 2, -4).build().into());
    ctx.model.propagate().unwrap();
    assert_eq!(ctx.value(class), RvInstr::Sw.code());
    assert_eq!(ctx.value(imm), 0xFFFF_FFFC);
}

#[test]
fn register_format_yields_sentinel() {
    let mut ctx = TestContext::new();
    let (instr, class, imm) = decode_chain(&mut ctx);
    ctx.drive(instr, 0x0020_81B3);
    ctx.model.propagate().unwrap();
    assert_eq!(ctx.value(class), RvInstr::Add.code());
    assert_eq!(ctx.value(imm), u64::from(NO_IMMEDIATE));
}

#[test]
fn unknown_encoding_is_invalid_class() {
    let mut ctx = TestContext::new();
    let (instr, class, imm) = decode_chain(&mut ctx);
    ctx.drive(instr, 0xFFFF_FFFF);
    ctx.model.propagate().unwrap();
    assert_eq!(ctx.value(class), RvInstr::Invalid.code());
    assert_eq!(ctx.value(imm), u64::from(NO_IMMEDIATE));
}

#[test]
fn immediate_decoder_rejects_unknown_class() {
    let mut ctx = TestContext::new();
    let instr = ctx.input("instr", 32);
    let class = ctx.input("class", 6);
    let imm = ctx.model.immediate_decoder("imm").unwrap();
    ctx.model.set_input(imm, 0, instr).unwrap();
    ctx.model.set_control(imm, class).unwrap();
    ctx.drive(class, 63);
    let err = ctx.model.update(imm).unwrap_err();
    assert_eq!(err.fault(), Some(UnitFault::InvalidInstrClass(63)));
}

#[test]
fn instruction_decoder_has_no_control() {
    let mut ctx = TestContext::new();
    let id = ctx.model.instruction_decoder("id").unwrap();
    let c = ctx.input("c", 6);
    assert!(matches!(
        ctx.model.set_control(id, c),
        Err(SimError::NoControlPort { .. })
    ));
}

#[test]
fn decoders_require_full_width_instruction() {
    let mut ctx = TestContext::new();
    let id = ctx.model.instruction_decoder("id").unwrap();
    let narrow = ctx.input("narrow", 16);
    assert!(matches!(
        ctx.model.set_input(id, 0, narrow),
        Err(SimError::WidthMismatch { expected: 32, actual: 16, .. })
    ));
}
