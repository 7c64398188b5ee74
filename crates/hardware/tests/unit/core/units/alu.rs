//! ALU tests.
//!
//! Drives a 32-bit ALU through the model and checks each opcode's result.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvsim_datapath::{AluOp, UnitFault};

use crate::common::harness::TestContext;

#[rstest]
#[case::add(AluOp::Add, 5, 3, 8)]
#[case::add_wraps(AluOp::Add, 0xFFFF_FFFF, 1, 0)]
#[case::sub(AluOp::Sub, 5, 3, 2)]
#[case::sub_wraps(AluOp::Sub, 0, 1, 0xFFFF_FFFF)]
#[case::mul(AluOp::Mul, 6, 7, 42)]
#[case::mul_low_bits(AluOp::Mul, 0x1_0000, 0x1_0000, 0)]
#[case::div(AluOp::Div, 10, 3, 3)]
#[case::and(AluOp::And, 0xF0, 0x0F, 0)]
#[case::or(AluOp::Or, 0xF0, 0x0F, 0xFF)]
#[case::xor(AluOp::Xor, 0xFF, 0x0F, 0xF0)]
#[case::sl(AluOp::Sl, 1, 4, 16)]
#[case::lui(AluOp::Lui, 0xDEAD, 0x1234_5000, 0x1234_5000)]
#[case::lt_signed(AluOp::Lt, 0xFFFF_FFFF, 1, 1)]
#[case::lt_false(AluOp::Lt, 1, 0xFFFF_FFFF, 0)]
#[case::ltu(AluOp::Ltu, 0xFFFF_FFFF, 1, 0)]
#[case::ltu_true(AluOp::Ltu, 1, 0xFFFF_FFFF, 1)]
fn common_operations(#[case] op: AluOp, #[case] a: u64, #[case] b: u64, #[case] expected: u64) {
    let mut ctx = TestContext::new();
    let alu = ctx.alu_fixture(32);
    assert_eq!(ctx.run_alu(&alu, op, a, b).unwrap(), expected);

    let mut ctx = TestContext::architectural();
    let alu = ctx.alu_fixture(32);
    assert_eq!(ctx.run_alu(&alu, op, a, b).unwrap(), expected);
}

#[rstest]
#[case::srl_adds(AluOp::Srl, 0xFFFF_FFFF, 3, 2)]
#[case::sra_logical(AluOp::Sra, 0x8000_0000, 4, 0x0800_0000)]
#[case::sl_unmasked(AluOp::Sl, 1, 33, 0)]
fn reference_shifts(#[case] op: AluOp, #[case] a: u64, #[case] b: u64, #[case] expected: u64) {
    let mut ctx = TestContext::new();
    let alu = ctx.alu_fixture(32);
    assert_eq!(ctx.run_alu(&alu, op, a, b).unwrap(), expected);
}

#[rstest]
#[case::srl(AluOp::Srl, 0x8000_0000, 4, 0x0800_0000)]
#[case::sra(AluOp::Sra, 0x8000_0000, 4, 0xF800_0000)]
#[case::sl_masked(AluOp::Sl, 1, 33, 2)]
#[case::eq_true(AluOp::Eq, 7, 7, 1)]
#[case::eq_false(AluOp::Eq, 7, 8, 0)]
fn architectural_shifts_and_eq(
    #[case] op: AluOp,
    #[case] a: u64,
    #[case] b: u64,
    #[case] expected: u64,
) {
    let mut ctx = TestContext::architectural();
    let alu = ctx.alu_fixture(32);
    assert_eq!(ctx.run_alu(&alu, op, a, b).unwrap(), expected);
}

#[test]
fn division_by_zero_is_an_error() {
    let mut ctx = TestContext::new();
    let alu = ctx.alu_fixture(32);
    let err = ctx.run_alu(&alu, AluOp::Div, 10, 0).unwrap_err();
    assert_eq!(err.fault(), Some(UnitFault::DivisionByZero));
    assert!(ctx.model.is_poisoned());
}

#[test]
fn reference_eq_is_unimplemented() {
    let mut ctx = TestContext::new();
    let alu = ctx.alu_fixture(32);
    let err = ctx.run_alu(&alu, AluOp::Eq, 1, 1).unwrap_err();
    assert_eq!(err.fault(), Some(UnitFault::UnimplementedOpcode(AluOp::Eq)));
}

#[test]
fn unknown_opcode_is_rejected() {
    let mut ctx = TestContext::new();
    let alu = ctx.alu_fixture(32);
    ctx.drive(alu.op, 14);
    let err = ctx.model.update(alu.unit).unwrap_err();
    assert_eq!(err.fault(), Some(UnitFault::InvalidOpcode(14)));
    assert_eq!(err.to_string(), "alu: invalid ALU opcode 14");
}

#[test]
fn failed_update_leaves_output_unchanged() {
    let mut ctx = TestContext::new();
    let alu = ctx.alu_fixture(32);
    assert_eq!(ctx.run_alu(&alu, AluOp::Add, 2, 2).unwrap(), 4);
    assert!(ctx.run_alu(&alu, AluOp::Div, 1, 0).is_err());
    assert_eq!(ctx.value(alu.out), 4);
}

#[test]
fn narrow_alu_truncates() {
    let mut ctx = TestContext::new();
    let alu = ctx.alu_fixture(8);
    assert_eq!(ctx.run_alu(&alu, AluOp::Add, 0xFF, 0x02).unwrap(), 0x01);
    assert_eq!(ctx.run_alu(&alu, AluOp::Lt, 0x80, 0x01).unwrap(), 1);
}

#[test]
fn every_opcode_round_trips_through_its_code() {
    for op in AluOp::ALL {
        assert_eq!(AluOp::try_from(op.code()), Ok(op));
    }
    assert_eq!(AluOp::try_from(31), Err(UnitFault::InvalidOpcode(31)));
}
