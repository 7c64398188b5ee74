//! Gate tests.
//!
//! Reference gates fold bit 0 of each input starting from `true`; architectural
//! gates fold whole values starting from the operator's identity.

use rstest::rstest;
use rvsim_datapath::{GateOp, SimError};

use crate::common::harness::TestContext;

fn run_gate(mut ctx: TestContext, op: GateOp, width: u32, inputs: &[u64]) -> u64 {
    let gate = ctx.model.gate("g", op, inputs.len(), width).unwrap();
    for (i, &v) in inputs.iter().enumerate() {
        let k = ctx.constant(&format!("k{i}"), v, width);
        ctx.model.set_input(gate, i, k).unwrap();
    }
    ctx.model.update(gate).unwrap();
    let out = ctx.model.output(gate).unwrap();
    ctx.value(out)
}

#[rstest]
#[case(GateOp::And, &[1, 1], 1)]
#[case(GateOp::And, &[1, 0], 0)]
#[case(GateOp::And, &[0b10, 0b11], 0)]
#[case(GateOp::Or, &[0, 0], 1)]
#[case(GateOp::Xor, &[0, 0], 1)]
#[case(GateOp::Xor, &[1, 0], 0)]
#[case(GateOp::Xor, &[1, 1, 1], 0)]
fn reference_folds_bit_zero_from_true(#[case] op: GateOp, #[case] inputs: &[u64], #[case] expected: u64) {
    assert_eq!(run_gate(TestContext::new(), op, 4, inputs), expected);
}

#[rstest]
#[case(GateOp::And, &[0b1100, 0b1010], 0b1000)]
#[case(GateOp::Or, &[0b1100, 0b1010], 0b1110)]
#[case(GateOp::Xor, &[0b1100, 0b1010], 0b0110)]
#[case(GateOp::Or, &[0, 0], 0)]
#[case(GateOp::Xor, &[0b1111, 0b1111, 0b0001], 0b0001)]
fn architectural_folds_full_width(#[case] op: GateOp, #[case] inputs: &[u64], #[case] expected: u64) {
    assert_eq!(run_gate(TestContext::architectural(), op, 4, inputs), expected);
}

#[test]
fn gate_has_no_control_port() {
    let mut ctx = TestContext::new();
    let gate = ctx.model.gate("g", GateOp::And, 2, 1).unwrap();
    let c = ctx.input("c", 1);
    let err = ctx.model.set_control(gate, c).unwrap_err();
    assert!(matches!(err, SimError::NoControlPort { .. }));
}

#[test]
fn unwired_gate_input_fails() {
    let mut ctx = TestContext::new();
    let gate = ctx.model.gate("g", GateOp::Or, 2, 1).unwrap();
    let err = ctx.model.update(gate).unwrap_err();
    assert!(matches!(err, SimError::Unconnected { .. }));
}
