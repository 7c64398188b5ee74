//! Register file behavior.

use pretty_assertions::assert_eq;
use rvsim_datapath::SimError;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

#[test]
fn x0_stays_zero_after_write() {
    let mut ctx = TestContext::new();
    let f = ctx.regfile_fixture();
    ctx.drive(f.write_reg, 0);
    ctx.drive(f.write_data, 0x1234_5678);
    ctx.drive(f.reg_write, 1);
    ctx.model.clock_register_file(f.rf).unwrap();

    let regs = ctx.model.regfile(f.rf).unwrap();
    assert_eq!(regs.read(0), 0);
    assert_eq!(regs.registers(), [0; 32]);
}

#[test]
fn write_is_visible_only_after_clock() {
    let mut ctx = TestContext::new();
    let f = ctx.regfile_fixture();
    // add x0, x5, x0: rs1 = x5
    ctx.drive(f.instr, u64::from(InstructionBuilder::new().add(0, 5, 0).build()));
    ctx.drive(f.write_reg, 5);
    ctx.drive(f.write_data, 0xDEAD_BEEF);
    ctx.drive(f.reg_write, 1);

    ctx.model.update_register_file(f.rf).unwrap();
    assert_eq!(ctx.value(f.read_data1), 0);

    ctx.model.clock_register_file(f.rf).unwrap();
    ctx.model.update_register_file(f.rf).unwrap();
    assert_eq!(ctx.value(f.read_data1), 0xDEAD_BEEF);
    assert_eq!(ctx.value(f.read_data2), 0);
}

#[test]
fn read_ports_follow_instruction_fields() {
    let mut ctx = TestContext::new();
    let f = ctx.regfile_fixture();
    ctx.drive(f.reg_write, 1);
    for (idx, value) in [(3, 33), (7, 77)] {
        ctx.drive(f.write_reg, idx);
        ctx.drive(f.write_data, value);
        ctx.model.clock_register_file(f.rf).unwrap();
    }
    ctx.drive(f.reg_write, 0);

    ctx.drive(f.instr, u64::from(InstructionBuilder::new().sub(1, 7, 3).build()));
    ctx.model.update_register_file(f.rf).unwrap();
    assert_eq!(ctx.value(f.read_data1), 77);
    assert_eq!(ctx.value(f.read_data2), 33);
}

#[test]
fn disabled_write_is_ignored() {
    let mut ctx = TestContext::new();
    let f = ctx.regfile_fixture();
    ctx.drive(f.write_reg, 9);
    ctx.drive(f.write_data, 99);
    ctx.drive(f.reg_write, 0);
    ctx.model.clock_register_file(f.rf).unwrap();
    assert_eq!(ctx.model.regfile(f.rf).unwrap().read(9), 0);
}

#[test]
fn model_clock_writes_in_commit_pass() {
    let mut ctx = TestContext::new();
    let f = ctx.regfile_fixture();
    ctx.drive(f.write_reg, 4);
    ctx.drive(f.write_data, 0x44);
    ctx.drive(f.reg_write, 1);
    ctx.model.clock_all().unwrap();
    assert_eq!(ctx.model.regfile(f.rf).unwrap().read(4), 0x44);
}

#[test]
fn clear_zeroes_entries() {
    let mut ctx = TestContext::new();
    let f = ctx.regfile_fixture();
    ctx.drive(f.write_reg, 2);
    ctx.drive(f.write_data, 2);
    ctx.drive(f.reg_write, 1);
    ctx.model.clock_register_file(f.rf).unwrap();
    ctx.model.clear_register_file(f.rf).unwrap();
    assert_eq!(ctx.model.regfile(f.rf).unwrap().registers(), [0; 32]);
}

#[test]
fn unwired_register_file_fails_update() {
    let mut ctx = TestContext::new();
    let rf = ctx.model.register_file("bare").unwrap();
    let err = ctx.model.update_register_file(rf).unwrap_err();
    assert!(matches!(err, SimError::Unconnected { .. }));
}

#[test]
fn inputs_are_width_checked() {
    let mut ctx = TestContext::new();
    let rf = ctx.model.register_file("regs").unwrap();
    let instr = ctx.input("instr", 32);
    let wide_index = ctx.input("write_reg", 6);
    let data = ctx.input("data", 32);
    let we = ctx.input("we", 1);
    let err = ctx
        .model
        .set_register_file_inputs(
            rf,
            rvsim_datapath::RegisterFilePorts {
                instr,
                write_reg: wide_index,
                write_data: data,
                reg_write: we,
            },
        )
        .unwrap_err();
    assert!(
        matches!(err, SimError::WidthMismatch { ref port, expected: 5, actual: 6, .. } if port == "write_reg")
    );
}

#[test]
fn dump_lists_every_register() {
    let mut ctx = TestContext::new();
    let f = ctx.regfile_fixture();
    ctx.drive(f.write_reg, 31);
    ctx.drive(f.write_data, 0xFFFF_FFFF);
    ctx.drive(f.reg_write, 1);
    ctx.model.clock_register_file(f.rf).unwrap();
    let dump = ctx.model.regfile(f.rf).unwrap().to_string();
    assert!(dump.starts_with("regs:\n"));
    assert!(dump.contains("x31=0xffffffff"));
    assert_eq!(dump.lines().count(), 17);
}

#[test]
fn reset_all_zeroes_entries_and_read_ports() {
    let mut ctx = TestContext::new();
    let f = ctx.regfile_fixture();
    ctx.drive(f.reg_write, 1);
    for (idx, value) in [(4, 0x44), (9, 0x99)] {
        ctx.drive(f.write_reg, idx);
        ctx.drive(f.write_data, value);
        ctx.model.clock_all().unwrap();
    }
    ctx.drive(f.instr, u64::from(InstructionBuilder::new().add(1, 4, 9).build()));
    ctx.model.propagate().unwrap();
    assert_eq!(ctx.value(f.read_data1), 0x44);
    assert_eq!(ctx.value(f.read_data2), 0x99);

    ctx.model.reset_all().unwrap();
    let regs = ctx.model.regfile(f.rf).unwrap();
    assert_eq!(regs.registers(), [0; 32]);
    assert_eq!(ctx.value(f.read_data1), 0);
    assert_eq!(ctx.value(f.read_data2), 0);
    assert_eq!(ctx.model.cycle_count(), 0);

    // Entries stay zero on later edges.
    ctx.drive(f.reg_write, 0);
    ctx.model.clock_all().unwrap();
    ctx.model.propagate().unwrap();
    assert_eq!(ctx.value(f.read_data1), 0);
}
