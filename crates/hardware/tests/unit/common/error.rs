use pretty_assertions::assert_eq;
use rvsim_datapath::{AluOp, SimError, UnitFault};

#[test]
fn unit_faults_render_with_component_name() {
    let cases = [
        (UnitFault::DivisionByZero, "alu: division by zero"),
        (UnitFault::InvalidOpcode(20), "alu: invalid ALU opcode 20"),
        (
            UnitFault::UnimplementedOpcode(AluOp::Eq),
            "alu: unimplemented ALU opcode EQ",
        ),
        (
            UnitFault::SelectOutOfRange {
                select: 3,
                count: 3,
            },
            "alu: select 3 out of range for 3 inputs",
        ),
    ];
    for (fault, text) in cases {
        assert_eq!(SimError::unit("alu", fault).to_string(), text);
    }
}

#[test]
fn unconnected_names_port() {
    let e = SimError::unconnected("wb_mux", "control");
    assert_eq!(e.to_string(), "wb_mux: port `control` is not connected");
    assert_eq!(e.fault(), None);
}

#[test]
fn fault_is_exposed_as_source() {
    use std::error::Error;
    let e = SimError::unit("alu", UnitFault::DivisionByZero);
    let source = e.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("division by zero"));
}
