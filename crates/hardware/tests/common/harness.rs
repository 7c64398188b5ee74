use rvsim_datapath::{
    AluOp, Model, ModelConfig, RegFileId, RegisterFilePorts, Result, Semantics, SignalId, UnitId,
};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per process. Filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An ALU whose operands and opcode are driven inputs.
pub struct AluFixture {
    pub unit: UnitId,
    pub a: SignalId,
    pub b: SignalId,
    pub op: SignalId,
    pub out: SignalId,
}

/// A register file whose four inputs are driven inputs.
pub struct RegFileFixture {
    pub rf: RegFileId,
    pub instr: SignalId,
    pub write_reg: SignalId,
    pub write_data: SignalId,
    pub reg_write: SignalId,
    pub read_data1: SignalId,
    pub read_data2: SignalId,
}

pub struct TestContext {
    pub model: Model,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    /// A context whose model uses architectural semantics.
    pub fn architectural() -> Self {
        Self::with_config(ModelConfig::with_semantics(Semantics::Architectural))
    }

    pub fn with_config(config: ModelConfig) -> Self {
        init_tracing();
        Self {
            model: Model::new(config),
        }
    }

    pub fn input(&mut self, name: &str, width: u32) -> SignalId {
        self.model.input(name, width).unwrap()
    }

    pub fn constant(&mut self, name: &str, value: u64, width: u32) -> SignalId {
        self.model.constant(name, value, width).unwrap()
    }

    pub fn drive(&mut self, signal: SignalId, value: u64) {
        self.model.drive(signal, value).unwrap();
    }

    /// Unsigned view of a net.
    pub fn value(&self, signal: SignalId) -> u64 {
        self.model.value(signal).unwrap().as_u64()
    }

    pub fn alu_fixture(&mut self, width: u32) -> AluFixture {
        let unit = self.model.alu("alu", width).unwrap();
        let a = self.input("a", width);
        let b = self.input("b", width);
        let op = self.input("alu_op", 5);
        self.model.set_operands(unit, a, b).unwrap();
        self.model.set_control(unit, op).unwrap();
        let out = self.model.output(unit).unwrap();
        AluFixture {
            unit,
            a,
            b,
            op,
            out,
        }
    }

    /// Drives the fixture, updates the ALU, and returns the output bits.
    pub fn run_alu(&mut self, alu: &AluFixture, op: AluOp, a: u64, b: u64) -> Result<u64> {
        self.drive(alu.a, a);
        self.drive(alu.b, b);
        self.drive(alu.op, op.code());
        self.model.update(alu.unit)?;
        Ok(self.value(alu.out))
    }

    pub fn regfile_fixture(&mut self) -> RegFileFixture {
        let rf = self.model.register_file("regs").unwrap();
        let instr = self.input("instr", 32);
        let write_reg = self.input("write_reg", 5);
        let write_data = self.input("write_data", 32);
        let reg_write = self.input("reg_write", 1);
        self.model
            .set_register_file_inputs(
                rf,
                RegisterFilePorts {
                    instr,
                    write_reg,
                    write_data,
                    reg_write,
                },
            )
            .unwrap();
        let regs = self.model.regfile(rf).unwrap();
        RegFileFixture {
            rf,
            instr,
            write_reg,
            write_data,
            reg_write,
            read_data1: regs.read_data1(),
            read_data2: regs.read_data2(),
        }
    }
}
