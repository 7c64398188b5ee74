//! Datapath model.
//!
//! The [`Model`] owns every net, register, combinational unit, and register file
//! of one datapath. Components refer to each other only through the handles it
//! issues. It provides:
//! 1. **Construction:** Inputs, constants, registers, and units, each with a name and width.
//! 2. **Wiring:** Width-checked connections between producers and consumer ports.
//! 3. **Evaluation:** Single-unit `update` or whole-graph `propagate` in dependency order.
//! 4. **Clocking:** The two-phase `clock_all`, `reset_all`, and `step`.
//!
//! # Examples
//!
//! ```
//! use rvsim_datapath::{Model, ModelConfig};
//!
//! let mut m = Model::new(ModelConfig::default());
//! let a = m.register("a", 8).unwrap();
//! let b = m.register("b", 8).unwrap();
//! let one = m.constant("one", 1, 8).unwrap();
//! let inc = m.alu("inc", 8).unwrap();
//! let add = m.constant("op_add", 0, 5).unwrap();
//!
//! // a <- a + 1, b <- a
//! let a_out = m.register_output(a).unwrap();
//! m.set_operands(inc, a_out, one).unwrap();
//! m.set_control(inc, add).unwrap();
//! m.connect(a, m.output(inc).unwrap()).unwrap();
//! m.connect(b, a_out).unwrap();
//!
//! m.step().unwrap();
//! m.step().unwrap();
//! assert_eq!(m.current(a).unwrap().as_u64(), 2);
//! assert_eq!(m.current(b).unwrap().as_u64(), 1);
//! ```

mod nets;
mod schedule;

use std::fmt;

use tracing::{debug, trace, warn};

pub use self::nets::{Driver, Net, Nets};
pub use self::schedule::Node;

use crate::common::arena::{Arena, ArenaId, fresh_owner};
use crate::common::constants::{
    ALU_CTRL_WIDTH, ENABLE_WIDTH, INSTR_CLASS_WIDTH, INSTRUCTION_WIDTH, REG_INDEX_WIDTH, XLEN,
};
use crate::common::error::{Result, SimError};
use crate::common::signal::check_width;
use crate::common::{RegFileId, RegId, RegisterFile, RegisterFilePorts, Signal, SignalId, UnitId};
use crate::config::ModelConfig;
use crate::core::clock::{Clocked, Register};
use crate::core::units::alu::Alu;
use crate::core::units::decoder::InstructionDecoder;
use crate::core::units::gate::{Gate, GateOp};
use crate::core::units::immediate::ImmediateDecoder;
use crate::core::units::mux::{Mux, select_width};
use crate::core::units::{Combinational, Ports};

/// Widths of one unit's ports, used when allocating it.
struct Shape {
    count: usize,
    input_width: u32,
    control_width: Option<u32>,
    output_width: u32,
}

/// A complete datapath: nets, registers, units, and register files.
#[derive(Debug)]
pub struct Model {
    config: ModelConfig,
    nets: Nets,
    registers: Arena<RegId, Register>,
    units: Arena<UnitId, Box<dyn Combinational>>,
    register_files: Arena<RegFileId, RegisterFile>,
    order: Option<Vec<Node>>,
    cycle: u64,
    poisoned: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

impl Model {
    /// Creates an empty model.
    pub fn new(config: ModelConfig) -> Self {
        let owner = fresh_owner();
        debug!(
            model = owner,
            semantics = ?config.semantics,
            max_nets = config.max_nets,
            "creating datapath model"
        );
        Self {
            nets: Nets::new(owner, config.max_nets),
            config,
            registers: Arena::new(owner),
            units: Arena::new(owner),
            register_files: Arena::new(owner),
            order: None,
            cycle: 0,
            poisoned: false,
        }
    }

    /// The configuration the model was built with.
    pub const fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Every net of the model.
    pub const fn nets(&self) -> &Nets {
        &self.nets
    }

    /// Number of clock edges since construction or the last [`Model::reset_all`].
    pub const fn cycle_count(&self) -> u64 {
        self.cycle
    }

    /// `true` after a failed update, propagate, or clock, until [`Model::reset_all`].
    pub const fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Allocates an externally driven net, initially zero.
    ///
    /// # Errors
    ///
    /// Fails for an invalid width or when the net limit is reached.
    pub fn input(&mut self, name: impl Into<String>, width: u32) -> Result<SignalId> {
        let zero = Signal::new(width)?;
        self.nets.alloc(name, zero, Driver::Input)
    }

    /// Allocates a net with a fixed value, truncated to `width` bits.
    ///
    /// # Errors
    ///
    /// Fails for an invalid width or when the net limit is reached.
    pub fn constant(&mut self, name: impl Into<String>, value: u64, width: u32) -> Result<SignalId> {
        let value = Signal::from_u64(value, width)?;
        self.nets.alloc(name, value, Driver::Constant)
    }

    /// Sets the value of an input net, truncated to its width.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::NotAnInput`] if the net is driven by a component
    /// or is a constant.
    pub fn drive(&mut self, signal: SignalId, value: u64) -> Result<()> {
        let net = self.nets.net(signal)?;
        if net.driver() != Driver::Input {
            return Err(SimError::NotAnInput {
                net: net.name().to_owned(),
                driver: net.driver().to_string(),
            });
        }
        self.nets.store(signal, value)
    }

    /// Current value of any net.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownSignal`] for a handle from another model.
    pub fn value(&self, signal: SignalId) -> Result<Signal> {
        self.nets.value(signal)
    }

    fn expect_width(&self, component: &str, port: &str, source: SignalId, expected: u32) -> Result<()> {
        let actual = self.nets.width(source)?;
        if actual == expected {
            Ok(())
        } else {
            Err(SimError::WidthMismatch {
                component: component.to_owned(),
                port: port.to_owned(),
                expected,
                actual,
            })
        }
    }

    /// Creates a register of the given width, reset to zero.
    ///
    /// Registers are clocked in creation order.
    ///
    /// # Errors
    ///
    /// Fails for an invalid width or when the net limit is reached.
    pub fn register(&mut self, name: impl Into<String>, width: u32) -> Result<RegId> {
        let name = name.into();
        let zero = Signal::new(width)?;
        let output = self
            .nets
            .alloc(name.clone(), zero, Driver::Register(self.registers.next_id()))?;
        Ok(self.registers.alloc(Register::new(name, output, zero)))
    }

    fn reg(&self, id: RegId) -> Result<&Register> {
        self.registers
            .get(id)
            .ok_or(SimError::UnknownComponent(id.as_raw()))
    }

    /// Sets the producer a register latches. Any net may be used, including the
    /// output of another register.
    ///
    /// # Arguments
    ///
    /// * `reg`    - The register to wire.
    /// * `source` - Net sampled on every save pass; must match the register's width.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::WidthMismatch`] if the widths differ and with
    /// [`SimError::UnknownSignal`] or [`SimError::UnknownComponent`] for a handle
    /// issued by another model.
    pub fn connect(&mut self, reg: RegId, source: SignalId) -> Result<()> {
        let r = self.reg(reg)?;
        self.expect_width(r.name(), "input", source, r.width())?;
        if let Some(r) = self.registers.get_mut(reg) {
            r.connect(source);
        }
        Ok(())
    }

    /// Net carrying the register's current value.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownComponent`] for a foreign handle.
    pub fn register_output(&self, reg: RegId) -> Result<SignalId> {
        self.reg(reg).map(Register::output)
    }

    /// Current value of a register.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownComponent`] for a foreign handle.
    pub fn current(&self, reg: RegId) -> Result<Signal> {
        self.nets.value(self.reg(reg)?.output())
    }

    /// Value captured by the most recent save pass.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownComponent`] for a foreign handle.
    pub fn pending(&self, reg: RegId) -> Result<Signal> {
        self.reg(reg).map(Register::pending)
    }

    fn add_unit(
        &mut self,
        name: String,
        shape: Shape,
        build: impl FnOnce(Ports) -> Box<dyn Combinational>,
    ) -> Result<UnitId> {
        if shape.count == 0 {
            return Err(SimError::InvalidPortCount {
                component: name,
                count: shape.count,
            });
        }
        let input_width = check_width(shape.input_width)?;
        let zero = Signal::new(shape.output_width)?;
        let output = self
            .nets
            .alloc(name.clone(), zero, Driver::Unit(self.units.next_id()))?;
        let ports = Ports::new(name, shape.count, input_width, shape.control_width, output);
        self.order = None;
        Ok(self.units.alloc(build(ports)))
    }

    /// Creates a multiplexer with `inputs` inputs of `width` bits.
    ///
    /// The select control is `max(1, ceil(log2(inputs)))` bits wide.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::InvalidPortCount`] for zero inputs, or for an invalid width.
    pub fn mux(&mut self, name: impl Into<String>, inputs: usize, width: u32) -> Result<UnitId> {
        let shape = Shape {
            count: inputs,
            input_width: width,
            control_width: Some(select_width(inputs)),
            output_width: width,
        };
        self.add_unit(name.into(), shape, |p| Box::new(Mux::new(p)))
    }

    /// Creates a gate folding `op` over `inputs` inputs of `width` bits.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::InvalidPortCount`] for zero inputs, or for an invalid width.
    pub fn gate(
        &mut self,
        name: impl Into<String>,
        op: GateOp,
        inputs: usize,
        width: u32,
    ) -> Result<UnitId> {
        let semantics = self.config.semantics;
        let shape = Shape {
            count: inputs,
            input_width: width,
            control_width: None,
            output_width: width,
        };
        self.add_unit(name.into(), shape, |p| {
            Box::new(Gate::new(p, op, semantics))
        })
    }

    /// Creates an ALU with two `width`-bit operands and a 5-bit opcode control.
    ///
    /// # Errors
    ///
    /// Fails for an invalid width or when the net limit is reached.
    pub fn alu(&mut self, name: impl Into<String>, width: u32) -> Result<UnitId> {
        let semantics = self.config.semantics;
        let shape = Shape {
            count: 2,
            input_width: width,
            control_width: Some(ALU_CTRL_WIDTH),
            output_width: width,
        };
        self.add_unit(name.into(), shape, |p| Box::new(Alu::new(p, semantics)))
    }

    /// Creates a decoder from a 32-bit instruction word to its class code.
    ///
    /// # Errors
    ///
    /// Fails when the net limit is reached.
    pub fn instruction_decoder(&mut self, name: impl Into<String>) -> Result<UnitId> {
        let shape = Shape {
            count: 1,
            input_width: INSTRUCTION_WIDTH,
            control_width: None,
            output_width: INSTR_CLASS_WIDTH,
        };
        self.add_unit(name.into(), shape, |p| {
            Box::new(InstructionDecoder::new(p))
        })
    }

    /// Creates an immediate decoder: instruction word on input 0, class on the control.
    ///
    /// # Errors
    ///
    /// Fails when the net limit is reached.
    pub fn immediate_decoder(&mut self, name: impl Into<String>) -> Result<UnitId> {
        let shape = Shape {
            count: 1,
            input_width: INSTRUCTION_WIDTH,
            control_width: Some(INSTR_CLASS_WIDTH),
            output_width: XLEN,
        };
        self.add_unit(name.into(), shape, |p| Box::new(ImmediateDecoder::new(p)))
    }

    fn unit(&self, id: UnitId) -> Result<&dyn Combinational> {
        self.units
            .get(id)
            .map(|u| &**u)
            .ok_or(SimError::UnknownComponent(id.as_raw()))
    }

    fn unit_ports_mut(&mut self, id: UnitId) -> Result<&mut Ports> {
        self.units
            .get_mut(id)
            .map(|u| u.ports_mut())
            .ok_or(SimError::UnknownComponent(id.as_raw()))
    }

    /// Connects input `index` of a unit.
    ///
    /// # Arguments
    ///
    /// * `unit`   - The consuming unit.
    /// * `index`  - Input position, `0..count`.
    /// * `source` - Producer net; must be as wide as the unit's inputs.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::PortOutOfRange`] for a bad index and
    /// [`SimError::WidthMismatch`] for a producer of the wrong width. Handles from
    /// another model are rejected. The unit is left unchanged on failure.
    pub fn set_input(&mut self, unit: UnitId, index: usize, source: SignalId) -> Result<()> {
        let ports = self.unit(unit)?.ports();
        let component = ports.name().to_owned();
        let (count, width) = (ports.count(), ports.input_width());
        let out_of_range = || SimError::PortOutOfRange {
            component: component.clone(),
            index,
            count,
        };
        if index >= count {
            return Err(out_of_range());
        }
        self.expect_width(&component, &format!("in{index}"), source, width)?;
        if !self.unit_ports_mut(unit)?.set_input(index, source) {
            return Err(out_of_range());
        }
        self.order = None;
        Ok(())
    }

    /// Connects both operands of a two-input unit such as the ALU.
    ///
    /// # Errors
    ///
    /// As for [`Model::set_input`].
    pub fn set_operands(&mut self, unit: UnitId, a: SignalId, b: SignalId) -> Result<()> {
        self.set_input(unit, 0, a)?;
        self.set_input(unit, 1, b)
    }

    /// Connects the control port of a unit.
    ///
    /// # Arguments
    ///
    /// * `unit`   - The consuming unit.
    /// * `source` - Control net: the select for a mux, the opcode for an ALU,
    ///   the instruction class for an immediate decoder.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::NoControlPort`] for gates and instruction decoders,
    /// and with [`SimError::WidthMismatch`] for a producer of the wrong width.
    pub fn set_control(&mut self, unit: UnitId, source: SignalId) -> Result<()> {
        let ports = self.unit(unit)?.ports();
        let Some(width) = ports.control_width() else {
            return Err(SimError::NoControlPort {
                component: ports.name().to_owned(),
            });
        };
        self.expect_width(ports.name(), "control", source, width)?;
        self.unit_ports_mut(unit)?.set_control(source);
        self.order = None;
        Ok(())
    }

    /// Net driven by a unit.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownComponent`] for a foreign handle.
    pub fn output(&self, unit: UnitId) -> Result<SignalId> {
        self.unit(unit).map(|u| u.output())
    }

    /// `true` once every port of the unit is wired.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownComponent`] for a foreign handle.
    pub fn initialized(&self, unit: UnitId) -> Result<bool> {
        self.unit(unit).map(|u| u.initialized())
    }

    /// Recomputes one unit's output from the current input values.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::ModelPoisoned`] after an earlier failure, with
    /// [`SimError::Unconnected`] for unset ports, and with [`SimError::Unit`]
    /// when the unit's operation fails. Any failure poisons the model.
    pub fn update(&mut self, unit: UnitId) -> Result<()> {
        self.ensure_live()?;
        let _ = self.unit(unit)?;
        let result = self.update_node(Node::Unit(unit));
        self.guard(result)
    }

    /// Creates a 32-entry register file with two 32-bit read ports.
    ///
    /// # Errors
    ///
    /// Fails when the net limit is reached.
    pub fn register_file(&mut self, name: impl Into<String>) -> Result<RegFileId> {
        let name = name.into();
        let id = self.register_files.next_id();
        let zero = Signal::new(XLEN)?;
        let rd1 = self
            .nets
            .alloc(format!("{name}.read_data1"), zero, Driver::RegisterFile(id))?;
        let rd2 = self
            .nets
            .alloc(format!("{name}.read_data2"), zero, Driver::RegisterFile(id))?;
        self.order = None;
        Ok(self.register_files.alloc(RegisterFile::new(name, rd1, rd2)))
    }

    /// Borrows a register file.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownComponent`] for a foreign handle.
    pub fn regfile(&self, id: RegFileId) -> Result<&RegisterFile> {
        self.register_files
            .get(id)
            .ok_or(SimError::UnknownComponent(id.as_raw()))
    }

    fn regfile_mut(&mut self, id: RegFileId) -> Result<&mut RegisterFile> {
        self.register_files
            .get_mut(id)
            .ok_or(SimError::UnknownComponent(id.as_raw()))
    }

    /// Wires the instruction, destination index, write data, and write enable.
    ///
    /// # Arguments
    ///
    /// * `id`    - The register file.
    /// * `ports` - Producer nets; read indices come from `ports.instr` bits 19:15
    ///   and 24:20.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::WidthMismatch`] unless the producers are 32, 5, 32,
    /// and 1 bits wide respectively.
    pub fn set_register_file_inputs(&mut self, id: RegFileId, ports: RegisterFilePorts) -> Result<()> {
        let rf = self.regfile(id)?;
        let name = rf.name();
        self.expect_width(name, "instr", ports.instr, INSTRUCTION_WIDTH)?;
        self.expect_width(name, "write_reg", ports.write_reg, REG_INDEX_WIDTH)?;
        self.expect_width(name, "write_data", ports.write_data, XLEN)?;
        self.expect_width(name, "reg_write", ports.reg_write, ENABLE_WIDTH)?;
        self.regfile_mut(id)?.set_inputs(ports);
        self.order = None;
        Ok(())
    }

    /// Drives both read ports from the current instruction word.
    ///
    /// # Errors
    ///
    /// As for [`Model::update`].
    pub fn update_register_file(&mut self, id: RegFileId) -> Result<()> {
        self.ensure_live()?;
        let _ = self.regfile(id)?;
        let result = self.update_node(Node::RegisterFile(id));
        self.guard(result)
    }

    /// Performs a register-file write immediately, outside the model clock.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::Unconnected`] if the inputs are unset.
    pub fn clock_register_file(&mut self, id: RegFileId) -> Result<()> {
        let Self {
            nets,
            register_files,
            ..
        } = self;
        register_files
            .get_mut(id)
            .ok_or(SimError::UnknownComponent(id.as_raw()))?
            .clock(nets)
    }

    /// Zeroes every entry of a register file.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownComponent`] for a foreign handle.
    pub fn clear_register_file(&mut self, id: RegFileId) -> Result<()> {
        self.regfile_mut(id)?.clear();
        Ok(())
    }

    fn ensure_live(&self) -> Result<()> {
        if self.poisoned {
            Err(SimError::ModelPoisoned)
        } else {
            Ok(())
        }
    }

    fn guard(&mut self, result: Result<()>) -> Result<()> {
        if let Err(e) = &result {
            self.poisoned = true;
            warn!(error = %e, "datapath model poisoned");
        }
        result
    }

    fn update_node(&mut self, node: Node) -> Result<()> {
        let (name, output) = match node {
            Node::Unit(id) => {
                let unit = self
                    .units
                    .get(id)
                    .ok_or(SimError::UnknownComponent(id.as_raw()))?;
                unit.update(&mut self.nets)?;
                (unit.name(), unit.output())
            }
            Node::RegisterFile(id) => {
                let rf = self
                    .register_files
                    .get(id)
                    .ok_or(SimError::UnknownComponent(id.as_raw()))?;
                rf.update(&mut self.nets)?;
                (rf.name(), rf.read_data1())
            }
        };
        if self.config.trace_updates {
            trace!(component = name, value = %self.nets.value(output)?, "update");
        }
        Ok(())
    }

    fn sources(&self, node: Node) -> Vec<SignalId> {
        match node {
            Node::Unit(id) => self
                .units
                .get(id)
                .map(|u| u.ports().sources().collect())
                .unwrap_or_default(),
            Node::RegisterFile(id) => self
                .register_files
                .get(id)
                .and_then(RegisterFile::inputs)
                .map(|p| vec![p.instr])
                .unwrap_or_default(),
        }
    }

    fn node_name(&self, node: Node) -> String {
        match node {
            Node::Unit(id) => self.units.get(id).map(|u| u.name().to_owned()),
            Node::RegisterFile(id) => self.register_files.get(id).map(|r| r.name().to_owned()),
        }
        .unwrap_or_default()
    }

    /// Computes (or returns the cached) combinational evaluation order.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::CombinationalLoop`] if the combinational graph has a cycle.
    pub fn schedule(&mut self) -> Result<Vec<Node>> {
        if let Some(order) = &self.order {
            return Ok(order.clone());
        }
        let nodes: Vec<Node> = self
            .units
            .iter()
            .map(|(id, _)| Node::Unit(id))
            .chain(self.register_files.iter().map(|(id, _)| Node::RegisterFile(id)))
            .collect();
        let mut edges = Vec::new();
        for &node in &nodes {
            for source in self.sources(node) {
                let from = match self.nets.net(source)?.driver() {
                    Driver::Unit(u) => Node::Unit(u),
                    Driver::RegisterFile(r) => Node::RegisterFile(r),
                    Driver::Input | Driver::Constant | Driver::Register(_) => continue,
                };
                edges.push((from, node));
            }
        }
        let order = schedule::topo(&nodes, &edges).map_err(|stuck| SimError::CombinationalLoop {
            component: self.node_name(stuck),
        })?;
        debug!(nodes = order.len(), "computed combinational order");
        self.order = Some(order.clone());
        Ok(order)
    }

    /// Updates every combinational unit and register-file read port in dependency order.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::CombinationalLoop`] for a cyclic graph and otherwise
    /// as for [`Model::update`]. Any failure poisons the model.
    pub fn propagate(&mut self) -> Result<()> {
        self.ensure_live()?;
        let result = self.schedule().and_then(|order| {
            order
                .into_iter()
                .try_for_each(|node| self.update_node(node))
        });
        self.guard(result)
    }

    /// Advances every register and register file through one clock edge.
    ///
    /// All elements save before any element commits.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::Unconnected`] if any register has no producer or a
    /// register file is unwired. Any failure poisons the model.
    pub fn clock_all(&mut self) -> Result<()> {
        self.ensure_live()?;
        let result = self.clock_edge();
        self.guard(result)
    }

    fn clock_edge(&mut self) -> Result<()> {
        let trace_updates = self.config.trace_updates;
        let Self {
            nets,
            registers,
            register_files,
            ..
        } = self;
        for reg in registers.values_mut() {
            reg.save(nets)?;
        }
        for rf in register_files.values_mut() {
            rf.save(nets)?;
        }
        for reg in registers.values_mut() {
            reg.commit(nets)?;
            if trace_updates {
                trace!(register = reg.name(), value = %reg.pending(), "commit");
            }
        }
        for rf in register_files.values_mut() {
            rf.commit(nets)?;
        }
        self.cycle += 1;
        trace!(cycle = self.cycle, "clock edge");
        Ok(())
    }

    /// Zeroes every register and register file and clears the poisoned state.
    ///
    /// Wiring is left intact; unconnected registers are reset too.
    ///
    /// # Errors
    ///
    /// Fails only if the model's own nets are inconsistent.
    pub fn reset_all(&mut self) -> Result<()> {
        let Self {
            nets,
            registers,
            register_files,
            ..
        } = self;
        for reg in registers.values_mut() {
            reg.reset(nets)?;
        }
        for rf in register_files.values_mut() {
            rf.reset(nets)?;
        }
        self.cycle = 0;
        self.poisoned = false;
        debug!(
            registers = self.registers.len(),
            register_files = self.register_files.len(),
            "reset all"
        );
        Ok(())
    }

    /// One full cycle: [`Model::propagate`] then [`Model::clock_all`].
    ///
    /// # Errors
    ///
    /// As for the two operations.
    pub fn step(&mut self) -> Result<()> {
        self.propagate()?;
        self.clock_all()
    }
}

impl fmt::Display for Model {
    /// Dumps every net and register file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cycle {}", self.cycle)?;
        for (id, net) in self.nets.iter() {
            writeln!(f, "  {id} {:<24} {} <- {}", net.name(), net.value(), net.driver())?;
        }
        for (_, rf) in self.register_files.iter() {
            write!(f, "{rf}")?;
        }
        Ok(())
    }
}
