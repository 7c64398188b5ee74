//! Register file.
//!
//! This module provides the [`RegisterFile`] used by the decode and write-back
//! stages of a datapath. It provides:
//! 1. **Storage:** 32 architectural registers with `x0` hardwired to zero.
//! 2. **Read Ports:** Two combinational outputs addressed by instruction bits 19:15 and 24:20.
//! 3. **Write Port:** A clocked write of `write_data` to `write_reg` when `reg_write` is set.
//! 4. **Observability:** A register snapshot and a formatted dump.

use std::fmt;

use tracing::{debug, trace};

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::{Result, SimError};
use crate::common::SignalId;
use crate::core::arch::gpr::Gpr;
use crate::core::clock::Clocked;
use crate::core::model::Nets;
use crate::isa::instruction::InstructionBits;

/// Producers feeding a register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterFilePorts {
    /// 32-bit instruction word; selects both read registers.
    pub instr: SignalId,
    /// 5-bit destination register index.
    pub write_reg: SignalId,
    /// 32-bit value to write.
    pub write_data: SignalId,
    /// 1-bit write enable.
    pub reg_write: SignalId,
}

/// 32-entry register file with two read ports and one write port.
///
/// Reads reflect the latest committed state once [`RegisterFile::update`] has
/// run. A write is captured in the save pass of the clock and becomes visible
/// in the commit pass; the read outputs are refreshed by the next update.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    name: String,
    gpr: Gpr,
    inputs: Option<RegisterFilePorts>,
    read_data1: SignalId,
    read_data2: SignalId,
    pending: Option<(usize, u32)>,
}

impl RegisterFile {
    /// Creates an unwired register file whose read ports drive the given nets.
    pub fn new(name: impl Into<String>, read_data1: SignalId, read_data2: SignalId) -> Self {
        Self {
            name: name.into(),
            gpr: Gpr::new(),
            inputs: None,
            read_data1,
            read_data2,
            pending: None,
        }
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wires all four inputs at once. Width checking is done by the model.
    pub const fn set_inputs(&mut self, ports: RegisterFilePorts) {
        self.inputs = Some(ports);
    }

    /// Current wiring, if set.
    pub const fn inputs(&self) -> Option<RegisterFilePorts> {
        self.inputs
    }

    /// Read port by number: `2` selects `rs2`, anything else `rs1`.
    pub const fn output(&self, port: u8) -> SignalId {
        if port == 2 {
            self.read_data2
        } else {
            self.read_data1
        }
    }

    /// Net driven by the `rs1` read port.
    pub const fn read_data1(&self) -> SignalId {
        self.read_data1
    }

    /// Net driven by the `rs2` read port.
    pub const fn read_data2(&self) -> SignalId {
        self.read_data2
    }

    fn wired(&self) -> Result<RegisterFilePorts> {
        self.inputs
            .ok_or_else(|| SimError::unconnected(&self.name, "inputs"))
    }

    /// Drives both read ports from the instruction word.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::Unconnected`] if the inputs are unset.
    pub fn update(&self, nets: &mut Nets) -> Result<()> {
        let ports = self.wired()?;
        let inst = nets.value(ports.instr)?.as_u32();
        nets.store(self.read_data1, u64::from(self.gpr.read(inst.rs1())))?;
        nets.store(self.read_data2, u64::from(self.gpr.read(inst.rs2())))
    }

    /// Performs the write immediately, outside the model clock.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::Unconnected`] if the inputs are unset.
    pub fn clock(&mut self, nets: &Nets) -> Result<()> {
        self.save(nets)?;
        self.apply();
        Ok(())
    }

    fn apply(&mut self) {
        if let Some((idx, value)) = self.pending.take() {
            if self.gpr.write(idx, value) {
                trace!(regfile = %self.name, idx, value, "register write");
            } else {
                debug!(regfile = %self.name, idx, "register write refused");
            }
        }
    }

    /// Zeroes every register. Pending writes and read outputs are untouched.
    pub fn clear(&mut self) {
        self.gpr.clear();
    }

    /// Reads register `idx` directly. `x0` and out-of-range indices read zero.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Copy of all registers, `x0` first.
    pub const fn registers(&self) -> [u32; NUM_REGISTERS] {
        self.gpr.snapshot()
    }
}

impl Clocked for RegisterFile {
    fn save(&mut self, nets: &Nets) -> Result<()> {
        let ports = self.wired()?;
        self.pending = None;
        if nets.value(ports.reg_write)?.as_bool() {
            let idx = nets.value(ports.write_reg)?.as_u64() as usize;
            let value = nets.value(ports.write_data)?.as_u32();
            if idx != 0 {
                self.pending = Some((idx, value));
            }
        }
        Ok(())
    }

    fn commit(&mut self, _nets: &mut Nets) -> Result<()> {
        self.apply();
        Ok(())
    }

    fn reset(&mut self, nets: &mut Nets) -> Result<()> {
        self.gpr.clear();
        self.pending = None;
        nets.store(self.read_data1, 0)?;
        nets.store(self.read_data2, 0)
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        write!(f, "{}", self.gpr)
    }
}
