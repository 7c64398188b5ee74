//! Combinational units.
//!
//! This module defines the contract shared by every combinational component and
//! the concrete units built on it: the multiplexer, the boolean gate, the ALU,
//! the instruction-class decoder, and the immediate decoder.
//!
//! A unit reads its inputs and control from the model's [`Nets`] and writes a
//! single output net. It holds no value of its own between updates.

use std::fmt;

use crate::common::error::{Result, SimError};
use crate::common::SignalId;
use crate::core::model::Nets;

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Instruction-class decoder.
pub mod decoder;

/// Boolean gates (AND, OR, XOR).
pub mod gate;

/// Immediate decoder.
pub mod immediate;

/// N-way multiplexer.
pub mod mux;

/// Input, control, and output wiring of one combinational unit.
#[derive(Clone, Debug)]
pub struct Ports {
    name: String,
    inputs: Vec<Option<SignalId>>,
    input_width: u32,
    control: Option<SignalId>,
    control_width: Option<u32>,
    output: SignalId,
}

impl Ports {
    /// Creates ports for `count` unset inputs of `input_width` bits.
    ///
    /// `control_width` is `None` for units without a control port.
    pub fn new(
        name: impl Into<String>,
        count: usize,
        input_width: u32,
        control_width: Option<u32>,
        output: SignalId,
    ) -> Self {
        Self {
            name: name.into(),
            inputs: vec![None; count],
            input_width,
            control: None,
            control_width,
            output,
        }
    }

    /// Name of the owning unit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of inputs.
    pub fn count(&self) -> usize {
        self.inputs.len()
    }

    /// Width every input must have.
    pub const fn input_width(&self) -> u32 {
        self.input_width
    }

    /// Width the control must have, or `None` if there is no control port.
    pub const fn control_width(&self) -> Option<u32> {
        self.control_width
    }

    /// The output net.
    pub const fn output(&self) -> SignalId {
        self.output
    }

    /// Connects input `index`. Returns `false`, leaving the ports untouched, if
    /// the index is out of range.
    pub fn set_input(&mut self, index: usize, source: SignalId) -> bool {
        match self.inputs.get_mut(index) {
            Some(slot) => {
                *slot = Some(source);
                true
            }
            None => false,
        }
    }

    /// Connects the control port.
    pub const fn set_control(&mut self, source: SignalId) {
        self.control = Some(source);
    }

    /// Handle wired to input `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::Unconnected`] if the input is unset or does not exist.
    pub fn input(&self, index: usize) -> Result<SignalId> {
        self.inputs
            .get(index)
            .copied()
            .flatten()
            .ok_or_else(|| SimError::unconnected(&self.name, format!("in{index}")))
    }

    /// Handle wired to the control port.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::Unconnected`] if the control is unset.
    pub fn control(&self) -> Result<SignalId> {
        self.control
            .ok_or_else(|| SimError::unconnected(&self.name, "control"))
    }

    /// `true` once every input, and the control if there is one, is wired.
    pub fn initialized(&self) -> bool {
        self.check().is_ok()
    }

    /// Reports the first unset port.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::Unconnected`] naming the port.
    pub fn check(&self) -> Result<()> {
        for index in 0..self.inputs.len() {
            let _ = self.input(index)?;
        }
        if self.control_width.is_some() {
            let _ = self.control()?;
        }
        Ok(())
    }

    /// Every wired source, control last.
    pub fn sources(&self) -> impl Iterator<Item = SignalId> + '_ {
        self.inputs.iter().flatten().copied().chain(self.control)
    }
}

/// The contract shared by all combinational units.
///
/// `update` recomputes the output from the current input values. It never
/// changes any state other than the unit's own output net.
pub trait Combinational: fmt::Debug + Send {
    /// The unit's wiring.
    fn ports(&self) -> &Ports;

    /// Mutable access to the unit's wiring.
    fn ports_mut(&mut self) -> &mut Ports;

    /// Computes the new output bits. Called only once every port is wired.
    ///
    /// # Errors
    ///
    /// Returns the unit's operation error, such as an invalid opcode or select.
    fn evaluate(&self, nets: &Nets) -> Result<u64>;

    /// Name of the unit.
    fn name(&self) -> &str {
        self.ports().name()
    }

    /// The output net.
    fn output(&self) -> SignalId {
        self.ports().output()
    }

    /// `true` once every port is wired.
    fn initialized(&self) -> bool {
        self.ports().initialized()
    }

    /// Recomputes the output.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::Unconnected`] if any port is unset, otherwise with
    /// whatever [`Combinational::evaluate`] reports. The output is left unchanged
    /// on failure.
    fn update(&self, nets: &mut Nets) -> Result<()> {
        self.ports().check()?;
        let bits = self.evaluate(nets)?;
        nets.store(self.output(), bits)
    }
}
