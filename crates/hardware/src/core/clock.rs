//! Two-phase clock protocol.
//!
//! Every clocked element of a model advances in two passes:
//! 1. **Save:** Each element copies the value it will latch into a pending slot.
//! 2. **Commit:** Each element makes its pending value current.
//!
//! Because no current value changes until every element has saved, a register
//! fed by another register observes the value from before the edge.

use crate::common::error::{Result, SimError};
use crate::common::{Signal, SignalId};
use crate::core::model::Nets;

/// An element that participates in the model clock.
pub trait Clocked {
    /// Captures the next value. Must not change any net.
    ///
    /// # Errors
    ///
    /// Fails if a required input is unconnected or refers to an unknown net.
    fn save(&mut self, nets: &Nets) -> Result<()>;

    /// Makes the captured value current.
    ///
    /// # Errors
    ///
    /// Fails only if the element's own output net is missing.
    fn commit(&mut self, nets: &mut Nets) -> Result<()>;

    /// Zeroes current and pending state regardless of wiring.
    ///
    /// # Errors
    ///
    /// Fails only if the element's own output net is missing.
    fn reset(&mut self, nets: &mut Nets) -> Result<()>;
}

/// A clocked register holding one signal.
///
/// The current value lives in the register's output net; the pending value is
/// private until the commit pass.
#[derive(Clone, Debug)]
pub struct Register {
    name: String,
    input: Option<SignalId>,
    output: SignalId,
    pending: Signal,
}

impl Register {
    /// Creates an unconnected register whose current value is `output`.
    pub fn new(name: impl Into<String>, output: SignalId, zero: Signal) -> Self {
        Self {
            name: name.into(),
            input: None,
            output,
            pending: zero.zeroed(),
        }
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Net holding the current value.
    pub const fn output(&self) -> SignalId {
        self.output
    }

    /// Producer latched on each clock edge, if connected.
    pub const fn input(&self) -> Option<SignalId> {
        self.input
    }

    /// Value captured by the last save pass.
    pub const fn pending(&self) -> Signal {
        self.pending
    }

    /// Width of the register.
    pub const fn width(&self) -> u32 {
        self.pending.width()
    }

    /// Sets the producer. Width checking is done by the model.
    pub const fn connect(&mut self, source: SignalId) {
        self.input = Some(source);
    }
}

impl Clocked for Register {
    fn save(&mut self, nets: &Nets) -> Result<()> {
        let source = self
            .input
            .ok_or_else(|| SimError::unconnected(&self.name, "input"))?;
        self.pending = nets.value(source)?;
        Ok(())
    }

    fn commit(&mut self, nets: &mut Nets) -> Result<()> {
        nets.store(self.output, self.pending.as_u64())
    }

    fn reset(&mut self, nets: &mut Nets) -> Result<()> {
        self.pending = self.pending.zeroed();
        nets.store(self.output, 0)
    }
}
