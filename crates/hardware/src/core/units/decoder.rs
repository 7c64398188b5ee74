//! Instruction-class decoder.

use crate::common::error::Result;
use crate::core::model::Nets;
use crate::core::units::{Combinational, Ports};
use crate::isa::RvInstr;

/// Classifies the instruction word on its single input.
///
/// The output carries [`RvInstr::code`] of the class; unknown encodings produce
/// [`RvInstr::Invalid`]. There is no control port.
#[derive(Clone, Debug)]
pub struct InstructionDecoder {
    ports: Ports,
}

impl InstructionDecoder {
    /// Wraps ports created for an instruction decoder.
    pub const fn new(ports: Ports) -> Self {
        Self { ports }
    }
}

impl Combinational for InstructionDecoder {
    fn ports(&self) -> &Ports {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut Ports {
        &mut self.ports
    }

    fn evaluate(&self, nets: &Nets) -> Result<u64> {
        let inst = nets.value(self.ports.input(0)?)?.as_u32();
        Ok(RvInstr::classify(inst).code())
    }
}
