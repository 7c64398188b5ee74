//! Immediate decoder.
//!
//! Reconstructs the architectural immediate of an instruction word. The
//! instruction class arrives on the control port, typically from an
//! [`InstructionDecoder`](crate::core::units::decoder::InstructionDecoder).

use crate::common::error::{Result, SimError, UnitFault};
use crate::core::model::Nets;
use crate::core::units::{Combinational, Ports};
use crate::isa::{RvInstr, decode_immediate};

/// Immediate decoder component.
///
/// Input 0 is the 32-bit instruction word, the control is the instruction class,
/// and the output is [`XLEN`](crate::common::XLEN) bits wide. Classes without an
/// immediate produce [`NO_IMMEDIATE`](crate::common::NO_IMMEDIATE).
#[derive(Clone, Debug)]
pub struct ImmediateDecoder {
    ports: Ports,
}

impl ImmediateDecoder {
    /// Wraps ports created for an immediate decoder.
    pub const fn new(ports: Ports) -> Self {
        Self { ports }
    }
}

impl Combinational for ImmediateDecoder {
    fn ports(&self) -> &Ports {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut Ports {
        &mut self.ports
    }

    fn evaluate(&self, nets: &Nets) -> Result<u64> {
        let code = nets.value(self.ports.control()?)?.as_u64();
        let class = RvInstr::from_code(code)
            .ok_or_else(|| SimError::unit(self.name(), UnitFault::InvalidInstrClass(code)))?;
        let inst = nets.value(self.ports.input(0)?)?.as_u32();
        Ok(u64::from(decode_immediate(class, inst)))
    }
}
