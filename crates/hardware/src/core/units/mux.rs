//! N-way multiplexer.

use crate::common::error::{Result, SimError, UnitFault};
use crate::core::model::Nets;
use crate::core::units::{Combinational, Ports};

/// Width of the select signal for `count` inputs: `max(1, ceil(log2(count)))`.
pub const fn select_width(count: usize) -> u32 {
    if count <= 2 {
        1
    } else {
        usize::BITS - (count - 1).leading_zeros()
    }
}

/// Copies the input addressed by the control value to the output.
///
/// A control value with no matching input is an error, never wrapped or clamped.
#[derive(Clone, Debug)]
pub struct Mux {
    ports: Ports,
}

impl Mux {
    /// Wraps ports created for a multiplexer.
    pub const fn new(ports: Ports) -> Self {
        Self { ports }
    }
}

impl Combinational for Mux {
    fn ports(&self) -> &Ports {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut Ports {
        &mut self.ports
    }

    fn evaluate(&self, nets: &Nets) -> Result<u64> {
        let select = nets.value(self.ports.control()?)?.as_u64();
        let count = self.ports.count();
        let index = usize::try_from(select)
            .ok()
            .filter(|&i| i < count)
            .ok_or_else(|| {
                SimError::unit(self.name(), UnitFault::SelectOutOfRange { select, count })
            })?;
        Ok(nets.value(self.ports.input(index)?)?.as_u64())
    }
}
