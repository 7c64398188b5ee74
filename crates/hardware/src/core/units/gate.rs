//! Boolean gates.

use std::fmt;

use crate::common::error::Result;
use crate::common::signal::width_mask;
use crate::config::Semantics;
use crate::core::model::Nets;
use crate::core::units::{Combinational, Ports};

/// Operator applied by a [`Gate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateOp {
    /// Logical AND.
    And,
    /// Logical OR.
    Or,
    /// Logical XOR.
    Xor,
}

impl GateOp {
    /// Applies the operator to two operands.
    pub const fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
        }
    }

    /// Identity element of the operator over `width` bits.
    pub const fn identity(self, width: u32) -> u64 {
        match self {
            Self::And => width_mask(width),
            Self::Or | Self::Xor => 0,
        }
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
        })
    }
}

/// Folds its operator over every input.
///
/// Under [`Semantics::Reference`] only bit 0 of each input takes part, the fold
/// starts from `true`, and the result lands in bit 0 of the output. Under
/// [`Semantics::Architectural`] the operator is applied across the full width,
/// starting from its identity.
///
/// A gate has no control port.
#[derive(Clone, Debug)]
pub struct Gate {
    ports: Ports,
    op: GateOp,
    semantics: Semantics,
}

impl Gate {
    /// Wraps ports created for a gate.
    pub const fn new(ports: Ports, op: GateOp, semantics: Semantics) -> Self {
        Self {
            ports,
            op,
            semantics,
        }
    }

    /// The gate operator.
    pub const fn op(&self) -> GateOp {
        self.op
    }
}

impl Combinational for Gate {
    fn ports(&self) -> &Ports {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut Ports {
        &mut self.ports
    }

    fn evaluate(&self, nets: &Nets) -> Result<u64> {
        let width = self.ports.input_width();
        let mut acc = match self.semantics {
            Semantics::Reference => 1,
            Semantics::Architectural => self.op.identity(width),
        };
        for index in 0..self.ports.count() {
            let value = nets.value(self.ports.input(index)?)?;
            let operand = match self.semantics {
                Semantics::Reference => u64::from(value.as_bool()),
                Semantics::Architectural => value.as_u64(),
            };
            acc = self.op.apply(acc, operand);
        }
        Ok(acc)
    }
}
