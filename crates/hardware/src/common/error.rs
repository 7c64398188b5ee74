//! Datapath error definitions.
//!
//! This module defines every failure the datapath model can report. It provides:
//! 1. **Construction Errors:** Invalid signal widths and mismatched initializers.
//! 2. **Wiring Errors:** Unset references, foreign handles, width and port mismatches.
//! 3. **Operation Errors:** Faults raised by a unit while recomputing its output.
//! 4. **Model State:** Poisoning after a failed step and configuration parsing failures.
//!
//! The "no immediate" sentinel produced by the immediate decoder is a normal value
//! and deliberately has no variant here.

use crate::core::units::alu::AluOp;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Faults raised by a combinational unit while computing its output.
///
/// These are wrapped in [`SimError::Unit`] together with the name of the
/// failing component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnitFault {
    /// The opcode is enumerated but has no behavior under the active semantics.
    #[error("unimplemented ALU opcode {0}")]
    UnimplementedOpcode(AluOp),

    /// The control value does not name any ALU opcode.
    #[error("invalid ALU opcode {0}")]
    InvalidOpcode(u64),

    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A multiplexer select value addressed an input that does not exist.
    #[error("select {select} out of range for {count} inputs")]
    SelectOutOfRange {
        /// The control value that was read.
        select: u64,
        /// Number of inputs on the multiplexer.
        count: usize,
    },

    /// The opcode-class control value does not name an instruction class.
    #[error("invalid instruction class {0}")]
    InvalidInstrClass(u64),
}

/// Errors that can occur while constructing, wiring, or stepping a datapath model.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A signal was requested with a width outside `1..=64`.
    #[error("invalid signal width {width}: must be within 1..=64")]
    InvalidWidth {
        /// The rejected width.
        width: u32,
    },

    /// An explicit bit sequence did not match the declared signal width.
    #[error("initializer has {actual} bits but the signal is {expected} bits wide")]
    LengthMismatch {
        /// Declared signal width.
        expected: u32,
        /// Length of the supplied bit sequence.
        actual: usize,
    },

    /// A component was declared with an unusable number of inputs.
    #[error("{component}: invalid input count {count}")]
    InvalidPortCount {
        /// Name of the component.
        component: String,
        /// The rejected input count.
        count: usize,
    },

    /// A port was read before anything was connected to it.
    #[error("{component}: port `{port}` is not connected")]
    Unconnected {
        /// Name of the component owning the port.
        component: String,
        /// Name of the unset port.
        port: String,
    },

    /// `set_input` addressed an input index the component does not have.
    #[error("{component}: input index {index} out of range ({count} inputs)")]
    PortOutOfRange {
        /// Name of the component.
        component: String,
        /// The rejected index.
        index: usize,
        /// Number of inputs on the component.
        count: usize,
    },

    /// `set_control` was called on a component that has no control port.
    #[error("{component}: component has no control port")]
    NoControlPort {
        /// Name of the component.
        component: String,
    },

    /// A producer of the wrong width was wired to a port.
    #[error("{component}: port `{port}` expects {expected} bits, got {actual}")]
    WidthMismatch {
        /// Name of the component (or net) being wired.
        component: String,
        /// Name of the port.
        port: String,
        /// Width the port requires.
        expected: u32,
        /// Width of the supplied signal.
        actual: u32,
    },

    /// A signal handle does not refer to a net of this model.
    #[error("signal handle {0} does not belong to this model")]
    UnknownSignal(u32),

    /// A component handle does not refer to a component of this model.
    #[error("component handle {0} does not belong to this model")]
    UnknownComponent(u32),

    /// An attempt was made to drive a net that is owned by a component.
    #[error("net `{net}` is driven by {driver} and cannot be driven externally")]
    NotAnInput {
        /// Name of the net.
        net: String,
        /// Description of the owning driver.
        driver: String,
    },

    /// A unit failed while recomputing its output.
    #[error("{component}: {fault}")]
    Unit {
        /// Name of the failing component.
        component: String,
        /// What went wrong.
        #[source]
        fault: UnitFault,
    },

    /// The combinational portion of the graph contains a cycle.
    #[error("combinational loop through `{component}`")]
    CombinationalLoop {
        /// Name of one component on the cycle.
        component: String,
    },

    /// The model has allocated as many nets as its configuration allows.
    #[error("model capacity of {limit} nets exceeded")]
    CapacityExceeded {
        /// Configured net limit.
        limit: usize,
    },

    /// An earlier step failed; the model must be reset before it can run again.
    #[error("model is in an invalid state after a failed step; call reset_all")]
    ModelPoisoned,

    /// The model configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Wraps a [`UnitFault`] with the name of the component that raised it.
    pub fn unit(component: &str, fault: UnitFault) -> Self {
        Self::Unit {
            component: component.to_owned(),
            fault,
        }
    }

    /// Builds an [`SimError::Unconnected`] for `component.port`.
    pub fn unconnected(component: &str, port: impl Into<String>) -> Self {
        Self::Unconnected {
            component: component.to_owned(),
            port: port.into(),
        }
    }

    /// Returns the underlying unit fault, if this error wraps one.
    pub const fn fault(&self) -> Option<UnitFault> {
        match self {
            Self::Unit { fault, .. } => Some(*fault),
            _ => None,
        }
    }
}
