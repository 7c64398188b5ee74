//! Datapath core.
//!
//! This module contains the model that owns a datapath, the two-phase clock
//! protocol, the combinational units, and the architectural register storage.

/// Architectural state (general-purpose registers).
pub mod arch;

/// Two-phase clock protocol and the clocked register.
pub mod clock;

/// The datapath model: nets, wiring, evaluation order, and clocking.
pub mod model;

/// Combinational units (mux, gate, ALU, decoders).
pub mod units;

pub use self::model::Model;
