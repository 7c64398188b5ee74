//! RISC-V architectural state.
//!
//! Holds the general-purpose register storage backing the register file.

/// General-Purpose Register storage.
pub mod gpr;
