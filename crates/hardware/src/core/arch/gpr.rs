//! RISC-V General-Purpose Register storage.
//!
//! This module implements the 32 architectural integer registers. It performs the following:
//! 1. **Storage:** Maintains 32 registers (`x0`-`x31`) of [`XLEN`](crate::common::XLEN) bits.
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Formats the complete register state for dumps.

use std::fmt;

use crate::common::constants::NUM_REGISTERS;

/// General-Purpose Register storage.
///
/// Register `x0` is hardwired to zero and cannot be modified. Indices outside
/// `0..32` read as zero and ignore writes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register set with every register zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register. Register `x0` and indices past
    /// 31 always return 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    ///
    /// # Returns
    ///
    /// `true` if the write took effect, `false` for `x0` or an index past 31.
    pub fn write(&mut self, idx: usize, val: u32) -> bool {
        match self.regs.get_mut(idx) {
            Some(slot) if idx != 0 => {
                *slot = val;
                true
            }
            _ => false,
        }
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Copy of all 32 registers, `x0` first.
    pub const fn snapshot(&self) -> [u32; NUM_REGISTERS] {
        self.regs
    }
}

impl fmt::Display for Gpr {
    /// Registers in pairs, one pair per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            let lo = i * 2;
            if let [a, b] = pair {
                writeln!(f, "x{:<2}={a:#010x} x{:<2}={b:#010x}", lo, lo + 1)?;
            }
        }
        Ok(())
    }
}
