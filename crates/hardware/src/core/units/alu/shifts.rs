//! ALU shift operations.
//!
//! Under [`Semantics::Reference`] the table is reproduced as the reference
//! datapath defines it: `Srl` adds `signed(a)` to `b`, `Sra` shifts logically,
//! and shift amounts are used unmasked (anything past 63 yields zero).
//!
//! Under [`Semantics::Architectural`] the shift amount is masked to the low
//! `log2` bits of the width (rounded up to a power of two) and `Sra`
//! sign-extends from bit `width - 1`.

use crate::common::signal::sign_extend;
use crate::config::Semantics;
use crate::core::units::alu::AluOp;

/// Shift amount for architectural semantics.
const fn shamt(b: u64, width: u32) -> u32 {
    (b & (width.next_power_of_two() as u64 - 1)) as u32
}

/// Unmasked shift amount for reference semantics; `None` if it cannot fit a `u32`.
fn raw_shamt(b: u64) -> Option<u32> {
    u32::try_from(b).ok()
}

/// Executes a shift operation (and the `Lui` pass-through).
pub fn execute(op: AluOp, a: u64, b: u64, width: u32, semantics: Semantics) -> u64 {
    match (op, semantics) {
        (AluOp::Lui, _) => b,

        (AluOp::Sl, Semantics::Reference) => raw_shamt(b)
            .and_then(|s| a.checked_shl(s))
            .unwrap_or(0),
        (AluOp::Sl, Semantics::Architectural) => a << shamt(b, width),

        (AluOp::Srl, Semantics::Reference) => sign_extend(a, width).wrapping_add(b as i64) as u64,
        (AluOp::Srl, Semantics::Architectural) => a >> shamt(b, width),

        (AluOp::Sra, Semantics::Reference) => raw_shamt(b)
            .and_then(|s| a.checked_shr(s))
            .unwrap_or(0),
        (AluOp::Sra, Semantics::Architectural) => (sign_extend(a, width) >> shamt(b, width)) as u64,

        _ => 0,
    }
}
