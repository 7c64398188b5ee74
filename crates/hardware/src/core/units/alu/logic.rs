//! ALU logical and comparison operations.
//!
//! Comparisons produce 0 or 1. `Lt` compares the operands sign-extended from
//! bit `width - 1`.

use crate::common::error::UnitFault;
use crate::common::signal::sign_extend;
use crate::config::Semantics;
use crate::core::units::alu::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op`        - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`         - First operand, `width` bits.
/// * `b`         - Second operand, `width` bits.
/// * `width`     - Operand width; `Lt` sign-extends from bit `width - 1`.
/// * `semantics` - Decides whether `Eq` is available.
///
/// # Returns
///
/// The bitwise result, or `1`/`0` for comparisons. Returns `0` for non-logic opcodes.
///
/// # Errors
///
/// Returns [`UnitFault::UnimplementedOpcode`] for `Eq` under
/// [`Semantics::Reference`].
pub fn execute(
    op: AluOp,
    a: u64,
    b: u64,
    width: u32,
    semantics: Semantics,
) -> Result<u64, UnitFault> {
    Ok(match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Lt => u64::from(sign_extend(a, width) < sign_extend(b, width)),
        AluOp::Ltu => u64::from(a < b),
        AluOp::Eq => match semantics {
            Semantics::Reference => return Err(UnitFault::UnimplementedOpcode(op)),
            Semantics::Architectural => u64::from(a == b),
        },
        _ => 0,
    })
}
