//! ALU arithmetic operations.
//!
//! Addition, subtraction, and multiplication wrap; the caller truncates the
//! result to the operand width. Division is unsigned.

use crate::common::error::UnitFault;
use crate::core::units::alu::AluOp;

/// Executes an integer arithmetic operation on unsigned operand views.
///
/// # Errors
///
/// Returns [`UnitFault::DivisionByZero`] when `op` is `Div` and `b` is zero.
pub fn execute(op: AluOp, a: u64, b: u64) -> Result<u64, UnitFault> {
    match op {
        AluOp::Add => Ok(a.wrapping_add(b)),
        AluOp::Sub => Ok(a.wrapping_sub(b)),
        AluOp::Mul => Ok(a.wrapping_mul(b)),
        AluOp::Div => a.checked_div(b).ok_or(UnitFault::DivisionByZero),
        _ => Ok(0),
    }
}
