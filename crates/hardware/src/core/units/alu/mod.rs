//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the opcode-selected integer ALU of the datapath. The
//! opcode arrives on a 5-bit control signal and selects one row of a fixed
//! operation table. Operands are `n`-bit signals and the result is truncated to
//! `n` bits.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`logic`]:      And, Or, Xor, Lt, Ltu, Eq
//! - [`shifts`]:     Sl, Sra, Srl, and the Lui pass-through

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, lt, eq).
pub mod logic;

/// Shift operations (sl, srl, sra).
pub mod shifts;

use std::fmt;

use crate::common::error::{Result, SimError, UnitFault};
use crate::common::signal::width_mask;
use crate::config::Semantics;
use crate::core::model::Nets;
use crate::core::units::{Combinational, Ports};

/// ALU opcodes, numbered as they appear on the control signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluOp {
    /// `a + b`.
    Add = 0,
    /// `a - b`.
    Sub = 1,
    /// `a * b`, low bits.
    Mul = 2,
    /// Unsigned `a / b`.
    Div = 3,
    /// Bitwise AND.
    And = 4,
    /// Bitwise OR.
    Or = 5,
    /// Bitwise XOR.
    Xor = 6,
    /// `a << b`.
    Sl = 7,
    /// Right shift of `a` by `b`, arithmetic under architectural semantics.
    Sra = 8,
    /// Right shift of `a` by `b` under architectural semantics.
    Srl = 9,
    /// Passes `b` through.
    Lui = 10,
    /// Signed `a < b`.
    Lt = 11,
    /// Unsigned `a < b`.
    Ltu = 12,
    /// `a == b`.
    Eq = 13,
}

impl AluOp {
    /// Every opcode in control-value order.
    pub const ALL: [Self; 14] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Sl,
        Self::Sra,
        Self::Srl,
        Self::Lui,
        Self::Lt,
        Self::Ltu,
        Self::Eq,
    ];

    /// The value carried on the control signal.
    pub const fn code(self) -> u64 {
        self as u64
    }

    /// Upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Sl => "SL",
            Self::Sra => "SRA",
            Self::Srl => "SRL",
            Self::Lui => "LUI",
            Self::Lt => "LT",
            Self::Ltu => "LTU",
            Self::Eq => "EQ",
        }
    }
}

impl TryFrom<u64> for AluOp {
    type Error = UnitFault;

    fn try_from(code: u64) -> std::result::Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(UnitFault::InvalidOpcode(code))
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Executes one ALU operation on raw `width`-bit operands.
///
/// Operands are the unsigned bit patterns of the input signals; signed
/// operations reinterpret them from bit `width - 1`.
///
/// # Arguments
///
/// * `op`        - The operation selected by the control signal.
/// * `a`         - First operand, the bit pattern of input 0.
/// * `b`         - Second operand, the bit pattern of input 1.
/// * `width`     - Operand and result width in bits (1-64).
/// * `semantics` - Which interpretation of the shifts and `EQ` to use.
///
/// # Returns
///
/// The result truncated to `width` bits.
///
/// # Errors
///
/// Returns [`UnitFault::DivisionByZero`] for `DIV` with a zero divisor and
/// [`UnitFault::UnimplementedOpcode`] for `EQ` under reference semantics.
///
/// # Examples
///
/// ```
/// use rvsim_datapath::Semantics;
/// use rvsim_datapath::core::units::alu::{execute, AluOp};
///
/// assert_eq!(execute(AluOp::Add, 5, 3, 32, Semantics::Reference), Ok(8));
/// assert_eq!(execute(AluOp::Sub, 0, 1, 8, Semantics::Reference), Ok(0xFF));
/// assert_eq!(execute(AluOp::Lt, 0xFFFF_FFFF, 1, 32, Semantics::Reference), Ok(1));
/// ```
pub fn execute(
    op: AluOp,
    a: u64,
    b: u64,
    width: u32,
    semantics: Semantics,
) -> std::result::Result<u64, UnitFault> {
    let raw = match op {
        AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div => arithmetic::execute(op, a, b)?,

        AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Lt | AluOp::Ltu | AluOp::Eq => {
            logic::execute(op, a, b, width, semantics)?
        }

        AluOp::Sl | AluOp::Sra | AluOp::Srl | AluOp::Lui => {
            shifts::execute(op, a, b, width, semantics)
        }
    };
    Ok(raw & width_mask(width))
}

/// Arithmetic Logic Unit component.
///
/// Two operand inputs of width `n`, a 5-bit opcode control, and an `n`-bit output.
#[derive(Clone, Debug)]
pub struct Alu {
    ports: Ports,
    semantics: Semantics,
}

impl Alu {
    /// Wraps ports created for an ALU.
    pub const fn new(ports: Ports, semantics: Semantics) -> Self {
        Self { ports, semantics }
    }
}

impl Combinational for Alu {
    fn ports(&self) -> &Ports {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut Ports {
        &mut self.ports
    }

    fn evaluate(&self, nets: &Nets) -> Result<u64> {
        let code = nets.value(self.ports.control()?)?.as_u64();
        let a = nets.value(self.ports.input(0)?)?.as_u64();
        let b = nets.value(self.ports.input(1)?)?.as_u64();
        AluOp::try_from(code)
            .and_then(|op| execute(op, a, b, self.ports.input_width(), self.semantics))
            .map_err(|fault| SimError::unit(self.name(), fault))
    }
}
