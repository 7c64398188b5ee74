//! Fixed-width signal values.
//!
//! A [`Signal`] is the value carried on a wire of the datapath: a bit vector whose
//! width is fixed when it is created. It provides:
//! 1. **Construction:** From integers (truncated to the width) or explicit bit sequences.
//! 2. **Numeric Views:** Signed (sign-extended from bit `n-1`), unsigned, and boolean (bit 0).
//! 3. **Width Safety:** The width never changes; owners replace the whole value instead.

use std::fmt;

use crate::common::error::{Result, SimError};

/// Smallest representable signal width.
pub const MIN_WIDTH: u32 = 1;

/// Largest representable signal width.
pub const MAX_WIDTH: u32 = 64;

/// Returns the mask selecting the low `width` bits.
///
/// `width` must already be validated to lie within `1..=64`.
pub const fn width_mask(width: u32) -> u64 {
    if width >= MAX_WIDTH {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Sign-extends the low `width` bits of `value` to 64 bits.
pub const fn sign_extend(value: u64, width: u32) -> i64 {
    let shift = MAX_WIDTH - width;
    ((value << shift) as i64) >> shift
}

/// Validates a requested signal width.
///
/// # Errors
///
/// Returns [`SimError::InvalidWidth`] when `width` is outside `1..=64`.
pub const fn check_width(width: u32) -> Result<u32> {
    if width < MIN_WIDTH || width > MAX_WIDTH {
        Err(SimError::InvalidWidth { width })
    } else {
        Ok(width)
    }
}

/// An immutable-width bit vector.
///
/// Bit 0 is the least significant bit. Bits above the width are always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signal {
    width: u8,
    bits: u64,
}

impl Signal {
    /// Creates an all-zero signal of the given width.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::InvalidWidth`] if `width` is outside `1..=64`.
    pub fn new(width: u32) -> Result<Self> {
        Self::from_u64(0, width)
    }

    /// Creates a signal from the raw bit pattern of `value`, keeping the low `width` bits.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::InvalidWidth`] if `width` is outside `1..=64`.
    pub fn from_u64(value: u64, width: u32) -> Result<Self> {
        let width = check_width(width)?;
        Ok(Self::masked(value, width))
    }

    /// Creates a signal from the two's-complement pattern of `value`.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::InvalidWidth`] if `width` is outside `1..=64`.
    pub fn from_i64(value: i64, width: u32) -> Result<Self> {
        Self::from_u64(value as u64, width)
    }

    /// Creates a signal whose bit 0 is `value` and whose other bits are zero.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::InvalidWidth`] if `width` is outside `1..=64`.
    pub fn from_bool(value: bool, width: u32) -> Result<Self> {
        Self::from_u64(value as u64, width)
    }

    /// Creates a signal from an explicit bit sequence, least significant bit first.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::InvalidWidth`] for a bad width and with
    /// [`SimError::LengthMismatch`] if `bits.len() != width`.
    pub fn from_bits(bits: &[bool], width: u32) -> Result<Self> {
        let width = check_width(width)?;
        if bits.len() != width as usize {
            return Err(SimError::LengthMismatch {
                expected: width,
                actual: bits.len(),
            });
        }
        let value = bits
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &bit)| acc | (u64::from(bit) << i));
        Ok(Self::masked(value, width))
    }

    const fn masked(value: u64, width: u32) -> Self {
        Self {
            width: width as u8,
            bits: value & width_mask(width),
        }
    }

    /// Returns a signal of the same width holding `value`, truncated.
    ///
    /// This is how owners replace a stored value without changing its width.
    #[must_use]
    pub const fn with_value(self, value: u64) -> Self {
        Self::masked(value, self.width as u32)
    }

    /// Returns the all-zero signal of the same width.
    #[must_use]
    pub const fn zeroed(self) -> Self {
        self.with_value(0)
    }

    /// Number of bits in this signal.
    pub const fn width(self) -> u32 {
        self.width as u32
    }

    /// Unsigned view: the raw bits, zero-extended.
    pub const fn as_u64(self) -> u64 {
        self.bits
    }

    /// Unsigned view truncated to 32 bits.
    pub const fn as_u32(self) -> u32 {
        self.bits as u32
    }

    /// Signed view: two's-complement sign extension from bit `width - 1`.
    pub const fn as_i64(self) -> i64 {
        sign_extend(self.bits, self.width as u32)
    }

    /// Boolean view: bit 0 only.
    pub const fn as_bool(self) -> bool {
        self.bits & 1 != 0
    }

    /// Returns bit `index`, or `None` if it lies outside the signal.
    pub const fn bit(self, index: u32) -> Option<bool> {
        if index < self.width as u32 {
            Some((self.bits >> index) & 1 != 0)
        } else {
            None
        }
    }

    /// Returns the bits as a vector, least significant first.
    pub fn to_bits(self) -> Vec<bool> {
        (0..self.width()).map(|i| (self.bits >> i) & 1 != 0).collect()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signal<{}>({:#x})", self.width, self.bits)
    }
}

impl fmt::Display for Signal {
    /// Formats in HDL literal style, e.g. `32'h0000002a`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.width().div_ceil(4) as usize;
        write!(f, "{}'h{:0digits$x}", self.width, self.bits)
    }
}
