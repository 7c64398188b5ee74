//! Net storage.
//!
//! A net is the stored value of one wire together with the thing that drives it.
//! Components never own the values they read; they hold [`SignalId`] handles and
//! look values up here when they update.

use std::fmt;

use crate::common::arena::{Arena, ArenaId};
use crate::common::error::{Result, SimError};
use crate::common::{RegFileId, RegId, Signal, SignalId, UnitId};

/// What produces the value of a net.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Driver {
    /// Driven from outside the model with [`Model::drive`](crate::Model::drive).
    Input,
    /// Fixed at construction.
    Constant,
    /// The current value of a register.
    Register(RegId),
    /// The output of a combinational unit.
    Unit(UnitId),
    /// A read port of a register file.
    RegisterFile(RegFileId),
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Constant => f.write_str("constant"),
            Self::Register(id) => write!(f, "{id}"),
            Self::Unit(id) => write!(f, "{id}"),
            Self::RegisterFile(id) => write!(f, "{id}"),
        }
    }
}

/// One wire of the datapath.
#[derive(Clone, Debug)]
pub struct Net {
    name: String,
    value: Signal,
    driver: Driver,
}

impl Net {
    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    pub const fn value(&self) -> Signal {
        self.value
    }

    /// Who drives this net.
    pub const fn driver(&self) -> Driver {
        self.driver
    }
}

/// Every net of a model, indexed by [`SignalId`].
#[derive(Clone, Debug)]
pub struct Nets {
    arena: Arena<SignalId, Net>,
    limit: usize,
}

impl Nets {
    /// Creates an empty store that refuses to grow past `limit` nets.
    ///
    /// Handles it issues carry `owner` and are rejected by any other store.
    pub const fn new(owner: u32, limit: usize) -> Self {
        Self {
            arena: Arena::new(owner),
            limit,
        }
    }

    /// Handle the next [`Nets::alloc`] will return.
    pub fn next_id(&self) -> SignalId {
        self.arena.next_id()
    }

    /// Allocates a net holding `value`.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::CapacityExceeded`] once the limit is reached.
    pub fn alloc(&mut self, name: impl Into<String>, value: Signal, driver: Driver) -> Result<SignalId> {
        if self.arena.len() >= self.limit {
            return Err(SimError::CapacityExceeded { limit: self.limit });
        }
        Ok(self.arena.alloc(Net {
            name: name.into(),
            value,
            driver,
        }))
    }

    /// Looks up a net.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownSignal`] for a handle this store never issued.
    pub fn net(&self, id: SignalId) -> Result<&Net> {
        self.arena
            .get(id)
            .ok_or(SimError::UnknownSignal(id.as_raw()))
    }

    /// Current value of a net.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownSignal`] for a foreign handle.
    pub fn value(&self, id: SignalId) -> Result<Signal> {
        self.net(id).map(Net::value)
    }

    /// Width of a net.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownSignal`] for a foreign handle.
    pub fn width(&self, id: SignalId) -> Result<u32> {
        self.value(id).map(Signal::width)
    }

    /// Replaces the value of a net with `bits`, truncated to its width.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::UnknownSignal`] for a foreign handle.
    pub fn store(&mut self, id: SignalId, bits: u64) -> Result<()> {
        let net = self
            .arena
            .get_mut(id)
            .ok_or(SimError::UnknownSignal(id.as_raw()))?;
        net.value = net.value.with_value(bits);
        Ok(())
    }

    /// Number of allocated nets.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if no nets have been allocated.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterates over `(handle, net)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (SignalId, &Net)> {
        self.arena.iter()
    }
}
