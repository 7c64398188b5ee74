//! Append-only arenas and the opaque handles that index them.
//!
//! Every reference between datapath components is a handle into an arena owned by
//! the [`Model`](crate::Model). Items are never removed, so a handle stays valid for
//! the lifetime of the model that issued it.
//!
//! Each handle also carries the owner tag of the arena that issued it. Every
//! model draws a fresh tag, so [`Arena::get`] rejects a handle from another
//! model even when its index is in range.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_OWNER: AtomicU32 = AtomicU32::new(1);

/// Returns an owner tag no other caller in this process has received.
pub fn fresh_owner() -> u32 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

/// Trait for opaque ID types used as arena keys.
pub trait ArenaId: Copy {
    /// Creates an ID from the issuing arena's owner tag and a raw `u32` index.
    fn from_parts(owner: u32, index: u32) -> Self;

    /// Owner tag of the arena that issued this ID.
    fn owner(self) -> u32;

    /// Returns the raw `u32` index.
    fn as_raw(self) -> u32;
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
        pub struct $name {
            owner: u32,
            index: u32,
        }

        impl ArenaId for $name {
            fn from_parts(owner: u32, index: u32) -> Self {
                Self { owner, index }
            }

            fn owner(self) -> u32 {
                self.owner
            }

            fn as_raw(self) -> u32 {
                self.index
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.index)
            }
        }
    };
}

define_id!(
    /// Handle to a net: the stored output of a register, unit, register-file read
    /// port, or an externally driven input.
    SignalId
);

define_id!(
    /// Handle to a clocked register.
    RegId
);

define_id!(
    /// Handle to a combinational unit (mux, gate, ALU, decoders).
    UnitId
);

define_id!(
    /// Handle to a register file.
    RegFileId
);

/// A dense, ID-indexed container.
///
/// Items are always appended, never reordered or removed, so iteration order is
/// creation order. The clock protocol relies on that ordering.
#[derive(Debug, Clone)]
pub struct Arena<I: ArenaId, T> {
    owner: u32,
    items: Vec<T>,
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates a new, empty arena issuing IDs tagged with `owner`.
    ///
    /// Arenas of one model share the model's tag; see [`fresh_owner`].
    pub const fn new(owner: u32) -> Self {
        Self {
            owner,
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Appends an item and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = self.next_id();
        self.items.push(item);
        id
    }

    /// Returns the ID the next call to [`Arena::alloc`] will hand out.
    pub fn next_id(&self) -> I {
        I::from_parts(self.owner, self.items.len() as u32)
    }

    /// Returns the item with the given ID, or `None` if it was not issued by this arena.
    ///
    /// # Arguments
    ///
    /// * `id` - A handle; its owner tag must match this arena's.
    ///
    /// # Returns
    ///
    /// The item, or `None` for a foreign or out-of-range handle.
    pub fn get(&self, id: I) -> Option<&T> {
        if id.owner() != self.owner {
            return None;
        }
        self.items.get(id.as_raw() as usize)
    }

    /// Mutable counterpart of [`Arena::get`].
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        if id.owner() != self.owner {
            return None;
        }
        self.items.get_mut(id.as_raw() as usize)
    }

    /// Returns the number of items in the arena.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(id, item)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_parts(self.owner, i as u32), item))
    }

    /// Iterates mutably over items in creation order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }
}
