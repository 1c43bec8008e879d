//! Stream identity and the priority-tree view consumed by the adapter.
//!
//! The priority tree itself lives outside this crate. The adapter only needs
//! to read a stream's id, its current parent and its current weight when an
//! event fires, which [`PriorityStream`] exposes.

use std::fmt;

/// Identifies an HTTP/2 stream within a connection.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StreamId(pub u32);

impl StreamId {
    /// The connection stream. It roots the priority tree and never carries
    /// dependency information of its own.
    pub const CONNECTION: StreamId = StreamId(0);

    /// Whether this id refers to the connection stream.
    #[must_use]
    pub const fn is_connection(self) -> bool { self.0 == 0 }
}

impl From<u32> for StreamId {
    fn from(value: u32) -> Self { Self(value) }
}

impl From<StreamId> for u32 {
    fn from(value: StreamId) -> Self { value.0 }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Stream weight in the HTTP/2 range `1..=256`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Weight(u16);

impl Weight {
    /// Smallest weight a stream may carry.
    pub const MIN: Weight = Weight(1);
    /// Largest weight a stream may carry.
    pub const MAX: Weight = Weight(256);
    /// Weight assigned to streams that never received priority information.
    pub const DEFAULT: Weight = Weight(16);

    /// Create a weight, returning `None` when `value` lies outside `1..=256`.
    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Weight encoded in a PRIORITY frame, where the octet carries the weight
    /// minus one.
    #[must_use]
    pub fn from_wire(octet: u8) -> Self { Self(u16::from(octet) + 1) }

    /// Return the numeric weight.
    #[must_use]
    pub const fn get(self) -> u16 { self.0 }
}

impl Default for Weight {
    fn default() -> Self { Self::DEFAULT }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Position of a stream in the priority tree relative to its parent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Parent {
    /// The stream has been detached from the tree.
    None,
    /// The stream depends directly on the connection stream.
    ConnectionRoot,
    /// The stream depends on another stream.
    Stream(StreamId),
}

impl Parent {
    /// Classify a parent id as reported by a priority tree.
    ///
    /// Stream `0` maps to [`Parent::ConnectionRoot`].
    #[must_use]
    pub fn from_id(id: Option<StreamId>) -> Self {
        match id {
            None => Parent::None,
            Some(id) if id.is_connection() => Parent::ConnectionRoot,
            Some(id) => Parent::Stream(id),
        }
    }

    /// The id of the parent stream when it carries real dependency
    /// information.
    #[must_use]
    pub fn dependency(self) -> Option<StreamId> {
        match self {
            Parent::Stream(id) => Some(id),
            Parent::None | Parent::ConnectionRoot => None,
        }
    }
}

/// Read-only view of a stream inside the priority tree.
pub trait PriorityStream {
    /// Identifier of the stream.
    fn id(&self) -> StreamId;

    /// Current parent of the stream.
    fn parent(&self) -> Parent;

    /// Current weight of the stream.
    fn weight(&self) -> Weight;
}
