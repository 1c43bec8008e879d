//! Priority events delivered by the transport and the priority tree.

use std::fmt;

use crate::stream::{Parent, PriorityStream, StreamId, Weight};

/// Contents of a PRIORITY frame as read from the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriorityFrame {
    /// Stream the frame applies to.
    pub stream: StreamId,
    /// Stream the sender wants `stream` to depend on.
    pub dependency: StreamId,
    /// Requested weight.
    pub weight: Weight,
    /// Whether the dependency is exclusive.
    pub exclusive: bool,
}

/// A single priority signal for one stream.
///
/// Tree mutations borrow the affected stream so the adapter reads its
/// current parent and weight at dispatch time.
#[derive(Clone, Copy)]
pub enum PriorityEvent<'a> {
    /// The stream was moved under a new parent. The new parent is
    /// `stream.parent()`.
    ParentChanged {
        /// Stream that moved.
        stream: &'a dyn PriorityStream,
        /// Parent before the move.
        old_parent: Parent,
    },
    /// The stream's weight changed. The new weight is `stream.weight()`.
    WeightChanged {
        /// Stream whose weight changed.
        stream: &'a dyn PriorityStream,
        /// Weight before the change.
        old_weight: Weight,
    },
    /// A PRIORITY frame was read.
    PriorityRead(PriorityFrame),
}

impl PriorityEvent<'_> {
    /// Stream the event applies to.
    #[must_use]
    pub fn stream_id(&self) -> StreamId {
        match self {
            Self::ParentChanged { stream, .. } | Self::WeightChanged { stream, .. } => stream.id(),
            Self::PriorityRead(frame) => frame.stream,
        }
    }
}

impl fmt::Debug for PriorityEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParentChanged { stream, old_parent } => f
                .debug_struct("ParentChanged")
                .field("stream", &stream.id())
                .field("old_parent", old_parent)
                .field("new_parent", &stream.parent())
                .finish(),
            Self::WeightChanged { stream, old_weight } => f
                .debug_struct("WeightChanged")
                .field("stream", &stream.id())
                .field("old_weight", old_weight)
                .field("weight", &stream.weight())
                .finish(),
            Self::PriorityRead(frame) => f.debug_tuple("PriorityRead").field(frame).finish(),
        }
    }
}
