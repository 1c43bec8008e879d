//! Interface to the collaborator that owns message assembly.
//!
//! A [`MessageAssembler`] turns HEADERS and DATA frames into [`Message`]s,
//! tracks them by stream, and hands completed messages to downstream
//! consumers. [`crate::PriorityAdapter`] wraps an assembler and layers
//! priority headers on top of its output.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::{headers::Http2Headers, message::Message, stream::StreamId};

/// Errors an assembler may report while building messages.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AssemblyError {
    /// The message body would exceed the configured limit.
    #[error("message on stream {stream} exceeds size limit: {attempted} bytes > {limit} bytes")]
    MessageTooLarge {
        /// Stream carrying the message.
        stream: StreamId,
        /// Size that triggered the limit.
        attempted: usize,
        /// Configured limit.
        limit: NonZeroUsize,
    },
    /// Body bytes arrived for a stream without a tracked message.
    #[error("data received for stream {stream} without a message")]
    MissingMessage {
        /// Stream the data arrived on.
        stream: StreamId,
    },
    /// A required pseudo-header was absent from the header block.
    #[error("missing pseudo-header {name} on stream {stream}")]
    MissingPseudoHeader {
        /// Stream carrying the header block.
        stream: StreamId,
        /// Name of the missing pseudo-header.
        name: &'static str,
    },
    /// Header validation rejected a field.
    #[error("invalid header {name:?} on stream {stream}")]
    InvalidHeader {
        /// Stream carrying the header block.
        stream: StreamId,
        /// Offending field name.
        name: String,
    },
}

/// Message assembly capabilities consumed by the priority adapter.
///
/// Implementations are driven serially by the connection that owns them.
pub trait MessageAssembler {
    /// The message currently tracked for `stream`, if any.
    fn message_mut(&mut self, stream: StreamId) -> Option<&mut Message>;

    /// Process a HEADERS block, creating or extending the tracked message.
    ///
    /// # Errors
    ///
    /// Returns an [`AssemblyError`] when the block cannot be applied.
    fn begin_headers(
        &mut self,
        stream: StreamId,
        headers: Http2Headers,
        validate: bool,
    ) -> Result<(), AssemblyError>;

    /// Append body bytes to the tracked message.
    ///
    /// # Errors
    ///
    /// Returns an [`AssemblyError`] when no message exists or a size limit is
    /// exceeded.
    fn append_data(&mut self, stream: StreamId, data: &[u8]) -> Result<(), AssemblyError>;

    /// Build a message from a header block without tracking it.
    ///
    /// # Errors
    ///
    /// Returns an [`AssemblyError`] when the block cannot form a message.
    fn new_message(
        &mut self,
        stream: StreamId,
        headers: Http2Headers,
        validate: bool,
    ) -> Result<Message, AssemblyError>;

    /// Stop tracking the message for `stream` and return it.
    fn take_message(&mut self, stream: StreamId) -> Option<Message>;

    /// Hand a finished message to downstream consumers.
    fn deliver(&mut self, stream: StreamId, message: Message);

    /// Drop any tracking state for `stream`.
    fn remove_message(&mut self, stream: StreamId);
}
