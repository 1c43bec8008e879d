#![cfg(any(test, feature = "test-helpers"))]
//! Test-only helpers shared by unit tests and `h2priority_testing`.
//!
//! [`TestAssembler`] is an in-memory [`MessageAssembler`] that records every
//! delivery and removal. [`TestStream`] is a fixed [`PriorityStream`] whose
//! parent and weight tests set directly.

use std::{collections::HashMap, num::NonZeroUsize};

use crate::{
    assembler::{AssemblyError, MessageAssembler},
    headers::Http2Headers,
    message::{Message, MessageHead},
    stream::{Parent, PriorityStream, StreamId, Weight},
};

/// In-memory message assembler that records its outputs.
#[derive(Debug, Default)]
pub struct TestAssembler {
    messages: HashMap<StreamId, Message>,
    delivered: Vec<(StreamId, Message)>,
    removed: Vec<StreamId>,
    constructed: usize,
    max_content_length: Option<NonZeroUsize>,
    reject_new_messages: bool,
}

impl TestAssembler {
    /// Assembler without a content limit.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Reject bodies longer than `limit`.
    #[must_use]
    pub fn with_max_content_length(mut self, limit: NonZeroUsize) -> Self {
        self.max_content_length = Some(limit);
        self
    }

    /// Fail every [`MessageAssembler::new_message`] call with
    /// [`AssemblyError::MissingPseudoHeader`].
    #[must_use]
    pub fn rejecting_new_messages(mut self) -> Self {
        self.reject_new_messages = true;
        self
    }

    /// Track `message` as the live message for `stream`.
    pub fn insert_message(&mut self, stream: StreamId, message: Message) {
        self.messages.insert(stream, message);
    }

    /// Track an empty `GET /` request for `stream`.
    pub fn insert_request(&mut self, stream: StreamId) {
        self.insert_message(
            stream,
            Message::new(MessageHead::Request {
                method: "GET".into(),
                path: "/".into(),
            }),
        );
    }

    /// The live message for `stream`, if any.
    #[must_use]
    pub fn message(&self, stream: StreamId) -> Option<&Message> { self.messages.get(&stream) }

    /// Messages delivered so far, in delivery order.
    #[must_use]
    pub fn delivered(&self) -> &[(StreamId, Message)] { &self.delivered }

    /// Streams whose tracking was removed, in removal order.
    #[must_use]
    pub fn removed(&self) -> &[StreamId] { &self.removed }

    /// Number of messages built through [`MessageAssembler::new_message`].
    #[must_use]
    pub fn constructed(&self) -> usize { self.constructed }
}

impl MessageAssembler for TestAssembler {
    fn message_mut(&mut self, stream: StreamId) -> Option<&mut Message> {
        self.messages.get_mut(&stream)
    }

    fn begin_headers(
        &mut self,
        stream: StreamId,
        headers: Http2Headers,
        validate: bool,
    ) -> Result<(), AssemblyError> {
        if let Some(message) = self.messages.get_mut(&stream) {
            let fields = headers.into_headers();
            message.active_headers_mut().set_all(&fields);
            return Ok(());
        }
        let message = Message::from_http2_headers(stream, headers, validate)?;
        self.messages.insert(stream, message);
        Ok(())
    }

    fn append_data(&mut self, stream: StreamId, data: &[u8]) -> Result<(), AssemblyError> {
        let message = self
            .messages
            .get_mut(&stream)
            .ok_or(AssemblyError::MissingMessage { stream })?;
        let attempted = message.content().len().saturating_add(data.len());
        if let Some(limit) = self.max_content_length {
            if attempted > limit.get() {
                return Err(AssemblyError::MessageTooLarge {
                    stream,
                    attempted,
                    limit,
                });
            }
        }
        message.append_content(data);
        Ok(())
    }

    fn new_message(
        &mut self,
        stream: StreamId,
        headers: Http2Headers,
        validate: bool,
    ) -> Result<Message, AssemblyError> {
        if self.reject_new_messages {
            return Err(AssemblyError::MissingPseudoHeader {
                stream,
                name: ":method",
            });
        }
        let message = Message::from_http2_headers(stream, headers, validate)?;
        self.constructed += 1;
        Ok(message)
    }

    fn take_message(&mut self, stream: StreamId) -> Option<Message> { self.messages.remove(&stream) }

    fn deliver(&mut self, stream: StreamId, message: Message) {
        self.delivered.push((stream, message));
    }

    fn remove_message(&mut self, stream: StreamId) {
        self.messages.remove(&stream);
        self.removed.push(stream);
    }
}

/// Priority-tree stream with a fixed parent and weight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TestStream {
    id: StreamId,
    parent: Parent,
    weight: Weight,
}

impl TestStream {
    /// Stream `id` depending on the connection root with the default weight.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id: StreamId(id),
            parent: Parent::ConnectionRoot,
            weight: Weight::DEFAULT,
        }
    }

    /// Set the parent the stream reports.
    #[must_use]
    pub fn with_parent(mut self, parent: Parent) -> Self {
        self.parent = parent;
        self
    }

    /// Set the parent to stream `dependency`.
    #[must_use]
    pub fn depending_on(self, dependency: u32) -> Self {
        self.with_parent(Parent::Stream(StreamId(dependency)))
    }

    /// Set the weight the stream reports.
    ///
    /// # Panics
    ///
    /// Panics if `weight` lies outside `1..=256`.
    #[must_use]
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = Weight::new(weight).expect("weight must lie in 1..=256");
        self
    }
}

impl PriorityStream for TestStream {
    fn id(&self) -> StreamId { self.id }

    fn parent(&self) -> Parent { self.parent }

    fn weight(&self) -> Weight { self.weight }
}
