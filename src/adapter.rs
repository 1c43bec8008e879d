//! Priority-aware wrapper around a message assembler.
//!
//! [`PriorityAdapter`] sits between an HTTP/2 connection and a
//! [`MessageAssembler`]. Frame events pass through to the assembler; priority
//! events become header fields on the stream's live message, or are parked in
//! a [`PendingHeaderStore`] until a message exists. A PRIORITY frame on a
//! stream that never produced a message yields a synthesized message so the
//! priority information still reaches downstream consumers.

use log::debug;

use crate::{
    assembler::MessageAssembler,
    config::AdapterConfig,
    error::{Error, Result},
    event::{PriorityEvent, PriorityFrame},
    headers::{
        HeaderSet,
        Http2Headers,
        names::{STREAM_DEPENDENCY_ID, STREAM_WEIGHT, remove_priority_headers},
    },
    message::Message,
    pending::PendingHeaderStore,
    stream::{Parent, PriorityStream, StreamId},
    synthetic::synthesize_headers,
};

/// Connection-scoped translator from priority events to message headers.
///
/// One adapter serves one connection and must be driven serially by the
/// connection's event loop.
///
/// # Examples
///
/// ```rust,ignore
/// use h2priority::{AdapterConfig, PriorityAdapter, PriorityEvent, Role};
///
/// let mut adapter = PriorityAdapter::new(assembler, AdapterConfig::new(Role::Server));
/// adapter.on_priority_event(PriorityEvent::WeightChanged {
///     stream: &stream,
///     old_weight: Weight::DEFAULT,
/// })?;
/// adapter.on_headers_read(stream.id(), headers, true)?;
/// ```
#[derive(Debug)]
pub struct PriorityAdapter<A> {
    assembler: A,
    pending: PendingHeaderStore,
    config: AdapterConfig,
}

impl<A: MessageAssembler> PriorityAdapter<A> {
    /// Wrap `assembler` with an empty pending store.
    #[must_use]
    pub fn new(assembler: A, config: AdapterConfig) -> Self {
        Self {
            assembler,
            pending: PendingHeaderStore::default(),
            config,
        }
    }

    /// The wrapped assembler.
    #[must_use]
    pub fn assembler(&self) -> &A { &self.assembler }

    /// Mutable access to the wrapped assembler.
    pub fn assembler_mut(&mut self) -> &mut A { &mut self.assembler }

    /// Priority headers still waiting for a message.
    #[must_use]
    pub fn pending(&self) -> &PendingHeaderStore { &self.pending }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &AdapterConfig { &self.config }

    /// Consume the adapter, returning the assembler.
    pub fn into_inner(self) -> A { self.assembler }

    /// Translate one priority event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStream`] when a PRIORITY frame names a stream
    /// with neither a message nor a pending record, and [`Error::Assembly`]
    /// when the assembler rejects a synthesized message.
    pub fn on_priority_event(&mut self, event: PriorityEvent<'_>) -> Result<()> {
        debug!("priority event: stream={}, event={event:?}", event.stream_id());
        match event {
            PriorityEvent::ParentChanged { stream, .. } => {
                self.parent_changed(stream);
                Ok(())
            }
            PriorityEvent::WeightChanged { stream, .. } => {
                self.weight_changed(stream);
                Ok(())
            }
            PriorityEvent::PriorityRead(frame) => self.priority_read(frame),
        }
    }

    /// Pass a HEADERS block to the assembler, then merge pending priority
    /// headers into the resulting message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Assembly`] when the assembler rejects the block.
    pub fn on_headers_read(
        &mut self,
        stream: StreamId,
        headers: Http2Headers,
        end_of_stream: bool,
    ) -> Result<()> {
        self.assembler
            .begin_headers(stream, headers, self.config.validate_headers())?;
        self.message_available(stream);
        if end_of_stream {
            self.complete(stream);
        }
        Ok(())
    }

    /// Pass body bytes to the assembler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Assembly`] when the assembler rejects the data.
    pub fn on_data_read(&mut self, stream: StreamId, data: &[u8], end_of_stream: bool) -> Result<()> {
        self.assembler.append_data(stream, data)?;
        if end_of_stream {
            self.complete(stream);
        }
        Ok(())
    }

    /// Handle RST_STREAM by dropping all state for the stream.
    pub fn on_rst_stream_read(&mut self, stream: StreamId) { self.remove_message(stream); }

    /// Merge pending headers into the message the assembler now holds for
    /// `stream`, if any. The pending record is kept.
    pub fn message_available(&mut self, stream: StreamId) {
        if let Some(message) = self.assembler.message_mut(stream) {
            self.pending.export(stream, message.active_headers_mut());
        }
    }

    /// Merge pending headers into `message`, drop the stream's tracking state
    /// and hand the message to the assembler for delivery.
    pub fn deliver(&mut self, stream: StreamId, mut message: Message) {
        self.pending.export(stream, message.active_headers_mut());
        self.remove_message(stream);
        self.assembler.deliver(stream, message);
    }

    /// Drop the assembler's tracking state and any pending record for
    /// `stream`.
    pub fn remove_message(&mut self, stream: StreamId) {
        self.assembler.remove_message(stream);
        self.pending.remove(stream);
    }

    fn complete(&mut self, stream: StreamId) {
        if let Some(message) = self.assembler.take_message(stream) {
            self.deliver(stream, message);
        }
    }

    /// Moving a stream with a live message under the connection root strips
    /// its dependency from both header sets. The reference adapter leaves the
    /// message untouched in that case.
    fn parent_changed(&mut self, stream: &dyn PriorityStream) {
        let id = stream.id();
        let parent = stream.parent();

        let Some(message) = self.assembler.message_mut(id) else {
            match parent.dependency() {
                Some(dependency) => self.pending.import(id, dependency_headers(dependency)),
                None => self.pending.strip_priority(id, parent),
            }
            return;
        };

        match parent {
            Parent::None => {
                remove_priority_headers(message.headers_mut());
                remove_priority_headers(message.trailing_headers_mut());
                self.pending.strip_priority(id, parent);
            }
            Parent::ConnectionRoot => {
                message.headers_mut().remove(STREAM_DEPENDENCY_ID);
                message.trailing_headers_mut().remove(STREAM_DEPENDENCY_ID);
                self.pending.strip_priority(id, parent);
            }
            Parent::Stream(dependency) => {
                let headers = dependency_headers(dependency);
                message.active_headers_mut().set_all(&headers);
                self.pending.refresh(id, &headers);
            }
        }
    }

    fn weight_changed(&mut self, stream: &dyn PriorityStream) {
        let id = stream.id();
        let headers = weight_headers(stream);

        let Some(message) = self.assembler.message_mut(id) else {
            self.pending.import(id, headers);
            return;
        };

        message.active_headers_mut().set_all(&headers);
        self.pending.refresh(id, &headers);
    }

    fn priority_read(&mut self, frame: PriorityFrame) -> Result<()> {
        let id = frame.stream;
        if self.assembler.message_mut(id).is_some() {
            // Priority for a flowing message arrives through tree events.
            debug!("priority frame ignored for stream with live message: stream={id}");
            return Ok(());
        }

        let Some(pending) = self.pending.remove(id) else {
            crate::metrics::inc_unknown_stream_errors();
            tracing::warn!(stream = %id, "priority frame received for unknown stream");
            return Err(Error::UnknownStream { stream: id });
        };

        let headers = synthesize_headers(self.config.role(), &pending);
        let message = self
            .assembler
            .new_message(id, headers, self.config.validate_headers())?;
        tracing::debug!(stream = %id, role = ?self.config.role(), "synthesized message from priority frame");
        crate::metrics::inc_synthetic_messages();
        self.deliver(id, message);
        Ok(())
    }
}

fn weight_headers(stream: &dyn PriorityStream) -> HeaderSet {
    let mut headers = HeaderSet::new();
    headers.set(STREAM_WEIGHT, stream.weight().to_string());
    headers
}

fn dependency_headers(dependency: StreamId) -> HeaderSet {
    let mut headers = HeaderSet::new();
    headers.set(STREAM_DEPENDENCY_ID, dependency.to_string());
    headers
}
