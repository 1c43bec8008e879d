//! Single-exchange HTTP message model.
//!
//! A [`Message`] is what downstream consumers receive: one request or
//! response with primary headers, trailing headers and a body. Priority
//! headers are written to whichever header set is currently active.

use bytes::BytesMut;

use crate::{
    assembler::AssemblyError,
    headers::{HeaderSet, Http2Headers},
    stream::StreamId,
};

/// Start line of a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageHead {
    /// A request carrying its method and path.
    Request {
        /// Request method, e.g. `GET`.
        method: String,
        /// Request path, possibly empty.
        path: String,
    },
    /// A response carrying its status code.
    Response {
        /// Numeric status code.
        status: u16,
    },
}

/// One logical HTTP exchange on a stream.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    head: MessageHead,
    headers: HeaderSet,
    trailing_headers: HeaderSet,
    content: BytesMut,
}

impl Message {
    /// Create a message with empty headers and no content.
    #[must_use]
    pub fn new(head: MessageHead) -> Self {
        Self {
            head,
            headers: HeaderSet::new(),
            trailing_headers: HeaderSet::new(),
            content: BytesMut::new(),
        }
    }

    /// Convert an HTTP/2 header block into a message.
    ///
    /// A `:status` pseudo-header yields a response; otherwise `:method` and
    /// `:path` are required and yield a request. Regular fields become the
    /// primary headers. When `validate` is set, field names must be HTTP
    /// tokens and values must not contain line breaks or NUL.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::MissingPseudoHeader`] when the block carries
    /// neither a status nor a complete request line, and
    /// [`AssemblyError::InvalidHeader`] when validation rejects a field.
    pub fn from_http2_headers(
        stream: StreamId,
        headers: Http2Headers,
        validate: bool,
    ) -> Result<Self, AssemblyError> {
        let head = if let Some(status) = headers.status() {
            MessageHead::Response { status }
        } else {
            let method = headers
                .method()
                .ok_or(AssemblyError::MissingPseudoHeader {
                    stream,
                    name: ":method",
                })?
                .to_owned();
            let path = headers
                .path()
                .ok_or(AssemblyError::MissingPseudoHeader {
                    stream,
                    name: ":path",
                })?
                .to_owned();
            MessageHead::Request { method, path }
        };

        let fields = headers.into_headers();
        if validate {
            if let Some((name, _)) = fields.iter().find(|(n, v)| !is_valid_field(n, v)) {
                return Err(AssemblyError::InvalidHeader {
                    stream,
                    name: name.to_owned(),
                });
            }
        }

        let mut message = Message::new(head);
        message.headers = fields;
        Ok(message)
    }

    /// Start line of the message.
    #[must_use]
    pub fn head(&self) -> &MessageHead { &self.head }

    /// Primary headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderSet { &self.headers }

    /// Mutable primary headers.
    pub fn headers_mut(&mut self) -> &mut HeaderSet { &mut self.headers }

    /// Trailing headers.
    #[must_use]
    pub fn trailing_headers(&self) -> &HeaderSet { &self.trailing_headers }

    /// Mutable trailing headers.
    pub fn trailing_headers_mut(&mut self) -> &mut HeaderSet { &mut self.trailing_headers }

    /// Whether any body bytes have been read into the message.
    #[must_use]
    pub fn has_content(&self) -> bool { !self.content.is_empty() }

    /// Body bytes read so far.
    #[must_use]
    pub fn content(&self) -> &[u8] { &self.content }

    /// Append body bytes.
    pub fn append_content(&mut self, data: &[u8]) { self.content.extend_from_slice(data); }

    /// The header set new fields should be written to right now.
    ///
    /// Trailing headers once body content exists, primary headers before.
    #[must_use]
    pub fn active_headers(&self) -> &HeaderSet {
        if self.has_content() {
            &self.trailing_headers
        } else {
            &self.headers
        }
    }

    /// Mutable access to the currently active header set.
    pub fn active_headers_mut(&mut self) -> &mut HeaderSet {
        if self.has_content() {
            &mut self.trailing_headers
        } else {
            &mut self.headers
        }
    }
}

fn is_valid_field(name: &str, value: &str) -> bool {
    const TOKEN_PUNCT: &[u8] = b"!#$%&'*+-.^_`|~";
    let name_ok = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || TOKEN_PUNCT.contains(&b));
    let value_ok = !value.bytes().any(|b| matches!(b, b'\r' | b'\n' | 0));
    name_ok && value_ok
}
