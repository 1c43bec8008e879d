#![doc(html_root_url = "https://docs.rs/h2priority/latest")]
//! Public API for the `h2priority` library.
//!
//! This crate translates HTTP/2 stream priority signalling into header
//! fields on single-exchange HTTP messages. Priority events that arrive
//! before a message exists are parked per stream and merged once the message
//! appears; a PRIORITY frame for a stream without any message produces a
//! synthesized placeholder message carrying the priority headers.

pub mod adapter;
pub mod assembler;
pub mod config;
pub mod error;
pub mod event;
pub mod headers;
pub mod message;
pub mod metrics;
pub mod pending;
pub mod stream;
pub mod synthetic;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use adapter::PriorityAdapter;
pub use assembler::{AssemblyError, MessageAssembler};
pub use config::{AdapterConfig, Role};
pub use error::{Error, Result};
pub use event::{PriorityEvent, PriorityFrame};
pub use headers::{HeaderSet, Http2Headers};
pub use message::{Message, MessageHead};
pub use pending::PendingHeaderStore;
pub use stream::{Parent, PriorityStream, StreamId, Weight};
