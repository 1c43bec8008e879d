//! Utilities for exercising a
//! [`PriorityAdapter`](h2priority::PriorityAdapter) in tests.
//!
//! The fixtures wrap the in-memory [`TestAssembler`] so tests can feed
//! priority and frame events and then inspect what was delivered.
//!
//! ```rust
//! use h2priority::{PriorityEvent, StreamId, Weight};
//! use h2priority_testing::{TestStream, server_adapter};
//!
//! let mut adapter = server_adapter();
//! let stream = TestStream::new(3).with_weight(32);
//! adapter
//!     .on_priority_event(PriorityEvent::WeightChanged {
//!         stream: &stream,
//!         old_weight: Weight::DEFAULT,
//!     })
//!     .unwrap();
//! assert!(adapter.pending().contains(StreamId(3)));
//! ```

pub mod fixtures;
pub mod logging;
pub mod metrics;

pub use fixtures::{TestAdapter, client_adapter, server_adapter};
pub use h2priority::test_helpers::{TestAssembler, TestStream};
pub use logging::{LoggerHandle, logger};
pub use metrics::{assert_counter_eq, debugging_recorder_setup};
