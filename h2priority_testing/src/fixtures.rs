//! `rstest` fixtures and event helpers for priority adapter tests.

use h2priority::{
    AdapterConfig,
    Http2Headers,
    Parent,
    PriorityAdapter,
    PriorityEvent,
    PriorityFrame,
    Role,
    StreamId,
    Weight,
};
use rstest::fixture;

use crate::{TestAssembler, TestStream};

/// Adapter over the recording assembler.
pub type TestAdapter = PriorityAdapter<TestAssembler>;

/// Server-role adapter with an empty assembler.
#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn server_adapter() -> TestAdapter {
    PriorityAdapter::new(TestAssembler::new(), AdapterConfig::new(Role::Server))
}

/// Client-role adapter with an empty assembler.
#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn client_adapter() -> TestAdapter {
    PriorityAdapter::new(TestAssembler::new(), AdapterConfig::new(Role::Client))
}

/// Feed a parent change for `stream`, whose new parent is `stream.parent()`.
///
/// # Panics
///
/// Panics if the adapter rejects the event, which it never does for tree
/// mutations.
pub fn change_parent(adapter: &mut TestAdapter, stream: &TestStream) {
    adapter
        .on_priority_event(PriorityEvent::ParentChanged {
            stream,
            old_parent: Parent::ConnectionRoot,
        })
        .expect("parent changes are infallible");
}

/// Feed a weight change for `stream`, whose new weight is `stream.weight()`.
///
/// # Panics
///
/// Panics if the adapter rejects the event, which it never does for tree
/// mutations.
pub fn change_weight(adapter: &mut TestAdapter, stream: &TestStream) {
    adapter
        .on_priority_event(PriorityEvent::WeightChanged {
            stream,
            old_weight: Weight::DEFAULT,
        })
        .expect("weight changes are infallible");
}

/// PRIORITY frame event for `stream` with placeholder contents.
#[must_use]
pub fn priority_frame(stream: u32) -> PriorityEvent<'static> {
    PriorityEvent::PriorityRead(PriorityFrame {
        stream: StreamId(stream),
        dependency: StreamId::CONNECTION,
        weight: Weight::DEFAULT,
        exclusive: false,
    })
}

/// Minimal `GET /` request header block.
#[must_use]
pub fn get_request() -> Http2Headers { Http2Headers::builder().method("GET").path("/").build() }
