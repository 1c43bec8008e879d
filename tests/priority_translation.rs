//! Tests for priority events applied to live messages.

use h2priority::{
    Parent,
    StreamId,
    headers::names::{STREAM_DEPENDENCY_ID, STREAM_WEIGHT},
};
use h2priority_testing::{
    TestAdapter,
    TestStream,
    fixtures::{change_parent, change_weight, get_request},
    server_adapter,
};
use rstest::{fixture, rstest};

/// Adapter tracking a live `GET /` request on stream 3.
#[fixture]
fn live_stream(#[from(server_adapter)] mut adapter: TestAdapter) -> TestAdapter {
    adapter
        .on_headers_read(StreamId(3), get_request(), false)
        .expect("headers accepted");
    adapter
}

#[rstest]
fn weight_targets_primary_headers_before_content(#[from(live_stream)] mut adapter: TestAdapter) {
    change_weight(&mut adapter, &TestStream::new(3).with_weight(32));

    let message = adapter.assembler().message(StreamId(3)).expect("live message");
    assert_eq!(message.headers().get(STREAM_WEIGHT), Some("32"));
    assert!(!message.trailing_headers().contains(STREAM_WEIGHT));
}

#[rstest]
fn weight_targets_trailing_headers_after_content(#[from(live_stream)] mut adapter: TestAdapter) {
    adapter
        .on_data_read(StreamId(3), b"hello", false)
        .expect("data accepted");
    change_weight(&mut adapter, &TestStream::new(3).with_weight(32));

    let message = adapter.assembler().message(StreamId(3)).expect("live message");
    assert_eq!(message.trailing_headers().get(STREAM_WEIGHT), Some("32"));
    assert!(!message.headers().contains(STREAM_WEIGHT));
}

#[rstest]
fn dependency_targets_active_headers(#[from(live_stream)] mut adapter: TestAdapter) {
    adapter
        .on_data_read(StreamId(3), b"hello", false)
        .expect("data accepted");
    change_parent(&mut adapter, &TestStream::new(3).depending_on(1));

    let message = adapter.assembler().message(StreamId(3)).expect("live message");
    assert_eq!(message.trailing_headers().get(STREAM_DEPENDENCY_ID), Some("1"));
    assert!(!message.headers().contains(STREAM_DEPENDENCY_ID));
}

#[rstest]
fn detaching_strips_both_header_sets(#[from(live_stream)] mut adapter: TestAdapter) {
    let stream = TestStream::new(3).depending_on(1).with_weight(32);
    change_parent(&mut adapter, &stream);
    change_weight(&mut adapter, &stream);
    adapter
        .on_data_read(StreamId(3), b"hello", false)
        .expect("data accepted");
    change_weight(&mut adapter, &stream.with_weight(64));

    change_parent(&mut adapter, &stream.with_parent(Parent::None));

    let message = adapter.assembler().message(StreamId(3)).expect("live message");
    for headers in [message.headers(), message.trailing_headers()] {
        assert!(!headers.contains(STREAM_DEPENDENCY_ID));
        assert!(!headers.contains(STREAM_WEIGHT));
    }
}

#[rstest]
fn detaching_strips_fields_held_by_one_set_only(#[from(live_stream)] mut adapter: TestAdapter) {
    change_weight(&mut adapter, &TestStream::new(3).with_weight(32));

    change_parent(&mut adapter, &TestStream::new(3).with_parent(Parent::None));

    let message = adapter.assembler().message(StreamId(3)).expect("live message");
    assert!(!message.headers().contains(STREAM_WEIGHT));
    assert!(message.trailing_headers().is_empty());
}

#[rstest]
fn detached_stream_delivers_without_priority_fields(
    #[from(server_adapter)] mut adapter: TestAdapter,
) {
    let stream = TestStream::new(3).depending_on(1).with_weight(32);
    change_parent(&mut adapter, &stream);
    change_weight(&mut adapter, &stream);
    adapter
        .on_headers_read(StreamId(3), get_request(), false)
        .expect("headers accepted");

    change_parent(&mut adapter, &stream.with_parent(Parent::None));
    adapter
        .on_data_read(StreamId(3), b"done", true)
        .expect("data accepted");

    let (_, message) = &adapter.assembler().delivered()[0];
    for headers in [message.headers(), message.trailing_headers()] {
        assert!(!headers.contains(STREAM_DEPENDENCY_ID));
        assert!(!headers.contains(STREAM_WEIGHT));
    }
}
