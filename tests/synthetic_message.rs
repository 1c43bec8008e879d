//! Tests for PRIORITY frames on streams without a message.

use h2priority::{
    Error,
    MessageHead,
    StreamId,
    headers::names::{STREAM_DEPENDENCY_ID, STREAM_WEIGHT},
};
use h2priority_testing::{
    TestAdapter,
    TestStream,
    client_adapter,
    fixtures::{change_parent, change_weight, get_request, priority_frame},
    server_adapter,
};
use rstest::rstest;

fn park_priority(adapter: &mut TestAdapter) {
    let stream = TestStream::new(7).depending_on(5).with_weight(16);
    change_parent(adapter, &stream);
    change_weight(adapter, &stream);
}

#[rstest]
fn server_synthesizes_placeholder_request(#[from(server_adapter)] mut adapter: TestAdapter) {
    park_priority(&mut adapter);

    adapter
        .on_priority_event(priority_frame(7))
        .expect("stream has pending priority");

    let delivered = adapter.assembler().delivered();
    assert_eq!(delivered.len(), 1);
    let (stream, message) = &delivered[0];
    assert_eq!(*stream, StreamId(7));
    assert_eq!(
        message.head(),
        &MessageHead::Request {
            method: "OPTIONS".into(),
            path: String::new(),
        }
    );
    assert_eq!(message.active_headers().get(STREAM_DEPENDENCY_ID), Some("5"));
    assert_eq!(message.active_headers().get(STREAM_WEIGHT), Some("16"));
    assert!(!adapter.pending().contains(StreamId(7)));
}

#[rstest]
fn client_synthesizes_placeholder_response(#[from(client_adapter)] mut adapter: TestAdapter) {
    park_priority(&mut adapter);

    adapter
        .on_priority_event(priority_frame(7))
        .expect("stream has pending priority");

    let (_, message) = &adapter.assembler().delivered()[0];
    assert_eq!(message.head(), &MessageHead::Response { status: 200 });
    assert_eq!(message.active_headers().get(STREAM_DEPENDENCY_ID), Some("5"));
    assert_eq!(message.active_headers().get(STREAM_WEIGHT), Some("16"));
    assert!(adapter.pending().is_empty());
}

#[rstest]
fn second_priority_frame_is_unknown(#[from(server_adapter)] mut adapter: TestAdapter) {
    park_priority(&mut adapter);
    adapter
        .on_priority_event(priority_frame(7))
        .expect("stream has pending priority");

    let err = adapter
        .on_priority_event(priority_frame(7))
        .expect_err("record was consumed");
    assert_eq!(
        err,
        Error::UnknownStream {
            stream: StreamId(7)
        }
    );
    assert_eq!(adapter.assembler().delivered().len(), 1);
}

#[rstest]
fn unknown_stream_fails_without_side_effects(#[from(server_adapter)] mut adapter: TestAdapter) {
    change_weight(&mut adapter, &TestStream::new(3).with_weight(32));
    let before = adapter.pending().get(StreamId(3)).cloned();

    let err = adapter
        .on_priority_event(priority_frame(11))
        .expect_err("stream 11 was never observed");

    assert!(err.is_protocol_error());
    assert_eq!(err.to_string(), "priority frame received for unknown stream id 11");
    assert!(adapter.assembler().delivered().is_empty());
    assert_eq!(adapter.assembler().constructed(), 0);
    assert_eq!(adapter.pending().len(), 1);
    assert_eq!(adapter.pending().get(StreamId(3)).cloned(), before);
}

#[rstest]
fn priority_frame_for_live_message_changes_nothing(
    #[from(server_adapter)] mut adapter: TestAdapter,
) {
    adapter
        .on_headers_read(StreamId(3), get_request(), false)
        .expect("headers accepted");
    let before = adapter.assembler().message(StreamId(3)).cloned();

    adapter
        .on_priority_event(priority_frame(3))
        .expect("live message absorbs the frame");

    assert_eq!(adapter.assembler().message(StreamId(3)).cloned(), before);
    assert!(adapter.assembler().delivered().is_empty());
    assert_eq!(adapter.assembler().constructed(), 0);
}
