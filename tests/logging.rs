//! Tests for log output emitted while translating priority events.

use h2priority::StreamId;
use h2priority_testing::{
    LoggerHandle,
    TestStream,
    fixtures::{change_weight, priority_frame},
    logger,
    server_adapter,
};
use log::Level;
use rstest::rstest;

#[rstest]
fn unknown_stream_is_logged_as_warning(mut logger: LoggerHandle) {
    logger.clear();
    let mut adapter = server_adapter();

    adapter
        .on_priority_event(priority_frame(9))
        .expect_err("stream 9 was never observed");

    assert!(logger.drain_contains(Level::Warn, "unknown stream"));
}

#[rstest]
fn new_pending_record_is_logged(mut logger: LoggerHandle) {
    logger.clear();
    let mut adapter = server_adapter();

    change_weight(&mut adapter, &TestStream::new(3).with_weight(32));

    assert!(adapter.pending().contains(StreamId(3)));
    assert!(logger.drain_contains(Level::Debug, "pending priority record created: stream=3"));
}

#[rstest]
fn every_priority_event_is_logged_with_its_stream(mut logger: LoggerHandle) {
    logger.clear();
    let mut adapter = server_adapter();

    change_weight(&mut adapter, &TestStream::new(5).with_weight(32));

    assert!(logger.drain_contains(Level::Debug, "priority event: stream=5"));
}
