//! Display output for adapter and assembly errors.

use std::num::NonZeroUsize;

use h2priority::{AssemblyError, Error, StreamId};
use rstest::rstest;

#[rstest]
#[case(
    Error::UnknownStream { stream: StreamId(9) },
    "priority frame received for unknown stream id 9"
)]
#[case(
    Error::Assembly(AssemblyError::MissingMessage { stream: StreamId(3) }),
    "message assembly failed: data received for stream 3 without a message"
)]
#[case(
    Error::Assembly(AssemblyError::MissingPseudoHeader { stream: StreamId(5), name: ":method" }),
    "message assembly failed: missing pseudo-header :method on stream 5"
)]
fn errors_render_context(#[case] error: Error, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[test]
fn size_limit_error_names_both_sizes() {
    let error = AssemblyError::MessageTooLarge {
        stream: StreamId(1),
        attempted: 10,
        limit: NonZeroUsize::new(8).expect("non-zero"),
    };
    assert_eq!(
        error.to_string(),
        "message on stream 1 exceeds size limit: 10 bytes > 8 bytes"
    );
}
