//! Reserved header names and placeholder values.
//!
//! The extension names carry an `x-http2-` prefix so they cannot collide with
//! fields a peer sends on the wire.

use super::HeaderSet;

/// Header carrying the id of the stream this stream depends on.
pub const STREAM_DEPENDENCY_ID: &str = "x-http2-stream-dependency-id";

/// Header carrying the stream weight.
pub const STREAM_WEIGHT: &str = "x-http2-stream-weight";

/// Method placed on requests synthesized outside the message flow.
pub const OUT_OF_MESSAGE_SEQUENCE_METHOD: &str = "OPTIONS";

/// Path placed on requests synthesized outside the message flow.
pub const OUT_OF_MESSAGE_SEQUENCE_PATH: &str = "";

/// Status placed on responses synthesized outside the message flow.
pub const OUT_OF_MESSAGE_SEQUENCE_STATUS: u16 = 200;

/// Remove every priority-derived field from `headers`.
pub fn remove_priority_headers(headers: &mut HeaderSet) {
    headers.remove(STREAM_DEPENDENCY_ID);
    headers.remove(STREAM_WEIGHT);
}
