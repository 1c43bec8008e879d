//! Header blocks for messages synthesized outside the message flow.
//!
//! A PRIORITY frame can arrive on a stream that never carries HEADERS. The
//! adapter still surfaces the priority information by building a minimal
//! message whose placeholder pseudo-headers mark it as synthetic.

use crate::{
    config::Role,
    headers::{
        HeaderSet,
        Http2Headers,
        Http2HeadersBuilder,
        names::{
            OUT_OF_MESSAGE_SEQUENCE_METHOD,
            OUT_OF_MESSAGE_SEQUENCE_PATH,
            OUT_OF_MESSAGE_SEQUENCE_STATUS,
        },
    },
};

/// Builder preloaded with the placeholder pseudo-headers for `role`.
///
/// Servers receive requests, so the placeholder is a request line; clients
/// receive responses, so the placeholder is a status.
#[must_use]
pub fn placeholder_builder(role: Role) -> Http2HeadersBuilder {
    let builder = Http2Headers::builder();
    match role {
        Role::Server => builder
            .method(OUT_OF_MESSAGE_SEQUENCE_METHOD)
            .path(OUT_OF_MESSAGE_SEQUENCE_PATH),
        Role::Client => builder.status(OUT_OF_MESSAGE_SEQUENCE_STATUS),
    }
}

/// Header block carrying `pending` under the placeholders for `role`.
#[must_use]
pub fn synthesize_headers(role: Role, pending: &HeaderSet) -> Http2Headers {
    let mut builder = placeholder_builder(role);
    for (name, value) in pending.iter() {
        builder.push(name, value);
    }
    builder.build()
}
