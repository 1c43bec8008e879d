//! Metric helpers for `h2priority`.
//!
//! This module defines metric names and simple helper functions
//! wrapping the [`metrics`](https://docs.rs/metrics) crate. Without the
//! `metrics` feature the helpers compile to no-ops.

/// Name of the counter tracking imports into the pending header store.
pub const PENDING_IMPORTS: &str = "h2priority_pending_imports_total";
/// Name of the counter tracking messages synthesized from PRIORITY frames.
pub const SYNTHETIC_MESSAGES: &str = "h2priority_synthetic_messages_total";
/// Name of the counter tracking PRIORITY frames for unknown streams.
pub const UNKNOWN_STREAM_ERRORS: &str = "h2priority_unknown_stream_errors_total";

#[cfg(feature = "metrics")]
mod imp {
    use metrics::counter;

    pub fn inc_pending_imports() { counter!(super::PENDING_IMPORTS).increment(1); }

    pub fn inc_synthetic_messages() { counter!(super::SYNTHETIC_MESSAGES).increment(1); }

    pub fn inc_unknown_stream_errors() { counter!(super::UNKNOWN_STREAM_ERRORS).increment(1); }
}

#[cfg(not(feature = "metrics"))]
mod imp {
    pub fn inc_pending_imports() {}

    pub fn inc_synthetic_messages() {}

    pub fn inc_unknown_stream_errors() {}
}

/// Record an import into the pending header store.
pub fn inc_pending_imports() { imp::inc_pending_imports(); }

/// Record a synthesized message.
pub fn inc_synthetic_messages() { imp::inc_synthetic_messages(); }

/// Record a PRIORITY frame that referenced an unknown stream.
pub fn inc_unknown_stream_errors() { imp::inc_unknown_stream_errors(); }
