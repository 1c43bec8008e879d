//! Canonical error and result types for the crate.

use thiserror::Error;

use crate::{assembler::AssemblyError, stream::StreamId};

/// Errors surfaced by [`crate::PriorityAdapter`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A PRIORITY frame referenced a stream that has neither a message nor
    /// any earlier priority signal.
    #[error("priority frame received for unknown stream id {stream}")]
    UnknownStream {
        /// Stream named by the PRIORITY frame.
        stream: StreamId,
    },
    /// The message assembler rejected an operation.
    #[error("message assembly failed: {0}")]
    Assembly(#[from] AssemblyError),
}

impl Error {
    /// Whether the error is an HTTP/2 protocol error the connection should
    /// answer with connection-level remediation.
    #[must_use]
    pub fn is_protocol_error(&self) -> bool { matches!(self, Self::UnknownStream { .. }) }
}

/// Result alias used by the adapter's public API.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    #[test]
    fn unknown_stream_names_the_stream() {
        let err = Error::UnknownStream {
            stream: StreamId(11),
        };
        assert_eq!(
            err.to_string(),
            "priority frame received for unknown stream id 11"
        );
        assert!(err.is_protocol_error());
    }

    #[test]
    fn assembly_errors_convert() {
        let limit = NonZeroUsize::new(4).expect("non-zero");
        let err: Error = AssemblyError::MessageTooLarge {
            stream: StreamId(1),
            attempted: 8,
            limit,
        }
        .into();
        assert!(!err.is_protocol_error());
        assert!(err.to_string().starts_with("message assembly failed:"));
    }
}
