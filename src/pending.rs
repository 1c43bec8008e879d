//! Priority headers collected before a message exists.
//!
//! `PendingHeaderStore` keeps at most one [`HeaderSet`] per stream. Records
//! are created lazily on the first priority event for a stream without a
//! message and live until the stream's message tracking is torn down.

use std::collections::{HashMap, hash_map::Entry};

use log::debug;

use crate::{
    headers::{
        HeaderSet,
        names::{STREAM_DEPENDENCY_ID, STREAM_WEIGHT},
    },
    stream::{Parent, StreamId},
};

/// Per-connection map of pending priority headers keyed by stream.
///
/// # Examples
///
/// ```
/// use h2priority::{
///     headers::{HeaderSet, names::STREAM_WEIGHT},
///     pending::PendingHeaderStore,
///     stream::StreamId,
/// };
///
/// let mut store = PendingHeaderStore::default();
/// let mut weight = HeaderSet::new();
/// weight.set(STREAM_WEIGHT, "32");
/// store.import(StreamId(3), weight);
///
/// let mut target = HeaderSet::new();
/// store.export(StreamId(3), &mut target);
/// assert_eq!(target.get(STREAM_WEIGHT), Some("32"));
/// assert!(store.contains(StreamId(3)));
/// ```
#[derive(Debug, Default)]
pub struct PendingHeaderStore {
    records: HashMap<StreamId, HeaderSet>,
}

impl PendingHeaderStore {
    /// Record `headers` for `stream`, merging into any existing record.
    pub fn import(&mut self, stream: StreamId, headers: HeaderSet) {
        match self.records.entry(stream) {
            Entry::Occupied(mut entry) => entry.get_mut().set_all(&headers),
            Entry::Vacant(entry) => {
                debug!("pending priority record created: stream={stream}");
                entry.insert(headers);
            }
        }
        crate::metrics::inc_pending_imports();
    }

    /// Merge `headers` into the record for `stream` only if one exists.
    ///
    /// Keeps a record that was already exported to a live message in step
    /// with that message, so a later export cannot restore a stale value.
    pub fn refresh(&mut self, stream: StreamId, headers: &HeaderSet) {
        if let Some(record) = self.records.get_mut(&stream) {
            record.set_all(headers);
        }
    }

    /// Merge the record for `stream`, if any, into `target`.
    ///
    /// The record stays in place so later header phases of the same stream
    /// see the same fields.
    pub fn export(&self, stream: StreamId, target: &mut HeaderSet) {
        if let Some(record) = self.records.get(&stream) {
            target.set_all(record);
        }
    }

    /// Drop stale priority fields from an existing record after the stream
    /// lost its parent.
    ///
    /// [`Parent::None`] strips both the dependency and the weight;
    /// [`Parent::ConnectionRoot`] strips only the dependency. A missing record
    /// is not created and an existing one is never deleted.
    pub fn strip_priority(&mut self, stream: StreamId, parent: Parent) {
        let Some(record) = self.records.get_mut(&stream) else {
            return;
        };
        match parent {
            Parent::None => {
                record.remove(STREAM_DEPENDENCY_ID);
                record.remove(STREAM_WEIGHT);
            }
            Parent::ConnectionRoot => {
                record.remove(STREAM_DEPENDENCY_ID);
            }
            Parent::Stream(_) => {}
        }
    }

    /// Remove and return the record for `stream`.
    pub fn remove(&mut self, stream: StreamId) -> Option<HeaderSet> {
        let removed = self.records.remove(&stream);
        if removed.is_some() {
            debug!("pending priority record removed: stream={stream}");
        }
        removed
    }

    /// The record for `stream`, if any.
    #[must_use]
    pub fn get(&self, stream: StreamId) -> Option<&HeaderSet> { self.records.get(&stream) }

    /// Whether a record exists for `stream`.
    #[must_use]
    pub fn contains(&self, stream: StreamId) -> bool { self.records.contains_key(&stream) }

    /// Number of streams with a pending record.
    #[must_use]
    pub fn len(&self) -> usize { self.records.len() }

    /// Whether no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
