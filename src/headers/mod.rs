//! Header containers used on both sides of the adapter.
//!
//! [`HeaderSet`] is the single-message header model that downstream
//! consumers read. [`Http2Headers`] is the protocol-header container handed to
//! the message assembler when a message is constructed.

mod http2;
pub mod names;

pub use http2::{Http2Headers, Http2HeadersBuilder};

/// Ordered multimap of header names to values.
///
/// Names are stored lowercase and compared without regard to ASCII case.
/// Insertion order is preserved across names and across repeated values of
/// the same name.
///
/// # Examples
///
/// ```
/// use h2priority::headers::HeaderSet;
///
/// let mut headers = HeaderSet::new();
/// headers.add("Accept", "text/html");
/// headers.add("accept", "text/plain");
/// headers.set("content-type", "text/html");
///
/// assert_eq!(headers.get_all("ACCEPT").count(), 2);
/// assert_eq!(headers.get("content-type"), Some("text/html"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    /// Create an empty header set.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Append a value for `name`, keeping any values already present.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        self.entries.push((name.to_ascii_lowercase(), value.into()));
    }

    /// Replace every value for `name` with the single `value`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.remove(name);
        self.add(name, value);
    }

    /// Remove every value for `name`.
    ///
    /// Returns `true` if at least one entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.entries.len() != before
    }

    /// Merge `other` into this set, overwriting by name.
    ///
    /// Every name present in `other` first loses its existing values here;
    /// then all of `other`'s entries are appended in their original order.
    /// Names absent from `other` are left untouched.
    pub fn set_all(&mut self, other: &HeaderSet) {
        for (name, _) in &other.entries {
            self.remove(name);
        }
        self.entries.extend(other.entries.iter().cloned());
    }

    /// First value recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> { self.get_all(name).next() }

    /// All values recorded for `name`, in insertion order.
    pub fn get_all<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether any value is recorded for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|(key, _)| key.eq_ignore_ascii_case(name))
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of entries, counting repeated names separately.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Whether the set holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<'a> FromIterator<(&'a str, &'a str)> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut headers = HeaderSet::new();
        for (name, value) in iter {
            headers.add(name, value);
        }
        headers
    }
}
