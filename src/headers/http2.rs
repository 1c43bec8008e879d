//! Protocol-header container passed to the message assembler.

use super::HeaderSet;

/// HTTP/2 header block: pseudo-header fields plus regular fields.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Http2Headers {
    method: Option<String>,
    path: Option<String>,
    status: Option<u16>,
    headers: HeaderSet,
}

impl Http2Headers {
    /// Start building a header block.
    #[must_use]
    pub fn builder() -> Http2HeadersBuilder { Http2HeadersBuilder::default() }

    /// `:method` pseudo-header.
    #[must_use]
    pub fn method(&self) -> Option<&str> { self.method.as_deref() }

    /// `:path` pseudo-header.
    #[must_use]
    pub fn path(&self) -> Option<&str> { self.path.as_deref() }

    /// `:status` pseudo-header.
    #[must_use]
    pub fn status(&self) -> Option<u16> { self.status }

    /// Regular (non-pseudo) header fields.
    #[must_use]
    pub fn headers(&self) -> &HeaderSet { &self.headers }

    /// Split into the regular fields, discarding the pseudo-headers.
    #[must_use]
    pub fn into_headers(self) -> HeaderSet { self.headers }
}

/// Builder for [`Http2Headers`].
///
/// # Examples
///
/// ```
/// use h2priority::headers::Http2Headers;
///
/// let headers = Http2Headers::builder()
///     .method("GET")
///     .path("/index.html")
///     .add("accept", "text/html")
///     .build();
///
/// assert_eq!(headers.method(), Some("GET"));
/// assert_eq!(headers.headers().get("accept"), Some("text/html"));
/// ```
#[derive(Debug, Default)]
pub struct Http2HeadersBuilder {
    inner: Http2Headers,
}

impl Http2HeadersBuilder {
    /// Set the `:method` pseudo-header.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.inner.method = Some(method.into());
        self
    }

    /// Set the `:path` pseudo-header.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.inner.path = Some(path.into());
        self
    }

    /// Set the `:status` pseudo-header.
    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.inner.status = Some(status);
        self
    }

    /// Append a regular header field.
    #[must_use]
    pub fn add(mut self, name: &str, value: impl Into<String>) -> Self {
        self.inner.headers.add(name, value);
        self
    }

    /// Append a regular header field through a mutable reference.
    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        self.inner.headers.add(name, value);
    }

    /// Finish the header block.
    #[must_use]
    pub fn build(self) -> Http2Headers { self.inner }
}
