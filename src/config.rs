//! Adapter configuration.
//!
//! The role decides which placeholder pseudo-headers a synthesized message
//! carries; header validation is forwarded to the message assembler.

/// Which end of the connection the adapter runs on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Role {
    /// Inbound messages are requests.
    #[default]
    Server,
    /// Inbound messages are responses.
    Client,
}

/// Settings for [`crate::PriorityAdapter`].
///
/// # Examples
///
/// ```
/// use h2priority::config::{AdapterConfig, Role};
///
/// let config = AdapterConfig::new(Role::Client).with_validate_headers(false);
/// assert_eq!(config.role(), Role::Client);
/// assert!(!config.validate_headers());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AdapterConfig {
    role: Role,
    validate_headers: bool,
}

impl AdapterConfig {
    /// Configuration for `role` with header validation enabled.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            validate_headers: true,
        }
    }

    /// Enable or disable header validation when constructing messages.
    #[must_use]
    pub fn with_validate_headers(mut self, validate: bool) -> Self {
        self.validate_headers = validate;
        self
    }

    /// Configured role.
    #[must_use]
    pub fn role(&self) -> Role { self.role }

    /// Whether messages are built with header validation.
    #[must_use]
    pub fn validate_headers(&self) -> bool { self.validate_headers }
}

impl Default for AdapterConfig {
    fn default() -> Self { Self::new(Role::default()) }
}
