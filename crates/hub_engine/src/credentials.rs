//! API credentials injected into the search backend.

use std::fmt;

/// Secret API key. Never exposed through `Debug` or `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Wraps `value` unless it is blank.
    pub fn non_blank(value: impl Into<String>) -> Option<Self> {
        let key = Self::new(value);
        (!key.is_blank()).then_some(key)
    }

    /// Exposes the raw key. Only for building the outgoing request.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(••••••••)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "••••••••")
    }
}

/// Keys for both upstream services; either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    pub youtube: Option<ApiKey>,
    pub news: Option<ApiKey>,
}
