use std::fmt;

/// Reachable endpoint of one cluster member, e.g. `https://10.0.0.1:8200`.
///
/// Opaque to the decision logic: it is compared and printed, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeAddress(String);

impl NodeAddress {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds `{scheme}://{host}:{port}`, bracketing IPv6 literals.
    #[must_use]
    pub fn from_parts(scheme: &str, host: &str, port: u16) -> Self {
        if host.contains(':') && !host.starts_with('[') {
            Self(format!("{scheme}://[{host}]:{port}"))
        } else {
            Self(format!("{scheme}://{host}:{port}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeAddress {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}
