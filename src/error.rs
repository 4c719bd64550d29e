use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::address::NodeAddress;
use crate::orchestrator::InitResult;

/// Transport-level failure talking to a node or to the catalog.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Status { status: StatusCode, message: String },

    #[error("malformed response")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    /// Whether a non-success response carried `needle` in its error text.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        match self {
            ApiError::Status { message, .. } => message
                .to_ascii_lowercase()
                .contains(&needle.to_ascii_lowercase()),
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
#[error("failed to discover nodes under service name '{service}'")]
pub struct DiscoveryError {
    pub service: String,
    #[source]
    pub source: ApiError,
}

#[derive(Debug, Error)]
#[error("failed to check initialization status of {address}")]
pub struct ProbeError {
    pub address: NodeAddress,
    #[source]
    pub source: ApiError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Unseal,
    Recovery,
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyKind::Unseal => f.write_str("unseal"),
            KeyKind::Recovery => f.write_str("recovery"),
        }
    }
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("{address} is already initialized")]
    AlreadyInitialized { address: NodeAddress },

    #[error("failed to initialize {address}")]
    Request {
        address: NodeAddress,
        #[source]
        source: ApiError,
    },

    #[error("{address} returned a malformed init response: {reason}")]
    MalformedResponse {
        address: NodeAddress,
        reason: &'static str,
    },

    /// The node accepted the request and is now initialized, but the key
    /// material does not match what was asked for. `result` holds what the
    /// server returned so it can still be recorded.
    #[error("{address} returned {actual} {kind} keys, expected {expected}")]
    KeyCountMismatch {
        address: NodeAddress,
        kind: KeyKind,
        expected: usize,
        actual: usize,
        result: Box<InitResult>,
    },
}

impl InitError {
    #[must_use]
    pub fn address(&self) -> &NodeAddress {
        match self {
            InitError::AlreadyInitialized { address }
            | InitError::Request { address, .. }
            | InitError::MalformedResponse { address, .. }
            | InitError::KeyCountMismatch { address, .. } => address,
        }
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} must be at least 1")]
    ZeroShares { field: &'static str },

    #[error("{field} must be at most {max}, got {value}")]
    TooManyShares {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("{field} must be between 1 and {shares}, got {threshold}")]
    ThresholdOutOfRange {
        field: &'static str,
        threshold: u32,
        shares: u32,
    },

    #[error("stored_shares ({stored}) must not exceed secret_shares ({shares})")]
    StoredSharesExceedShares { stored: u32, shares: u32 },

    #[error("{field} has {keys} entries but {shares} shares were requested")]
    PgpKeyCountMismatch {
        field: &'static str,
        keys: usize,
        shares: u32,
    },

    #[error("{field} must be unset when recovery_shares is 0")]
    RecoveryNotRequested { field: &'static str },

    #[error("failed to read PGP key file {}", path.display())]
    PgpKeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PGP key entry '{entry}' is empty")]
    EmptyPgpKey { entry: String },
}
