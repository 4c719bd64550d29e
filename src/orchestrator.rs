use std::fmt;

use tracing::{info, warn};

use crate::action::{Action, select};
use crate::address::NodeAddress;
use crate::classify::classify;
use crate::discovery::ServiceCatalog;
use crate::error::{DiscoveryError, InitError, KeyKind, ProbeError};
use crate::probe::{NodeApi, NodeStatus, StatusProbe};
use crate::request::InitRequest;

/// Key material returned by a successful initialization.
///
/// Held only long enough to be shown to the operator.
#[derive(Clone, PartialEq, Eq)]
pub struct InitResult {
    pub unseal_keys: Vec<String>,
    pub recovery_keys: Vec<String>,
    pub root_token: String,
}

impl fmt::Debug for InitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitResult")
            .field("unseal_keys", &self.unseal_keys.len())
            .field("recovery_keys", &self.recovery_keys.len())
            .field("root_token", &"<redacted>")
            .finish()
    }
}

/// A key paired with its 1-based position in the server's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedKey<'a> {
    pub number: usize,
    pub value: &'a str,
}

impl InitResult {
    pub fn numbered_unseal_keys(&self) -> impl Iterator<Item = NumberedKey<'_>> {
        number(&self.unseal_keys)
    }

    pub fn numbered_recovery_keys(&self) -> impl Iterator<Item = NumberedKey<'_>> {
        number(&self.recovery_keys)
    }
}

fn number(keys: &[String]) -> impl Iterator<Item = NumberedKey<'_>> {
    keys.iter().enumerate().map(|(idx, key)| NumberedKey {
        number: idx + 1,
        value: key,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// Drives discovery, classification and initialization against explicit
/// targets. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct Orchestrator<C, N> {
    catalog: C,
    nodes: N,
}

impl<C: ServiceCatalog, N: NodeApi> Orchestrator<C, N> {
    pub fn new(catalog: C, nodes: N) -> Self {
        Self { catalog, nodes }
    }

    /// Looks up `service`, probes the candidates in order and picks the next
    /// step.
    ///
    /// # Errors
    /// Returns [`DiscoverError::Discovery`] if the catalog lookup fails and
    /// [`DiscoverError::Probe`] on the first unreachable candidate.
    pub async fn discover(&self, service: &str) -> Result<Action, DiscoverError> {
        let addresses = self.catalog.lookup(service).await?;
        info!(
            "Discovered {} candidate(s) under service '{service}'",
            addresses.len()
        );
        let state = classify(&self.nodes, &addresses).await?;
        Ok(select(state))
    }

    /// Initializes the node at `address` and checks the returned key counts.
    ///
    /// # Errors
    /// Passes through [`InitError`] from the node, including
    /// [`InitError::AlreadyInitialized`]. Returns
    /// [`InitError::KeyCountMismatch`] if the server returned a different
    /// number of keys than requested.
    pub async fn initialize(
        &self,
        address: &NodeAddress,
        request: &InitRequest,
    ) -> Result<InitResult, InitError> {
        info!("Initializing {address}");
        let result = self.nodes.initialize(address, request).await?;
        check_key_count(
            address,
            KeyKind::Unseal,
            request.expected_unseal_keys(),
            &result,
        )?;
        check_key_count(
            address,
            KeyKind::Recovery,
            request.expected_recovery_keys(),
            &result,
        )?;
        info!("Initialized {address}");
        Ok(result)
    }

    /// # Errors
    /// Returns [`ProbeError`] if the node cannot be queried.
    pub async fn check_status(&self, address: &NodeAddress) -> Result<NodeStatus, ProbeError> {
        self.nodes.probe(address).await
    }
}

fn check_key_count(
    address: &NodeAddress,
    kind: KeyKind,
    expected: usize,
    result: &InitResult,
) -> Result<(), InitError> {
    let actual = match kind {
        KeyKind::Unseal => result.unseal_keys.len(),
        KeyKind::Recovery => result.recovery_keys.len(),
    };
    if actual == expected {
        return Ok(());
    }
    warn!("{address} returned {actual} {kind} keys, expected {expected}");
    Err(InitError::KeyCountMismatch {
        address: address.clone(),
        kind,
        expected,
        actual,
        result: Box::new(result.clone()),
    })
}
