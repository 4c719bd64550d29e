use tracing::debug;

use crate::address::NodeAddress;
use crate::error::ProbeError;
use crate::probe::{NodeStatus, StatusProbe};

/// Result of one discovery pass over the candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterState {
    Initialized { address: NodeAddress },
    Uninitialized { addresses: Vec<NodeAddress> },
    Empty,
}

/// Probes `addresses` one at a time, in order.
///
/// Stops at the first initialized node; later candidates are never probed.
/// Uninitialized nodes are collected in discovery order.
///
/// # Errors
/// The first [`ProbeError`] aborts the pass. A partial classification is
/// never returned.
pub async fn classify<P: StatusProbe>(
    probe: &P,
    addresses: &[NodeAddress],
) -> Result<ClusterState, ProbeError> {
    let mut uninitialized = Vec::new();
    for address in addresses {
        match probe.probe(address).await? {
            NodeStatus::Initialized => {
                debug!("Found initialized node at {address}");
                return Ok(ClusterState::Initialized {
                    address: address.clone(),
                });
            }
            NodeStatus::NotInitialized => {
                debug!("Node at {address} is not initialized");
                uninitialized.push(address.clone());
            }
        }
    }

    if uninitialized.is_empty() {
        Ok(ClusterState::Empty)
    } else {
        Ok(ClusterState::Uninitialized {
            addresses: uninitialized,
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use reqwest::StatusCode;

    use super::*;
    use crate::error::ApiError;

    /// Answers from a fixed table and records every address it was asked about.
    #[derive(Default)]
    pub(crate) struct FakeProbe {
        answers: HashMap<String, Option<bool>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeProbe {
        pub(crate) fn with(mut self, address: &str, initialized: bool) -> Self {
            self.answers.insert(address.to_string(), Some(initialized));
            self
        }

        pub(crate) fn failing(mut self, address: &str) -> Self {
            self.answers.insert(address.to_string(), None);
            self
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    impl StatusProbe for FakeProbe {
        async fn probe(&self, address: &NodeAddress) -> Result<NodeStatus, ProbeError> {
            self.calls
                .lock()
                .expect("calls lock")
                .push(address.to_string());
            match self.answers.get(address.as_str()) {
                Some(Some(initialized)) => Ok(NodeStatus::from(*initialized)),
                _ => Err(ProbeError {
                    address: address.clone(),
                    source: ApiError::Status {
                        status: StatusCode::SERVICE_UNAVAILABLE,
                        message: "unreachable".to_string(),
                    },
                }),
            }
        }
    }
}
