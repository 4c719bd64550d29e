use std::future::Future;

use crate::address::NodeAddress;
use crate::error::{InitError, ProbeError};
use crate::orchestrator::InitResult;
use crate::request::InitRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Initialized,
    NotInitialized,
}

impl From<bool> for NodeStatus {
    fn from(initialized: bool) -> Self {
        if initialized {
            NodeStatus::Initialized
        } else {
            NodeStatus::NotInitialized
        }
    }
}

/// Reports whether a single node has been initialized.
pub trait StatusProbe {
    /// # Errors
    /// Returns [`ProbeError`] if the node is unreachable or its answer cannot
    /// be parsed.
    fn probe(
        &self,
        address: &NodeAddress,
    ) -> impl Future<Output = Result<NodeStatus, ProbeError>> + Send;
}

/// The remote node operations the orchestrator needs.
pub trait NodeApi: StatusProbe {
    /// Issues one initialization call. Not idempotent.
    ///
    /// # Errors
    /// Returns [`InitError::AlreadyInitialized`] when the node refuses because
    /// it is already initialized, or another [`InitError`] on failure.
    fn initialize(
        &self,
        address: &NodeAddress,
        request: &InitRequest,
    ) -> impl Future<Output = Result<InitResult, InitError>> + Send;
}
