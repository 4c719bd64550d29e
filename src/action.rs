use crate::address::NodeAddress;
use crate::classify::ClusterState;

/// What the operator should see, or what should happen next, after a
/// discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A node is already initialized; point future operations at it.
    ReportRedirect(NodeAddress),
    /// Exactly one uninitialized candidate, safe to initialize.
    AutoInit(NodeAddress),
    /// Several uninitialized candidates; the operator must pick one.
    ReportAmbiguous(Vec<NodeAddress>),
    /// Nothing answered under the queried service name.
    ReportNotFound,
}

#[must_use]
pub fn select(state: ClusterState) -> Action {
    match state {
        ClusterState::Initialized { address } => Action::ReportRedirect(address),
        ClusterState::Empty => Action::ReportNotFound,
        ClusterState::Uninitialized { mut addresses } => match addresses.len() {
            0 => Action::ReportNotFound,
            1 => Action::AutoInit(addresses.remove(0)),
            _ => Action::ReportAmbiguous(addresses),
        },
    }
}
