pub mod action;
pub mod address;
pub mod args;
pub mod classify;
pub mod config;
pub mod discovery;
pub mod error;
pub mod openbao;
pub mod orchestrator;
pub mod pgp_keys;
pub mod probe;
pub mod request;

pub use action::{Action, select};
pub use address::NodeAddress;
pub use args::Args;
pub use classify::{ClusterState, classify};
pub use orchestrator::{InitResult, Orchestrator};
pub use probe::NodeStatus;
pub use request::InitRequest;
