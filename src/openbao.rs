use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::address::NodeAddress;
use crate::error::{ApiError, InitError, ProbeError};
use crate::orchestrator::InitResult;
use crate::probe::{NodeApi, NodeStatus, StatusProbe};
use crate::request::InitRequest;

const ALREADY_INITIALIZED: &str = "already initialized";

/// HTTP client bound to one node.
#[derive(Debug, Clone)]
pub struct OpenBaoClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct InitStatusResponse {
    initialized: bool,
}

#[derive(Debug, Deserialize)]
struct InitResponse {
    #[serde(default)]
    keys: Vec<String>,
    #[serde(default)]
    recovery_keys: Vec<String>,
    #[serde(default)]
    root_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct InitBody<'a> {
    secret_shares: u32,
    secret_threshold: u32,
    #[serde(skip_serializing_if = "is_zero")]
    stored_shares: u32,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pgp_keys: &'a [String],
    #[serde(skip_serializing_if = "is_zero")]
    recovery_shares: u32,
    #[serde(skip_serializing_if = "is_zero")]
    recovery_threshold: u32,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    recovery_pgp_keys: &'a [String],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl<'a> From<&'a InitRequest> for InitBody<'a> {
    fn from(request: &'a InitRequest) -> Self {
        Self {
            secret_shares: request.secret_shares(),
            secret_threshold: request.secret_threshold(),
            stored_shares: request.stored_shares(),
            pgp_keys: request.pgp_keys(),
            recovery_shares: request.recovery_shares(),
            recovery_threshold: request.recovery_threshold(),
            recovery_pgp_keys: request.recovery_pgp_keys(),
        }
    }
}

impl OpenBaoClient {
    /// Creates a client with its own connection pool.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(base_url, client))
    }

    #[must_use]
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// # Errors
    /// Returns an error if the request fails or the body is not an init status.
    pub async fn is_initialized(&self) -> Result<bool, ApiError> {
        let status: InitStatusResponse = self.get_json("sys/init").await?;
        Ok(status.initialized)
    }

    /// Sends the initialization request and returns the key material as-is.
    ///
    /// # Errors
    /// Returns an error if the request fails or the node rejects it.
    pub async fn init(&self, request: &InitRequest) -> Result<InitResult, ApiError> {
        let url = self.endpoint("sys/init");
        let response = self
            .client
            .put(url)
            .json(&InitBody::from(request))
            .send()
            .await?;
        let parsed: InitResponse = Self::parse_response(response).await?;
        Ok(InitResult {
            unseal_keys: parsed.keys,
            recovery_keys: parsed.recovery_keys,
            root_token: parsed.root_token,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: error_message(status, &text),
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn error_message(status: StatusCode, text: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(text) {
        Ok(body) if !body.errors.is_empty() => body.errors.join("; "),
        _ if text.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("empty response")
            .to_string(),
        _ => text.trim().to_string(),
    }
}

/// [`NodeApi`] over HTTP. Every call names its target explicitly; one
/// connection pool is shared across targets.
#[derive(Debug, Clone)]
pub struct HttpNodeApi {
    client: Client,
}

impl HttpNodeApi {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    fn node(&self, address: &NodeAddress) -> OpenBaoClient {
        OpenBaoClient::with_client(address.as_str(), self.client.clone())
    }
}

impl StatusProbe for HttpNodeApi {
    async fn probe(&self, address: &NodeAddress) -> Result<NodeStatus, ProbeError> {
        debug!("Checking initialization status of {address}");
        self.node(address)
            .is_initialized()
            .await
            .map(NodeStatus::from)
            .map_err(|source| ProbeError {
                address: address.clone(),
                source,
            })
    }
}

impl NodeApi for HttpNodeApi {
    async fn initialize(
        &self,
        address: &NodeAddress,
        request: &InitRequest,
    ) -> Result<InitResult, InitError> {
        debug!("Sending init request to {address}");
        let result = self.node(address).init(request).await.map_err(|source| {
            if source.mentions(ALREADY_INITIALIZED) {
                InitError::AlreadyInitialized {
                    address: address.clone(),
                }
            } else {
                InitError::Request {
                    address: address.clone(),
                    source,
                }
            }
        })?;
        if result.root_token.trim().is_empty() {
            return Err(InitError::MalformedResponse {
                address: address.clone(),
                reason: "missing root token",
            });
        }
        Ok(result)
    }
}
