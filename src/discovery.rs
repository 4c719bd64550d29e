use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use crate::address::NodeAddress;
use crate::error::{ApiError, DiscoveryError};

const CONSUL_TOKEN_HEADER: &str = "X-Consul-Token";

/// Catalog lookup returning candidate nodes for a service name.
pub trait ServiceCatalog {
    /// Returns the registered addresses in catalog order.
    ///
    /// # Errors
    /// Returns [`DiscoveryError`] if the catalog cannot be queried or answers
    /// with something other than a service list.
    fn lookup(
        &self,
        service: &str,
    ) -> impl Future<Output = Result<Vec<NodeAddress>, DiscoveryError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ConsulSettings {
    pub address: String,
    pub token: Option<String>,
    pub datacenter: Option<String>,
    pub allow_stale: bool,
    /// Scheme used when building node addresses from catalog entries.
    pub node_scheme: String,
}

#[derive(Debug, Deserialize)]
struct CatalogService {
    #[serde(rename = "Address", default)]
    node_address: String,
    #[serde(rename = "ServiceAddress", default)]
    service_address: String,
    #[serde(rename = "ServicePort")]
    service_port: u16,
}

impl CatalogService {
    /// Consul leaves `ServiceAddress` empty when the service uses the node's
    /// address.
    fn host(&self) -> &str {
        if self.service_address.is_empty() {
            &self.node_address
        } else {
            &self.service_address
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsulCatalog {
    settings: ConsulSettings,
    client: Client,
}

impl ConsulCatalog {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(settings: ConsulSettings, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            settings,
            client: builder.build()?,
        })
    }

    /// The service name is a single path segment; `stale` and `dc` go into
    /// the query string, encoded.
    fn endpoint(&self, service: &str) -> Result<Url, ApiError> {
        let base = self.settings.address.trim();
        let invalid = |reason: String| ApiError::InvalidUrl {
            url: base.to_string(),
            reason,
        };
        let mut url = Url::parse(base).map_err(|err| invalid(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(["v1", "catalog", "service", service]);
        url.set_query(None);
        if self.settings.allow_stale || self.settings.datacenter.is_some() {
            let mut query = url.query_pairs_mut();
            if self.settings.allow_stale {
                query.append_key_only("stale");
            }
            if let Some(dc) = &self.settings.datacenter {
                query.append_pair("dc", dc);
            }
        }
        Ok(url)
    }

    async fn fetch(&self, service: &str) -> Result<Vec<CatalogService>, ApiError> {
        let mut request = self.client.get(self.endpoint(service)?);
        if let Some(token) = &self.settings.token {
            request = request.header(CONSUL_TOKEN_HEADER, token);
        }
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: text.trim().to_string(),
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl ServiceCatalog for ConsulCatalog {
    async fn lookup(&self, service: &str) -> Result<Vec<NodeAddress>, DiscoveryError> {
        debug!("Querying Consul catalog for service '{service}'");
        let entries = self.fetch(service).await.map_err(|source| DiscoveryError {
            service: service.to_string(),
            source,
        })?;
        Ok(entries
            .iter()
            .map(|entry| {
                NodeAddress::from_parts(&self.settings.node_scheme, entry.host(), entry.service_port)
            })
            .collect())
    }
}
