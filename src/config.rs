use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::discovery::ConsulSettings;
use crate::pgp_keys;
use crate::request::{DEFAULT_SECRET_SHARES, DEFAULT_SECRET_THRESHOLD, InitParams};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub address: String,
    pub consul: ConsulConfig,
    pub http: HttpSettings,
    pub init: InitSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConsulConfig {
    pub address: String,
    pub token: Option<String>,
    pub datacenter: Option<String>,
    pub allow_stale: bool,
    pub node_scheme: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    /// Per-request transport timeout, e.g. "60s". "0s" disables it.
    pub timeout: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InitSettings {
    pub key_shares: u32,
    pub key_threshold: u32,
    pub stored_shares: u32,
    #[serde(default)]
    pub pgp_keys: Vec<String>,
    pub recovery_shares: u32,
    pub recovery_threshold: u32,
    #[serde(default)]
    pub recovery_pgp_keys: Vec<String>,
}

const DEFAULT_CONFIG_PATH: &str = "bao-init.toml";
const DEFAULT_ADDRESS: &str = "https://127.0.0.1:8200";
const DEFAULT_CONSUL_ADDRESS: &str = "http://127.0.0.1:8500";
const DEFAULT_CONSUL_ALLOW_STALE: bool = true;
const DEFAULT_NODE_SCHEME: &str = "http";
const DEFAULT_HTTP_TIMEOUT: &str = "60s";

impl Settings {
    /// Creates a new `Settings` instance.
    ///
    /// # Errors
    /// Returns error if configuration parsing fails (e.g. invalid format).
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut s = Config::builder();

        s = s
            .set_default("address", DEFAULT_ADDRESS)?
            .set_default("consul.address", DEFAULT_CONSUL_ADDRESS)?
            .set_default("consul.allow_stale", DEFAULT_CONSUL_ALLOW_STALE)?
            .set_default("consul.node_scheme", DEFAULT_NODE_SCHEME)?
            .set_default("http.timeout", DEFAULT_HTTP_TIMEOUT)?
            .set_default("init.key_shares", DEFAULT_SECRET_SHARES)?
            .set_default("init.key_threshold", DEFAULT_SECRET_THRESHOLD)?
            .set_default("init.stored_shares", 0)?
            .set_default("init.recovery_shares", 0)?
            .set_default("init.recovery_threshold", 0)?;

        // An explicit --config must exist; the default file is optional.
        s = match config_path {
            Some(path) => s.add_source(File::from(path).required(true)),
            None => s.add_source(File::from(PathBuf::from(DEFAULT_CONFIG_PATH)).required(false)),
        };

        // e.g. BAO_INIT_ADDRESS, BAO_INIT_CONSUL__ADDRESS
        s = s.add_source(
            Environment::with_prefix("BAO_INIT")
                .prefix_separator("_")
                .separator("__"),
        );

        s.build()?.try_deserialize()
    }

    /// Merges CLI arguments into the settings, overriding values if present.
    pub fn merge_with_args(&mut self, args: &crate::Args) {
        if let Some(address) = &args.address {
            address.clone_into(&mut self.address);
        }
        if let Some(address) = &args.consul_address {
            address.clone_into(&mut self.consul.address);
        }
        if let Some(token) = &args.consul_token {
            self.consul.token = Some(token.clone());
        }
        if let Some(dc) = &args.consul_datacenter {
            self.consul.datacenter = Some(dc.clone());
        }
        if let Some(shares) = args.key_shares {
            self.init.key_shares = shares;
        }
        if let Some(threshold) = args.key_threshold {
            self.init.key_threshold = threshold;
        }
        if let Some(stored) = args.stored_shares {
            self.init.stored_shares = stored;
        }
        if !args.pgp_keys.is_empty() {
            self.init.pgp_keys.clone_from(&args.pgp_keys);
        }
        if let Some(shares) = args.recovery_shares {
            self.init.recovery_shares = shares;
        }
        if let Some(threshold) = args.recovery_threshold {
            self.init.recovery_threshold = threshold;
        }
        if !args.recovery_pgp_keys.is_empty() {
            self.init
                .recovery_pgp_keys
                .clone_from(&args.recovery_pgp_keys);
        }
    }

    /// Validates configuration values for correctness.
    ///
    /// Share/threshold rules are checked when the init request is built.
    ///
    /// # Errors
    /// Returns error if any setting is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            anyhow::bail!("address must not be empty");
        }
        if self.consul.address.trim().is_empty() {
            anyhow::bail!("consul.address must not be empty");
        }
        if !matches!(self.consul.node_scheme.as_str(), "http" | "https") {
            anyhow::bail!("consul.node_scheme must be http or https");
        }
        self.timeout()?;
        Ok(())
    }

    /// # Errors
    /// Returns error if `http.timeout` is not a valid duration.
    pub fn timeout(&self) -> Result<Option<Duration>> {
        let timeout = humantime::parse_duration(self.http.timeout.trim())
            .with_context(|| format!("http.timeout is not a duration: {}", self.http.timeout))?;
        Ok((!timeout.is_zero()).then_some(timeout))
    }

    #[must_use]
    pub fn consul_settings(&self) -> ConsulSettings {
        ConsulSettings {
            address: self.consul.address.clone(),
            token: self.consul.token.clone(),
            datacenter: self.consul.datacenter.clone(),
            allow_stale: self.consul.allow_stale,
            node_scheme: self.consul.node_scheme.clone(),
        }
    }

    /// Builds init parameters, reading any PGP key files.
    ///
    /// # Errors
    /// Returns error if a PGP key entry cannot be resolved.
    pub fn init_params(&self) -> Result<InitParams> {
        Ok(InitParams {
            secret_shares: self.init.key_shares,
            secret_threshold: self.init.key_threshold,
            stored_shares: self.init.stored_shares,
            pgp_keys: pgp_keys::resolve(&self.init.pgp_keys)?,
            recovery_shares: self.init.recovery_shares,
            recovery_threshold: self.init.recovery_threshold,
            recovery_pgp_keys: pgp_keys::resolve(&self.init.recovery_pgp_keys)?,
        })
    }
}
