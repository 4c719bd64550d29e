use std::path::PathBuf;

use clap::Parser;

/// Initialize a new server, optionally finding it through Consul.
///
/// Exit status: 0 on success (or when reporting an already initialized
/// node), 1 on error, and with `--check`, 2 when the node is not initialized.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (default: bao-init.toml)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Address of the node to initialize
    #[arg(long, env = "VAULT_ADDR")]
    pub address: Option<String>,

    /// Discover nodes registered in Consul under this service name
    #[arg(long, value_name = "SERVICE")]
    pub auto: Option<String>,

    /// Only check initialization status (exit 0 = initialized, 2 = not initialized)
    #[arg(long)]
    pub check: bool,

    /// Number of key shares to split the root key into
    #[arg(long)]
    pub key_shares: Option<u32>,

    /// Number of key shares required to reconstruct the root key
    #[arg(long)]
    pub key_threshold: Option<u32>,

    /// Number of unseal keys the server stores itself
    #[arg(long)]
    pub stored_shares: Option<u32>,

    /// Comma-separated PGP key files or `keybase:<user>` entries, one per key share
    #[arg(long, value_delimiter = ',')]
    pub pgp_keys: Vec<String>,

    /// Number of key shares to split the recovery key into
    #[arg(long)]
    pub recovery_shares: Option<u32>,

    /// Number of recovery key shares required to reconstruct the recovery key
    #[arg(long)]
    pub recovery_threshold: Option<u32>,

    /// Like --pgp-keys, for the recovery key shares
    #[arg(long, value_delimiter = ',')]
    pub recovery_pgp_keys: Vec<String>,

    /// Consul HTTP API address
    #[arg(long, env = "CONSUL_HTTP_ADDR")]
    pub consul_address: Option<String>,

    /// Consul ACL token
    #[arg(long, env = "CONSUL_HTTP_TOKEN", hide_env_values = true)]
    pub consul_token: Option<String>,

    /// Consul datacenter to query
    #[arg(long)]
    pub consul_datacenter: Option<String>,

    /// Language for CLI output (en or ko)
    #[arg(long, env = "BAO_INIT_LANG", default_value = "en")]
    pub lang: String,
}
