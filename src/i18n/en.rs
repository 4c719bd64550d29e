use super::Strings;

pub(crate) static STRINGS: Strings = Strings {
    discovered_initialized: "Discovered an initialized node at '{address}'\n",
    discovered_uninitialized: "Discovered an uninitialized node at '{address}'\n",
    discovered_multiple: "Discovered more than one uninitialized node under the service name '{service}'\n",
    set_env_hint: "Set the following environment variable to operate on the discovered node:\n",
    ambiguous_hint: "To initialize the cluster, set any *one* of the following and run init again:",
    unseal_key: "Unseal Key {index}: {value}",
    recovery_key: "Recovery Key {index}: {value}",
    root_token: "Initial Root Token: {value}",
    init_summary_threshold: "\nNode initialized with {shares} keys and a key threshold of {threshold}. Please\nsecurely distribute the above keys. When the node is re-sealed,\nrestarted, or stopped, you must provide at least {threshold} of these keys\nto unseal it again.\n\nThe root key is not stored. Without at least {threshold} keys,\nthe node will remain permanently sealed.",
    init_summary_stored: "\nNode initialized successfully.",
    init_summary_recovery: "\nRecovery key initialized with {shares} keys and a key threshold of {threshold}. Please\nsecurely distribute the above keys.",
    check_initialized: "Node has been initialized",
    check_not_initialized: "Node is not initialized",
    error_load_config: "Failed to load configuration",
    error_invalid_request: "Invalid initialization parameters",
    error_client_create_failed: "Failed to create HTTP client",
    error_not_found: "Failed to discover nodes under the service name '{service}'",
    error_discovery_failed: "Discovery under the service name '{service}' failed",
    error_check_failed: "Error checking initialization status",
    error_init_failed: "Error initializing node",
    error_key_count_mismatch: "The node is now initialized. Record the key material above before doing anything else.",
};
