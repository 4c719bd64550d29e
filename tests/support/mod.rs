// Helper functions are shared across multiple test crates; not every helper is
// referenced in each test module.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub(crate) const ROOT_TOKEN: &str = "s.root-token";
pub(crate) const SERVICE: &str = "vault";

pub(crate) async fn stub_init_status(server: &MockServer, initialized: bool) {
    Mock::given(method("GET"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "initialized": initialized
        })))
        .mount(server)
        .await;
}

/// Fails the test on drop if the node is probed or initialized at all.
pub(crate) async fn expect_untouched(server: &MockServer) {
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

pub(crate) fn unseal_keys(count: usize) -> Vec<String> {
    (1..=count).map(|idx| format!("unseal-key-{idx}")).collect()
}

pub(crate) async fn stub_init_success(server: &MockServer, keys: usize) {
    Mock::given(method("PUT"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": unseal_keys(keys),
            "keys_base64": unseal_keys(keys),
            "recovery_keys": [],
            "root_token": ROOT_TOKEN
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub(crate) async fn stub_init_already_initialized(server: &MockServer) {
    Mock::given(method("PUT"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": ["Vault is already initialized"]
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Registers `nodes` under [`SERVICE`] in a fake Consul catalog, in order.
pub(crate) async fn stub_catalog(consul: &MockServer, nodes: &[&MockServer]) {
    let entries: Vec<_> = nodes
        .iter()
        .map(|node| {
            json!({
                "Address": "127.0.0.1",
                "ServiceAddress": "127.0.0.1",
                "ServicePort": node.address().port(),
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/v1/catalog/service/{SERVICE}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries))
        .mount(consul)
        .await;
}

pub(crate) fn node_address(node: &MockServer) -> String {
    format!("http://127.0.0.1:{}", node.address().port())
}

/// Runs the binary from `dir` with no ambient target configuration.
pub(crate) fn run_bao_init(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_bao-init"))
        .current_dir(dir)
        .args(args)
        .env_remove("VAULT_ADDR")
        .env_remove("CONSUL_HTTP_ADDR")
        .env_remove("CONSUL_HTTP_TOKEN")
        .env_remove("BAO_INIT_LANG")
        .output()
        .expect("bao-init binary runs in tests");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}
