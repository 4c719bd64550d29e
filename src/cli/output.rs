use bao_init::{InitRequest, InitResult, NodeAddress};

use crate::i18n::Messages;

pub(crate) fn print_redirect(address: &NodeAddress, messages: &Messages) {
    println!("{}", messages.discovered_initialized(address.as_str()));
    print_env_hint(address, messages);
}

pub(crate) fn print_env_hint(address: &NodeAddress, messages: &Messages) {
    println!("{}", messages.set_env_hint());
    println!("\t{}", export_line(address));
}

pub(crate) fn print_ambiguous(service: &str, addresses: &[NodeAddress], messages: &Messages) {
    println!("{}", messages.discovered_multiple(service));
    println!("{}", messages.ambiguous_hint());
    for address in addresses {
        println!("\t{}", export_line(address));
    }
}

pub(crate) fn print_init_result(result: &InitResult, request: &InitRequest, messages: &Messages) {
    for line in render_init_result(result, request, messages) {
        println!("{line}");
    }
}

/// Key material first, in server order, then the root token, then the notes.
pub(crate) fn render_init_result(
    result: &InitResult,
    request: &InitRequest,
    messages: &Messages,
) -> Vec<String> {
    let mut lines = render_key_material(result, messages);
    if request.stored_shares() < 1 {
        lines.push(
            messages.init_summary_threshold(request.secret_shares(), request.secret_threshold()),
        );
    } else {
        lines.push(messages.init_summary_stored().to_string());
    }
    if !result.recovery_keys.is_empty() {
        lines.push(messages.init_summary_recovery(
            request.recovery_shares(),
            request.recovery_threshold(),
        ));
    }
    lines
}

pub(crate) fn render_key_material(result: &InitResult, messages: &Messages) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.unseal_keys.len() + result.recovery_keys.len() + 1);
    for key in result.numbered_unseal_keys() {
        lines.push(messages.unseal_key(key.number, key.value));
    }
    for key in result.numbered_recovery_keys() {
        lines.push(messages.recovery_key(key.number, key.value));
    }
    lines.push(messages.root_token(&result.root_token));
    lines
}

pub(crate) fn export_line(address: &NodeAddress) -> String {
    if cfg!(windows) {
        format!("set VAULT_ADDR={address}")
    } else {
        format!("export VAULT_ADDR='{address}'")
    }
}

#[cfg(test)]
mod tests {
    use bao_init::request::InitParams;

    use super::*;

    fn messages() -> Messages {
        Messages::new("en").expect("messages")
    }

    fn result(unseal: &[&str], recovery: &[&str]) -> InitResult {
        InitResult {
            unseal_keys: unseal.iter().map(ToString::to_string).collect(),
            recovery_keys: recovery.iter().map(ToString::to_string).collect(),
            root_token: "s.root".to_string(),
        }
    }

    #[test]
    fn test_render_numbers_keys_in_server_order() {
        let request = InitRequest::new(InitParams {
            secret_shares: 3,
            secret_threshold: 2,
            ..InitParams::default()
        })
        .expect("request");
        let lines = render_init_result(&result(&["k-c", "k-a", "k-b"], &[]), &request, &messages());
        assert_eq!(lines[0], "Unseal Key 1: k-c");
        assert_eq!(lines[1], "Unseal Key 2: k-a");
        assert_eq!(lines[2], "Unseal Key 3: k-b");
        assert_eq!(lines[3], "Initial Root Token: s.root");
        assert!(lines[4].contains("3 keys and a key threshold of 2"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_includes_recovery_keys_and_note() {
        let request = InitRequest::new(InitParams {
            secret_shares: 1,
            secret_threshold: 1,
            stored_shares: 1,
            recovery_shares: 2,
            recovery_threshold: 2,
            ..InitParams::default()
        })
        .expect("request");
        let lines = render_init_result(&result(&[], &["r-1", "r-2"]), &request, &messages());
        assert_eq!(
            lines,
            vec![
                "Recovery Key 1: r-1".to_string(),
                "Recovery Key 2: r-2".to_string(),
                "Initial Root Token: s.root".to_string(),
                "\nNode initialized successfully.".to_string(),
                "\nRecovery key initialized with 2 keys and a key threshold of 2. Please\nsecurely distribute the above keys.".to_string(),
            ]
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_export_line_quotes_address() {
        let line = export_line(&NodeAddress::from("http://10.0.0.1:8200"));
        assert_eq!(line, "export VAULT_ADDR='http://10.0.0.1:8200'");
    }
}
