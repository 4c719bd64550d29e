use anyhow::{Context, Result};

pub(crate) mod en;
pub(crate) mod ko;

pub(crate) struct Strings {
    pub(crate) discovered_initialized: &'static str,
    pub(crate) discovered_uninitialized: &'static str,
    pub(crate) discovered_multiple: &'static str,
    pub(crate) set_env_hint: &'static str,
    pub(crate) ambiguous_hint: &'static str,
    pub(crate) unseal_key: &'static str,
    pub(crate) recovery_key: &'static str,
    pub(crate) root_token: &'static str,
    pub(crate) init_summary_threshold: &'static str,
    pub(crate) init_summary_stored: &'static str,
    pub(crate) init_summary_recovery: &'static str,
    pub(crate) check_initialized: &'static str,
    pub(crate) check_not_initialized: &'static str,
    pub(crate) error_load_config: &'static str,
    pub(crate) error_invalid_request: &'static str,
    pub(crate) error_client_create_failed: &'static str,
    pub(crate) error_not_found: &'static str,
    pub(crate) error_discovery_failed: &'static str,
    pub(crate) error_check_failed: &'static str,
    pub(crate) error_init_failed: &'static str,
    pub(crate) error_key_count_mismatch: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Locale {
    En,
    Ko,
}

impl Locale {
    pub(crate) fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        let base = normalized
            .split('-')
            .next()
            .context("Missing language code")?;
        match base {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            _ => anyhow::bail!("Unsupported language: {input}"),
        }
    }
}

pub(crate) struct Messages {
    locale: Locale,
}

impl Messages {
    pub(crate) fn new(lang: &str) -> Result<Self> {
        let locale = Locale::parse(lang)?;
        Ok(Self { locale })
    }

    pub(crate) fn discovered_initialized(&self, address: &str) -> String {
        format_template(
            self.strings().discovered_initialized,
            &[("address", address)],
        )
    }

    pub(crate) fn discovered_uninitialized(&self, address: &str) -> String {
        format_template(
            self.strings().discovered_uninitialized,
            &[("address", address)],
        )
    }

    pub(crate) fn discovered_multiple(&self, service: &str) -> String {
        format_template(self.strings().discovered_multiple, &[("service", service)])
    }

    pub(crate) fn set_env_hint(&self) -> &'static str {
        self.strings().set_env_hint
    }

    pub(crate) fn ambiguous_hint(&self) -> &'static str {
        self.strings().ambiguous_hint
    }

    pub(crate) fn unseal_key(&self, index: usize, value: &str) -> String {
        let index_value = index.to_string();
        format_template(
            self.strings().unseal_key,
            &[("index", &index_value), ("value", value)],
        )
    }

    pub(crate) fn recovery_key(&self, index: usize, value: &str) -> String {
        let index_value = index.to_string();
        format_template(
            self.strings().recovery_key,
            &[("index", &index_value), ("value", value)],
        )
    }

    pub(crate) fn root_token(&self, value: &str) -> String {
        format_template(self.strings().root_token, &[("value", value)])
    }

    pub(crate) fn init_summary_threshold(&self, shares: u32, threshold: u32) -> String {
        let shares_value = shares.to_string();
        let threshold_value = threshold.to_string();
        format_template(
            self.strings().init_summary_threshold,
            &[("shares", &shares_value), ("threshold", &threshold_value)],
        )
    }

    pub(crate) fn init_summary_stored(&self) -> &'static str {
        self.strings().init_summary_stored
    }

    pub(crate) fn init_summary_recovery(&self, shares: u32, threshold: u32) -> String {
        let shares_value = shares.to_string();
        let threshold_value = threshold.to_string();
        format_template(
            self.strings().init_summary_recovery,
            &[("shares", &shares_value), ("threshold", &threshold_value)],
        )
    }

    pub(crate) fn check_initialized(&self) -> &'static str {
        self.strings().check_initialized
    }

    pub(crate) fn check_not_initialized(&self) -> &'static str {
        self.strings().check_not_initialized
    }

    pub(crate) fn error_load_config(&self) -> &'static str {
        self.strings().error_load_config
    }

    pub(crate) fn error_invalid_request(&self) -> &'static str {
        self.strings().error_invalid_request
    }

    pub(crate) fn error_client_create_failed(&self) -> &'static str {
        self.strings().error_client_create_failed
    }

    pub(crate) fn error_not_found(&self, service: &str) -> String {
        format_template(self.strings().error_not_found, &[("service", service)])
    }

    pub(crate) fn error_discovery_failed(&self, service: &str) -> String {
        format_template(
            self.strings().error_discovery_failed,
            &[("service", service)],
        )
    }

    pub(crate) fn error_check_failed(&self) -> &'static str {
        self.strings().error_check_failed
    }

    pub(crate) fn error_init_failed(&self) -> &'static str {
        self.strings().error_init_failed
    }

    pub(crate) fn error_key_count_mismatch(&self) -> &'static str {
        self.strings().error_key_count_mismatch
    }

    fn strings(&self) -> &'static Strings {
        match self.locale {
            Locale::En => &en::STRINGS,
            Locale::Ko => &ko::STRINGS,
        }
    }
}

fn format_template(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (key, value) in pairs {
        output = output.replace(&format!("{{{key}}}"), value);
    }
    output
}
