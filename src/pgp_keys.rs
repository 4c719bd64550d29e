use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ValidationError;

const KEYBASE_PREFIX: &str = "keybase:";

/// Resolves `--pgp-keys` style entries into the values sent to the server.
///
/// `keybase:<user>` entries pass through unchanged. Anything else is a file
/// path holding a public key, either already base64 or raw binary.
///
/// # Errors
/// Returns [`ValidationError`] for empty entries or unreadable files.
pub fn resolve(entries: &[String]) -> Result<Vec<String>, ValidationError> {
    entries.iter().map(String::as_str).map(resolve_entry).collect()
}

fn resolve_entry(entry: &str) -> Result<String, ValidationError> {
    let trimmed = entry.trim();
    if trimmed.is_empty() || trimmed == KEYBASE_PREFIX {
        return Err(ValidationError::EmptyPgpKey {
            entry: entry.to_string(),
        });
    }
    if trimmed.starts_with(KEYBASE_PREFIX) {
        return Ok(trimmed.to_string());
    }
    read_key_file(Path::new(trimmed))
}

fn read_key_file(path: &Path) -> Result<String, ValidationError> {
    let contents = std::fs::read(path).map_err(|source| ValidationError::PgpKeyFile {
        path: path.to_path_buf(),
        source,
    })?;
    if let Ok(text) = std::str::from_utf8(&contents) {
        let text = text.trim();
        if !text.is_empty() && STANDARD.decode(text).is_ok() {
            return Ok(text.to_string());
        }
    }
    if contents.is_empty() {
        return Err(ValidationError::EmptyPgpKey {
            entry: path.display().to_string(),
        });
    }
    Ok(STANDARD.encode(&contents))
}
