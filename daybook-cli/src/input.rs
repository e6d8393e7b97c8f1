//! Command-line field checks applied before a record reaches the store.

use anyhow::{bail, Result};

/// Trimmed value of a field that must not be blank.
pub fn required(field: &str, raw: &str) -> Result<String> {
    let v = raw.trim();
    if v.is_empty() {
        bail!("{field} is required");
    }
    Ok(v.to_string())
}

/// Trimmed value, or `None` when absent or blank.
pub fn optional(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

pub fn trimmed(raw: &str) -> String {
    raw.trim().to_string()
}
