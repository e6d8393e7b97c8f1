use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `$DAYBOOK_HOME`, or `~/.daybook`.
pub fn daybook_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("DAYBOOK_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".daybook"))
}

pub fn ensure_daybook_home() -> Result<PathBuf> {
    let dir = daybook_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Create the parent directory of an output file.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    Ok(())
}
