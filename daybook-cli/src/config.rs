use anyhow::{Context, Result};
use chrono_tz::Tz;
use daybook_store::ApiSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::state::ensure_daybook_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    /// IANA zone appointment dates and times are read in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<Tz> {
        self.display
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone in config: {}", self.display.timezone))
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_daybook_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let p = config_path()?;
    println!("# {}", p.display());
    print!("{}", render_config(&p)?);
    Ok(())
}

/// Effective config as TOML. A file that does not parse is shown as-is so
/// it can be fixed.
pub fn render_config(p: &Path) -> Result<String> {
    match load_config_from(p) {
        Ok(cfg) => toml::to_string_pretty(&cfg).context("serialize config"),
        Err(e) => {
            warn!(error = ?e, "config does not parse, showing file as written");
            fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
        }
    }
}
