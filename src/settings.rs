use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CobrancaError, Result};

/// Remembered input/output locations so bare `cobranca reconcile` and
/// `cobranca dashboard` keep working after the first run. CLI arguments
/// always override and update these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_ledger_path")]
    pub ledger_path: String,
    #[serde(default = "default_lists_dir")]
    pub lists_dir: String,
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

fn default_ledger_path() -> String {
    "geral.csv".to_string()
}

fn default_lists_dir() -> String {
    "vendedores".to_string()
}

fn default_snapshot_path() -> String {
    "geral_com_vendedor.csv".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ledger_path: default_ledger_path(),
            lists_dir: default_lists_dir(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("cobranca")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| CobrancaError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
