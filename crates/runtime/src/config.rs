//! Process configuration for a patch run.

use std::env;
use std::path::PathBuf;

use kye_core::ModKey;
use kye_core::known::DEFAULT_PATCH_NAME;

use crate::error::{Result, RuntimeError};

/// Where the patcher reads its inputs and writes its output.
#[derive(Clone, Debug, PartialEq)]
pub struct PatcherConfig {
    /// Directory holding `misc.json`, `settings.json` and `creature_rules.json`.
    pub data_dir: PathBuf,
    /// Load-order snapshot to patch.
    pub load_order: PathBuf,
    pub output: PathBuf,
    pub patch_name: ModKey,
    /// File logging is off when unset.
    pub log_dir: Option<PathBuf>,
}

impl PatcherConfig {
    pub const DEFAULT_OUTPUT: &'static str = "know_your_enemy_patcher.json";

    /// Configuration with every optional setting at its default.
    pub fn new(load_order: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: kye_content::bundled_data_dir(),
            load_order: load_order.into(),
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
            patch_name: ModKey::new(DEFAULT_PATCH_NAME),
            log_dir: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `KYE_LOAD_ORDER` - Load-order snapshot JSON (required)
    /// - `KYE_DATA_DIR` - Rule data directory (default: bundled data)
    /// - `KYE_OUTPUT` - Patch output JSON (default: `know_your_enemy_patcher.json`)
    /// - `KYE_PATCH_NAME` - Patch plugin name (default: `know_your_enemy_patcher.esp`)
    /// - `KYE_LOG_DIR` - Directory for a log file (default: none)
    /// - `KYE_LOG_TO_FILE` - Log to the platform cache directory when `KYE_LOG_DIR` is unset (default: false)
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::MissingLoadOrder` if `KYE_LOAD_ORDER` is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let load_order = read("KYE_LOAD_ORDER").ok_or(RuntimeError::MissingLoadOrder)?;
        let mut config = Self::new(load_order);

        if let Some(dir) = read("KYE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(output) = read("KYE_OUTPUT") {
            config.output = PathBuf::from(output);
        }
        if let Some(name) = read("KYE_PATCH_NAME") {
            config.patch_name = ModKey::new(name);
        }

        config.log_dir = match read("KYE_LOG_DIR") {
            Some(dir) => Some(PathBuf::from(dir)),
            None if read("KYE_LOG_TO_FILE").as_deref().and_then(parse_bool) == Some(true) => {
                Some(default_log_dir())
            }
            None => None,
        };

        Ok(config)
    }
}

/// Platform cache directory for log files.
///
/// - macOS: `~/Library/Caches/know-your-enemy/logs`
/// - Linux: `~/.cache/know-your-enemy/logs` (or `$XDG_CACHE_HOME/know-your-enemy/logs`)
/// - Windows: `%LOCALAPPDATA%\know-your-enemy\cache\logs`
/// - Fallback: `/tmp/know-your-enemy/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "know-your-enemy")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/know-your-enemy"))
        .join("logs")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
