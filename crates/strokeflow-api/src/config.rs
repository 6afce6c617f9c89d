use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use eyre::WrapErr;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Service settings, read from `STROKEFLOW_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    /// Root of the file store. `None` keeps visits in memory.
    pub data_dir: Option<PathBuf>,
    pub log_json: bool,
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or empty values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("STROKEFLOW_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("invalid STROKEFLOW_BIND: {bind_raw}"))?;

        let data_dir = get("STROKEFLOW_DATA_DIR").map(PathBuf::from);

        let log_json = get("STROKEFLOW_LOG_JSON")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            bind,
            data_dir,
            log_json,
        })
    }
}
