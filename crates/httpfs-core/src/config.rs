use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Transport-level settings applied to every request the adapter issues.
///
/// Missing keys in a config file take the hardened defaults: peer and host
/// verification on, no compression requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    /// Verify the server certificate chain.
    pub verify_peer: bool,
    /// Verify that the certificate matches the host name.
    pub verify_host: bool,
    /// Value for `Accept-Encoding`; `None` means no compression is requested.
    pub accept_encoding: Option<String>,
    /// Proxy URL (e.g. `http://proxy:3128`).
    pub proxy: Option<String>,
    /// Custom `User-Agent`.
    pub user_agent: Option<String>,
    /// CA bundle path overriding the system default.
    pub ca_info: Option<PathBuf>,
    pub connect_timeout_secs: u64,
    /// Deadline for a whole probe or buffered read. Streams only use the connect timeout.
    pub timeout_secs: u64,
    pub max_redirections: u32,
    /// Extra request headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            verify_peer: true,
            verify_host: true,
            accept_encoding: None,
            proxy: None,
            user_agent: None,
            ca_info: None,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirections: 10,
            headers: BTreeMap::new(),
        }
    }
}

impl RequestContext {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Adds (or replaces) a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Adapter configuration loaded from `~/.config/httpfs/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Probe with HEAD. Set to false for origins that reject HEAD; probes then use GET.
    pub supports_head: bool,
    /// Status codes a probe accepts as "exists". Defaults to exactly 200.
    pub success_statuses: Vec<u32>,
    pub request: RequestContext,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            supports_head: true,
            success_statuses: vec![200],
            request: RequestContext::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("httpfs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AdapterConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AdapterConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<AdapterConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: AdapterConfig = toml::from_str(&data)?;
    Ok(cfg)
}
