use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "TESSERA_CONFIG";

/// Environment variable overriding `listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Directory static-file handlers read from
    pub static_root: PathBuf,
    /// Capacity of the single read made per connection
    pub read_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8888".to_string(),
            static_root: PathBuf::from("."),
            read_buffer_size: 64 * 1024,
        }
    }
}

impl Config {
    /// Loads the file named by `TESSERA_CONFIG` (defaults if unset), then
    /// applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                Self::from_yaml(&raw).with_context(|| format!("parsing config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw)?;
        if cfg.read_buffer_size == 0 {
            anyhow::bail!("read_buffer_size must be greater than zero");
        }
        Ok(cfg)
    }
}
