//! Configuration types for the Jarvis companion.
//!
//! `JarvisConfig` represents the optional `config.toml` that controls the
//! HTTP bind address, static client hosting and the artificial thinking
//! delay. Every field has a default, so an empty file is valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from `~/.jarvis/config.toml` (or `$JARVIS_CONFIG_DIR/config.toml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JarvisConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub thinking_delay: ThinkingDelayConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding a built browser client. Served as an SPA fallback
    /// behind the API routes when it exists.
    #[serde(default)]
    pub web_dir: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: None,
        }
    }
}

/// Bounds of the artificial delay inserted before every reply.
///
/// The delay is sampled uniformly from `[min_ms, max_ms)`. When
/// `max_ms <= min_ms` the delay is exactly `min_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingDelayConfig {
    #[serde(default = "default_min_delay_ms")]
    pub min_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_ms: u64,
}

fn default_min_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    1500
}

impl ThinkingDelayConfig {
    /// A zero-length delay, used by `--no-delay` and one-shot mode.
    pub fn disabled() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    pub fn is_disabled(&self) -> bool {
        self.min_ms == 0 && self.max_ms == 0
    }
}

impl Default for ThinkingDelayConfig {
    fn default() -> Self {
        Self {
            min_ms: default_min_delay_ms(),
            max_ms: default_max_delay_ms(),
        }
    }
}
