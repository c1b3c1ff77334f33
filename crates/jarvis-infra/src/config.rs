//! Configuration loader for the Jarvis companion.
//!
//! Reads `config.toml` from the config directory (`~/.jarvis/` by default)
//! and deserializes it into [`JarvisConfig`]. Falls back to defaults when
//! the file is missing or malformed, then applies `JARVIS_*` environment
//! overrides on top.

use std::path::{Path, PathBuf};

use jarvis_types::config::JarvisConfig;
use jarvis_types::error::ConfigError;

pub const CONFIG_DIR_ENV: &str = "JARVIS_CONFIG_DIR";
pub const HOST_ENV: &str = "JARVIS_HOST";
pub const PORT_ENV: &str = "JARVIS_PORT";
pub const WEB_DIR_ENV: &str = "JARVIS_WEB_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Resolve the directory holding `config.toml`.
///
/// Priority: `$JARVIS_CONFIG_DIR`, then `~/.jarvis`, then `./.jarvis`.
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".jarvis");
    }

    PathBuf::from(".jarvis")
}

/// Read and parse `{config_dir}/config.toml`.
///
/// `Ok(None)` when the file does not exist.
pub async fn read_config_file(config_dir: &Path) -> Result<Option<JarvisConfig>, ConfigError> {
    let config_path = config_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::Read {
                path: config_path.display().to_string(),
                reason: err.to_string(),
            });
        }
    };

    toml::from_str::<JarvisConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: config_path.display().to_string(),
            reason: err.to_string(),
        })
}

/// Load configuration from `{config_dir}/config.toml`.
///
/// - Missing file: [`JarvisConfig::default()`].
/// - Unreadable or unparseable file: logs a warning and returns the default.
pub async fn load_config(config_dir: &Path) -> JarvisConfig {
    match read_config_file(config_dir).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!(
                "No {CONFIG_FILE} found in {}, using defaults",
                config_dir.display()
            );
            JarvisConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            JarvisConfig::default()
        }
    }
}

/// Apply `JARVIS_HOST`, `JARVIS_PORT` and `JARVIS_WEB_DIR` overrides.
///
/// `lookup` abstracts the environment so tests need not mutate it.
pub fn apply_env_overrides<F>(mut config: JarvisConfig, lookup: F) -> Result<JarvisConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup(HOST_ENV) {
        config.server.host = host;
    }

    if let Some(port) = lookup(PORT_ENV) {
        config.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidOverride {
            key: PORT_ENV.to_string(),
            value: port.clone(),
        })?;
    }

    if let Some(web_dir) = lookup(WEB_DIR_ENV) {
        config.server.web_dir = Some(web_dir);
    }

    Ok(config)
}

/// Load the file config and apply the process environment on top.
pub async fn load_effective_config(config_dir: &Path) -> Result<JarvisConfig, ConfigError> {
    let config = load_config(config_dir).await;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}
