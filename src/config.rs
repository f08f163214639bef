use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: Option<String>,
    pub backend_key: Option<String>,
    pub environment: String,
    pub enable_logging: bool,
    pub poll_interval_ms: u32,
    pub network_timeout_seconds: u32,
}

/// Conexión validada al backend RPC (URL + clave presentes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            backend_key: None,
            environment: "development".to_string(),
            enable_logging: true,
            poll_interval_ms: 30_000,
            network_timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: non_empty(option_env!("DASHBOARD_BACKEND_URL")),
            backend_key: non_empty(option_env!("DASHBOARD_BACKEND_KEY")),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            poll_interval_ms: parse_poll_interval(option_env!("POLL_INTERVAL_MS")),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
        }
    }

    /// URL + clave del backend. Sin ellas ninguna vista con datos puede arrancar.
    pub fn backend(&self) -> Result<BackendConfig, ConfigError> {
        let url = self.backend_url.clone()
            .ok_or(ConfigError::Missing("DASHBOARD_BACKEND_URL"))?;
        let key = self.backend_key.clone()
            .ok_or(ConfigError::Missing("DASHBOARD_BACKEND_KEY"))?;
        Ok(BackendConfig {
            url: url.trim_end_matches('/').to_string(),
            key,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Error,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }

    pub fn network_timeout_ms(&self) -> u32 {
        self.network_timeout_seconds.saturating_mul(1000)
    }
}

/// Por debajo de esto el intervalo se convierte en un bucle de peticiones
pub const MIN_POLL_INTERVAL_MS: u32 = 1_000;
const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;

fn parse_poll_interval(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
        .max(MIN_POLL_INTERVAL_MS)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
