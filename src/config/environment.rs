//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. La URL base de la API
//! es un valor explícito inyectado al cliente en su construcción, no un
//! global de módulo.

use std::env;
use std::time::Duration;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub page_size: u32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            api_base_url: env::var("GEOTRUCK_API_URL")
                .unwrap_or_else(|_| "http://localhost:5108/api".to_string()),
            request_timeout_secs: env::var("GEOTRUCK_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            page_size: env::var("GEOTRUCK_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl EnvironmentConfig {
    /// Timeout de requests HTTP
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
