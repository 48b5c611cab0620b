// ============================================================================
// CONFIG - Configuración compilada + overrides desde la página
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub login_page: String,
    pub home_page: String,
    /// Latencia simulada del login OTP
    pub login_delay_ms: u32,
    pub toast_duration_ms: u32,
    /// Prefijo al mostrar el número guardado
    pub country_code: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_page: "index.html".to_string(),
            home_page: "home.html".to_string(),
            login_delay_ms: 1000,
            toast_duration_ms: 3000,
            country_code: "+91".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login_page: option_env!("LOGIN_PAGE")
                .map(str::to_string)
                .unwrap_or(defaults.login_page),
            home_page: option_env!("HOME_PAGE")
                .map(str::to_string)
                .unwrap_or(defaults.home_page),
            login_delay_ms: option_env!("LOGIN_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.login_delay_ms),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            country_code: option_env!("COUNTRY_CODE")
                .map(str::to_string)
                .unwrap_or(defaults.country_code),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Aplicar un objeto JSON de overrides sobre `self`. Los campos ausentes
    /// conservan su valor, los desconocidos se ignoran.
    pub fn with_overrides(&self, json: &str) -> Result<Self, serde_json::Error> {
        let mut merged = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;

        if let (Some(base), serde_json::Value::Object(patch)) = (merged.as_object_mut(), overrides) {
            for (key, value) in patch {
                if base.contains_key(&key) {
                    base.insert(key, value);
                }
            }
        }

        serde_json::from_value(merged)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
