use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base del backend; vacío = mismo origen
    pub api_base_url: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub enable_dev_autofill: bool,
    pub dev_km_value: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            enable_logging: true,
            log_level: "info".to_string(),
            enable_dev_autofill: true,
            dev_km_value: "450000".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("ENABLE_DEV_AUTOFILL"),
            option_env!("DEV_KM_VALUE"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        enable_dev_autofill: Option<&str>,
        dev_km_value: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            enable_logging: enable_logging
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.log_level),
            enable_dev_autofill: enable_dev_autofill
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.enable_dev_autofill),
            dev_km_value: dev_km_value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.dev_km_value),
        }
    }

    /// Nivel mínimo para wasm_logger
    pub fn log_level(&self) -> log::Level {
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// Construye la URL completa de un endpoint del backend
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
