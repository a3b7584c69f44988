use serde::{Deserialize, Serialize};
use crate::utils::i18n::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Relay que reenvía el pedido a la mensajería (guarda el token del bot)
    pub notify_endpoint: Option<String>,
    /// Chat del personal que recibe los pedidos
    pub notify_chat_id: Option<String>,
    pub cart_storage_key: String,
    pub language_storage_key: String,
    pub success_banner_ms: u32,
    pub default_language: String,
    pub enable_logging: bool,
    pub placeholder_image_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notify_endpoint: None,
            notify_chat_id: None,
            cart_storage_key: "cart".to_string(),
            language_storage_key: "language".to_string(),
            success_banner_ms: 2000,
            default_language: "RU".to_string(),
            enable_logging: true,
            placeholder_image_url: "https://via.placeholder.com/240x120".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            notify_endpoint: non_empty(option_env!("NOTIFY_ENDPOINT")),
            notify_chat_id: non_empty(option_env!("NOTIFY_CHAT_ID")),
            cart_storage_key: option_env!("CART_STORAGE_KEY")
                .unwrap_or("cart").to_string(),
            language_storage_key: option_env!("LANGUAGE_STORAGE_KEY")
                .unwrap_or("language").to_string(),
            success_banner_ms: option_env!("SUCCESS_BANNER_MS")
                .unwrap_or("2000").parse().unwrap_or(defaults.success_banner_ms),
            default_language: option_env!("DEFAULT_LANGUAGE")
                .unwrap_or("RU").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            placeholder_image_url: option_env!("PLACEHOLDER_IMAGE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.placeholder_image_url),
        }
    }

    /// Idioma inicial de la UI y de los mensajes al personal
    pub fn default_language(&self) -> Language {
        Language::parse_lossy(&self.default_language)
    }

    /// Nivel del logger: con logging deshabilitado solo warnings y errores
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.cart_storage_key, "cart");
        assert_eq!(config.success_banner_ms, 2000);
        assert_eq!(config.default_language(), Language::Ru);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_blank_values_are_not_configured() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" https://relay ")), Some("https://relay".to_string()));
    }
}
