// ============================================================================
// NOTIFICATION CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Un POST por pedido al relay configurado. Sin reintentos ni backoff: el
// caller decide qué mostrar si falla.
// ============================================================================

use gloo_net::http::Request;
use serde::Serialize;
use crate::config::CONFIG;
use crate::error::NotificationError;

/// Formato enriquecido (HTML) del proveedor de mensajería
pub const RICH_FORMATTING: &str = "HTML";

/// Contrato del cliente de notificaciones
#[allow(async_fn_in_trait)]
pub trait OrderNotifier {
    async fn send(&self, text: &str) -> Result<(), NotificationError>;
}

/// Body del POST: `{ chat_id, text, parse_mode }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Destination {
    endpoint: String,
    chat_id: String,
}

/// Cliente del relay de mensajería
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayNotificationClient {
    destination: Option<Destination>,
}

impl RelayNotificationClient {
    /// Cliente con endpoint y chat de `CONFIG`
    pub fn new() -> Self {
        Self::with_destination(CONFIG.notify_endpoint.clone(), CONFIG.notify_chat_id.clone())
    }

    pub fn with_destination(endpoint: Option<String>, chat_id: Option<String>) -> Self {
        let destination = match (endpoint, chat_id) {
            (Some(endpoint), Some(chat_id)) => Some(Destination { endpoint, chat_id }),
            _ => None,
        };
        Self { destination }
    }

    pub fn is_configured(&self) -> bool {
        self.destination.is_some()
    }
}

impl Default for RelayNotificationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderNotifier for RelayNotificationClient {
    async fn send(&self, text: &str) -> Result<(), NotificationError> {
        let destination = self.destination.as_ref().ok_or_else(|| {
            log::error!("❌ [NOTIFY] NOTIFY_ENDPOINT / NOTIFY_CHAT_ID no configurados");
            NotificationError::NotConfigured
        })?;

        let body = SendMessageRequest {
            chat_id: &destination.chat_id,
            text,
            parse_mode: RICH_FORMATTING,
        };

        log::info!("📨 [NOTIFY] Enviando pedido ({} caracteres)", text.chars().count());

        let response = Request::post(&destination.endpoint)
            .json(&body)
            .map_err(|e| NotificationError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(NotificationError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        log::info!("✅ [NOTIFY] Pedido entregado (HTTP {})", response.status());
        Ok(())
    }
}
