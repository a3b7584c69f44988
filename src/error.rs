// ============================================================================
// ERRORES - Tipos de error tipados de la aplicación
// ============================================================================
// Ningún error es fatal: todos terminan en un banner o en un log y la UI
// vuelve a un estado interactivo.
// ============================================================================

use thiserror::Error;
use crate::utils::i18n::{t, Language};

/// Datos inválidos al construir un modelo (plato, línea, mesa)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("dish id must be positive")]
    InvalidDishId,

    #[error("dish {0} has an empty name")]
    EmptyDishName(u32),

    #[error("quantity for dish {0} must be at least 1")]
    ZeroQuantity(u32),

    #[error("quantity {quantity} for dish {dish_id} exceeds {max}", max = crate::models::CartLine::MAX_QUANTITY)]
    QuantityTooLarge { dish_id: u32, quantity: u32 },

    #[error("table {0} is outside 1..={max}", max = crate::models::TableNumber::MAX)]
    TableOutOfRange(u8),

    #[error("invalid table value: {0:?}")]
    InvalidTable(String),

    #[error("dish {0} appears twice in the cart")]
    DuplicateCartLine(u32),
}

/// El pedido no puede enviarse todavía (se resuelve localmente, sin red)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no table selected")]
    NoTable,

    #[error("cart is empty")]
    EmptyCart,

    #[error("an order is already being sent")]
    AlreadySubmitting,
}

/// Fallo al entregar el mensaje al endpoint de mensajería
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("notification endpoint is not configured")]
    NotConfigured,

    #[error("could not encode message: {0}")]
    Serialization(String),

    #[error("network error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
}

/// Error del slot persistente del carrito
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored cart is malformed: {0}")]
    Malformed(String),

    #[error("could not write cart: {0}")]
    Write(String),
}

/// Error del catálogo embebido
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("menu document is malformed: {0}")]
    Malformed(String),

    #[error("dish {dish_id} references unknown category {category_id:?}")]
    UnknownCategory { dish_id: u32, category_id: String },

    #[error("dish id {0} is used twice")]
    DuplicateDishId(u32),
}

/// Error visible de un intento de envío
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl OrderError {
    /// Clave i18n del mensaje que ve el cliente
    pub fn message_key(&self) -> &'static str {
        match self {
            OrderError::Validation(ValidationError::AlreadySubmitting) => "error_in_progress",
            OrderError::Validation(_) => "error_validation",
            OrderError::Notification(_) => "error_notification",
        }
    }

    pub fn user_message(&self, lang: Language) -> String {
        t(self.message_key(), lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keys() {
        assert_eq!(OrderError::from(ValidationError::NoTable).message_key(), "error_validation");
        assert_eq!(OrderError::from(ValidationError::EmptyCart).message_key(), "error_validation");
        assert_eq!(
            OrderError::from(ValidationError::AlreadySubmitting).message_key(),
            "error_in_progress"
        );
        assert_eq!(
            OrderError::from(NotificationError::Transport("offline".into())).message_key(),
            "error_notification"
        );
    }

    #[test]
    fn test_user_message_is_translated() {
        let err = OrderError::from(ValidationError::NoTable);
        for lang in Language::all() {
            let text = err.user_message(lang);
            assert!(!text.is_empty());
            assert_ne!(text, "error_validation");
        }
    }

    #[test]
    fn test_status_error_display() {
        let err = NotificationError::Status { status: 502, status_text: "Bad Gateway".into() };
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
        assert_eq!(ModelError::TableOutOfRange(11).to_string(), "table 11 is outside 1..=10");
    }
}
