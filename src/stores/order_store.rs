// ============================================================================
// ORDER STORE - Estado transitorio de UI + máquina de envío
// ============================================================================
// Idle → Submitting → (Succeeded | Failed)
// Succeeded vuelve a Idle tras un delay fijo; Failed se queda hasta el
// siguiente intento. Submitting es el único slot de envío en curso.
// Cada intento lleva un número; el fin del banner solo aplica al suyo.
// ============================================================================

use chrono::NaiveDateTime;
use crate::error::{NotificationError, OrderError, ValidationError};
use crate::models::{Cart, CategoryFilter, Order, TableNumber};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(OrderError),
}

/// Estado de la vista: filtro, panel del carrito, mesa y envío
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OrderStore {
    pub category: CategoryFilter,
    pub cart_open: bool,
    pub table: Option<TableNumber>,
    pub submission: SubmissionState,
    /// Número del último intento iniciado
    pub attempt: u64,
}

impl OrderStore {
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn select_table(&mut self, table: Option<TableNumber>) {
        self.table = table;
    }

    /// Parte del intent "vaciar carrito"
    pub fn reset_table(&mut self) {
        self.table = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn show_success(&self) -> bool {
        self.submission == SubmissionState::Succeeded
    }

    pub fn last_error(&self) -> Option<&OrderError> {
        match &self.submission {
            SubmissionState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Guard de Idle → Submitting
    pub fn validate(&self, cart: &Cart) -> Result<TableNumber, ValidationError> {
        if self.is_submitting() {
            return Err(ValidationError::AlreadySubmitting);
        }
        let table = self.table.ok_or(ValidationError::NoTable)?;
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        Ok(table)
    }

    pub fn can_submit(&self, cart: &Cart) -> bool {
        self.validate(cart).is_ok()
    }

    /// Construye el pedido si el guard pasa. No cambia el estado.
    pub fn prepare_order(&self, cart: &Cart, placed_at: NaiveDateTime) -> Result<Order, ValidationError> {
        let table = self.validate(cart)?;
        Order::new(table, cart, placed_at)
    }

    /// Guard rechazado: se muestra el error, no hay llamada de red
    pub fn reject(&mut self, error: ValidationError) {
        if self.is_submitting() {
            // El envío en curso no se pisa con el rechazo de un doble click
            return;
        }
        self.submission = SubmissionState::Failed(error.into());
    }

    pub fn start_submission(&mut self, attempt: u64) {
        self.attempt = attempt;
        self.submission = SubmissionState::Submitting;
    }

    /// Resuelve el envío en curso. Devuelve `true` si hay que vaciar el carrito.
    pub fn finish_submission(&mut self, result: Result<(), NotificationError>) -> bool {
        if !self.is_submitting() {
            log::warn!("⚠️ [ORDER] Resultado de envío sin envío en curso, ignorado");
            return false;
        }
        match result {
            Ok(()) => {
                self.submission = SubmissionState::Succeeded;
                self.table = None;
                self.cart_open = false;
                true
            }
            Err(error) => {
                self.submission = SubmissionState::Failed(error.into());
                false
            }
        }
    }

    /// Fin del banner de éxito del intento `attempt`; un timer viejo no hace nada
    pub fn acknowledge_success(&mut self, attempt: u64) {
        if self.show_success() && attempt == self.attempt {
            self.submission = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::Dish;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(20, 0, 0).unwrap()
    }

    fn cart_with_one_dish() -> Cart {
        let mut cart = Cart::new();
        cart.add(&Dish::new(1, "Суп", 180, "", "soups").unwrap());
        cart
    }

    #[test]
    fn test_fresh_store_cannot_submit() {
        let store = OrderStore::default();
        assert_eq!(store.submission, SubmissionState::Idle);
        assert_eq!(store.category, CategoryFilter::All);
        assert!(!store.can_submit(&Cart::new()));
        assert!(!store.can_submit(&cart_with_one_dish()));
    }

    #[test]
    fn test_guard_requires_table_and_lines() {
        let mut store = OrderStore::default();
        assert_eq!(store.validate(&cart_with_one_dish()), Err(ValidationError::NoTable));

        store.select_table(Some(TableNumber::new(3).unwrap()));
        assert_eq!(store.validate(&Cart::new()), Err(ValidationError::EmptyCart));
        assert!(store.can_submit(&cart_with_one_dish()));
    }

    #[test]
    fn test_rejection_surfaces_validation_error() {
        let mut store = OrderStore::default();
        let err = store.prepare_order(&cart_with_one_dish(), now()).unwrap_err();
        store.reject(err);
        assert_eq!(store.last_error(), Some(&OrderError::Validation(ValidationError::NoTable)));
        assert!(!store.is_submitting());
    }

    #[test]
    fn test_success_clears_table_and_closes_panel() {
        let mut store = OrderStore::default();
        store.open_cart();
        store.select_table(Some(TableNumber::new(5).unwrap()));
        let order = store.prepare_order(&cart_with_one_dish(), now()).unwrap();
        assert_eq!(order.table.get(), 5);

        store.start_submission(1);
        assert!(store.is_submitting());
        assert_eq!(
            store.validate(&cart_with_one_dish()),
            Err(ValidationError::AlreadySubmitting)
        );

        assert!(store.finish_submission(Ok(())));
        assert!(store.show_success());
        assert_eq!(store.table, None);
        assert!(!store.cart_open);

        store.acknowledge_success(1);
        assert_eq!(store.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_stale_acknowledge_keeps_newer_success() {
        let mut store = OrderStore::default();
        store.start_submission(1);
        store.finish_submission(Ok(()));
        store.start_submission(2);
        store.finish_submission(Ok(()));

        store.acknowledge_success(1);
        assert!(store.show_success());

        store.acknowledge_success(2);
        assert_eq!(store.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_failure_keeps_table_for_retry() {
        let mut store = OrderStore::default();
        store.open_cart();
        store.select_table(Some(TableNumber::new(2).unwrap()));
        store.start_submission(1);

        let cleared = store.finish_submission(Err(NotificationError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        }));

        assert!(!cleared);
        assert!(matches!(store.last_error(), Some(OrderError::Notification(_))));
        assert_eq!(store.table, Some(TableNumber::new(2).unwrap()));
        assert!(store.cart_open);
        assert!(store.can_submit(&cart_with_one_dish()));

        // acknowledge no toca un fallo
        store.acknowledge_success(1);
        assert!(store.last_error().is_some());
    }

    #[test]
    fn test_double_click_does_not_clobber_submission() {
        let mut store = OrderStore::default();
        store.select_table(Some(TableNumber::new(1).unwrap()));
        store.start_submission(1);
        store.reject(ValidationError::AlreadySubmitting);
        assert!(store.is_submitting());
    }

    #[test]
    fn test_stray_result_is_ignored() {
        let mut store = OrderStore::default();
        assert!(!store.finish_submission(Ok(())));
        assert_eq!(store.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_reset_table() {
        let mut store = OrderStore::default();
        store.select_table(Some(TableNumber::new(9).unwrap()));
        store.reset_table();
        assert_eq!(store.table, None);
    }
}
