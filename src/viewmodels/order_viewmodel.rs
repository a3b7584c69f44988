// ============================================================================
// ORDER VIEWMODEL - LÓGICA DE ENVÍO DEL PEDIDO
// ============================================================================
// Formatea el pedido y hace UN intento de entrega. Devuelve el resultado,
// los hooks actualizan el estado.
// ============================================================================

use crate::config::CONFIG;
use crate::error::NotificationError;
use crate::models::Order;
use crate::services::{format_order, OrderLabels, OrderNotifier, RelayNotificationClient};

/// ViewModel de pedido - SOLO lógica de negocio
pub struct OrderViewModel<N = RelayNotificationClient> {
    notifier: N,
    labels: OrderLabels,
}

impl OrderViewModel<RelayNotificationClient> {
    /// Relay de `CONFIG`; el mensaje va en el idioma del personal
    pub fn new() -> Self {
        Self::with_notifier(
            RelayNotificationClient::new(),
            OrderLabels::for_language(CONFIG.default_language()),
        )
    }
}

impl Default for OrderViewModel<RelayNotificationClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: OrderNotifier> OrderViewModel<N> {
    pub fn with_notifier(notifier: N, labels: OrderLabels) -> Self {
        Self { notifier, labels }
    }

    /// Entrega el pedido ya validado
    pub async fn deliver(&self, order: &Order) -> Result<(), NotificationError> {
        let formatted = format_order(order, &self.labels);
        log::info!(
            "🧾 [ORDER] Mesa {}: {} líneas, total {} {}",
            order.table,
            formatted.lines.len(),
            formatted.total,
            self.labels.currency
        );

        match self.notifier.send(&formatted.text).await {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("❌ [ORDER] Error enviando pedido: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use chrono::{NaiveDate, NaiveDateTime};
    use tokio_test::block_on;
    use crate::error::{OrderError, ValidationError};
    use crate::models::{Dish, TableNumber};
    use crate::services::MemoryCartPersistence;
    use crate::stores::{CartStore, OrderStore, SubmissionState};
    use crate::utils::i18n::Language;

    #[derive(Default)]
    struct FakeNotifier {
        sent: RefCell<Vec<String>>,
        fail_with: Option<NotificationError>,
    }

    impl OrderNotifier for FakeNotifier {
        async fn send(&self, text: &str) -> Result<(), NotificationError> {
            self.sent.borrow_mut().push(text.to_string());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(13, 30, 0).unwrap()
    }

    fn viewmodel(notifier: FakeNotifier) -> OrderViewModel<FakeNotifier> {
        OrderViewModel::with_notifier(notifier, OrderLabels::for_language(Language::Ru))
    }

    /// Mismo recorrido que el callback `submit` de `use_order`
    fn submit_once(
        vm: &OrderViewModel<FakeNotifier>,
        store: &mut OrderStore,
        cart: &mut CartStore<MemoryCartPersistence>,
    ) {
        match store.prepare_order(cart.cart(), now()) {
            Err(e) => store.reject(e),
            Ok(order) => {
                store.start_submission(store.attempt + 1);
                let result = block_on(vm.deliver(&order));
                if store.finish_submission(result) {
                    cart.clear_cart();
                }
            }
        }
    }

    fn filled_cart() -> CartStore<MemoryCartPersistence> {
        let mut cart = CartStore::hydrate(MemoryCartPersistence::new());
        let a = Dish::new(1, "Dish A", 100, "", "main").unwrap();
        let b = Dish::new(2, "Dish B", 50, "", "main").unwrap();
        cart.add_to_cart(&a);
        cart.add_to_cart(&a);
        cart.add_to_cart(&b);
        cart
    }

    #[test]
    fn test_success_clears_cart_and_table() {
        let vm = viewmodel(FakeNotifier::default());
        let mut store = OrderStore::default();
        let mut cart = filled_cart();
        store.open_cart();
        store.select_table(Some(TableNumber::new(3).unwrap()));

        submit_once(&vm, &mut store, &mut cart);

        let sent = vm.notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("Стол: 3"));
        assert!(sent[0].contains("- Dish A x2: 200 ₽\n- Dish B x1: 50 ₽"));
        assert!(sent[0].contains("Итого: 250 ₽"));
        assert!(cart.is_empty());
        assert_eq!(store.table, None);
        assert!(!store.cart_open);
        assert_eq!(store.submission, SubmissionState::Succeeded);

        store.acknowledge_success(store.attempt);
        assert_eq!(store.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_failure_keeps_cart_for_retry() {
        let vm = viewmodel(FakeNotifier {
            fail_with: Some(NotificationError::Transport("connection reset".into())),
            ..FakeNotifier::default()
        });
        let mut store = OrderStore::default();
        let mut cart = filled_cart();
        store.select_table(Some(TableNumber::new(4).unwrap()));

        submit_once(&vm, &mut store, &mut cart);

        assert!(matches!(store.last_error(), Some(OrderError::Notification(_))));
        assert_eq!(cart.total(), 250);
        assert_eq!(store.table, Some(TableNumber::new(4).unwrap()));
        assert!(store.can_submit(cart.cart()));

        // reintento sin volver a agregar platos
        submit_once(&vm, &mut store, &mut cart);
        assert_eq!(vm.notifier.sent.borrow().len(), 2);
    }

    #[test]
    fn test_invalid_submission_never_reaches_network() {
        let vm = viewmodel(FakeNotifier::default());

        let mut no_table = OrderStore::default();
        let mut cart = filled_cart();
        submit_once(&vm, &mut no_table, &mut cart);
        assert_eq!(no_table.last_error(), Some(&OrderError::Validation(ValidationError::NoTable)));

        let mut empty = OrderStore::default();
        empty.select_table(Some(TableNumber::new(1).unwrap()));
        let mut empty_cart = CartStore::hydrate(MemoryCartPersistence::new());
        submit_once(&vm, &mut empty, &mut empty_cart);
        assert_eq!(empty.last_error(), Some(&OrderError::Validation(ValidationError::EmptyCart)));

        assert!(vm.notifier.sent.borrow().is_empty());
        assert_eq!(cart.total(), 250);
    }
}
