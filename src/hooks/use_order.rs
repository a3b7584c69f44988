// ============================================================================
// USE ORDER HOOK - Estado de vista + envío del pedido
// ============================================================================
// El flag `in_flight` (use_mut_ref) se comprueba antes del dispatch, así dos
// clicks en el mismo frame no pueden lanzar dos envíos. `attempts` numera
// los envíos para que el timer del banner solo cierre el suyo.
// ============================================================================

use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::error::{NotificationError, ValidationError};
use crate::hooks::use_cart::UseCartHandle;
use crate::models::{CategoryFilter, TableNumber};
use crate::stores::OrderStore;
use crate::viewmodels::OrderViewModel;

pub enum OrderAction {
    SelectCategory(CategoryFilter),
    OpenCart,
    CloseCart,
    SelectTable(Option<TableNumber>),
    ResetTable,
    Rejected(ValidationError),
    Started(u64),
    Finished(Result<(), NotificationError>),
    AcknowledgeSuccess(u64),
}

impl Reducible for OrderStore {
    type Action = OrderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            OrderAction::SelectCategory(category) => next.select_category(category),
            OrderAction::OpenCart => next.open_cart(),
            OrderAction::CloseCart => next.close_cart(),
            OrderAction::SelectTable(table) => next.select_table(table),
            OrderAction::ResetTable => next.reset_table(),
            OrderAction::Rejected(error) => next.reject(error),
            OrderAction::Started(attempt) => next.start_submission(attempt),
            OrderAction::Finished(result) => {
                next.finish_submission(result);
            }
            OrderAction::AcknowledgeSuccess(attempt) => next.acknowledge_success(attempt),
        }
        next.into()
    }
}

#[derive(Clone)]
pub struct UseOrderHandle {
    pub state: UseReducerHandle<OrderStore>,
    pub select_category: Callback<CategoryFilter>,
    pub open_cart: Callback<()>,
    pub close_cart: Callback<()>,
    pub select_table: Callback<Option<TableNumber>>,
    pub clear_cart: Callback<()>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_order(cart: &UseCartHandle) -> UseOrderHandle {
    let state = use_reducer(OrderStore::default);
    let in_flight = use_mut_ref(|| false);
    let attempts = use_mut_ref(|| 0u64);

    let select_category = {
        let state = state.clone();
        Callback::from(move |category: CategoryFilter| {
            state.dispatch(OrderAction::SelectCategory(category))
        })
    };

    let open_cart = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(OrderAction::OpenCart))
    };

    let close_cart = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(OrderAction::CloseCart))
    };

    let select_table = {
        let state = state.clone();
        Callback::from(move |table: Option<TableNumber>| {
            state.dispatch(OrderAction::SelectTable(table))
        })
    };

    // Vaciar: carrito y mesa juntos
    let clear_cart = {
        let state = state.clone();
        let clear = cart.clear.clone();
        Callback::from(move |_| {
            log::info!("🗑️ [CART] Carrito vaciado");
            clear.emit(());
            state.dispatch(OrderAction::ResetTable);
        })
    };

    let submit = {
        let state = state.clone();
        let cart = cart.clone();
        let in_flight = in_flight.clone();
        let attempts = attempts.clone();
        Callback::from(move |_| {
            if *in_flight.borrow() {
                log::warn!("⚠️ [ORDER] Envío en curso, click ignorado");
                state.dispatch(OrderAction::Rejected(ValidationError::AlreadySubmitting));
                return;
            }

            let placed_at = chrono::Local::now().naive_local();
            let order = match state.prepare_order(cart.state.cart(), placed_at) {
                Ok(order) => order,
                Err(e) => {
                    log::warn!("⚠️ [ORDER] Pedido rechazado: {}", e);
                    state.dispatch(OrderAction::Rejected(e));
                    return;
                }
            };

            *in_flight.borrow_mut() = true;
            let attempt = {
                let mut attempts = attempts.borrow_mut();
                *attempts += 1;
                *attempts
            };
            state.dispatch(OrderAction::Started(attempt));
            log::info!("📤 [ORDER] Enviando pedido de la mesa {}", order.table);

            let state = state.clone();
            let clear = cart.clear.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let result = OrderViewModel::new().deliver(&order).await;
                *in_flight.borrow_mut() = false;

                let delivered = result.is_ok();
                state.dispatch(OrderAction::Finished(result));

                if delivered {
                    log::info!("✅ [ORDER] Pedido enviado");
                    clear.emit(());
                    let state = state.clone();
                    Timeout::new(CONFIG.success_banner_ms, move || {
                        state.dispatch(OrderAction::AcknowledgeSuccess(attempt));
                    })
                    .forget();
                }
            });
        })
    };

    UseOrderHandle {
        state,
        select_category,
        open_cart,
        close_cart,
        select_table,
        clear_cart,
        submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;
    use crate::stores::SubmissionState;

    fn reduce_all(actions: Vec<OrderAction>) -> Rc<OrderStore> {
        actions
            .into_iter()
            .fold(Rc::new(OrderStore::default()), |store, action| store.reduce(action))
    }

    #[test]
    fn test_successful_round_trip_through_reducer() {
        let store = reduce_all(vec![
            OrderAction::OpenCart,
            OrderAction::SelectTable(TableNumber::new(7).ok()),
            OrderAction::Started(1),
            OrderAction::Finished(Ok(())),
        ]);
        assert_eq!(store.submission, SubmissionState::Succeeded);
        assert_eq!(store.table, None);
        assert!(!store.cart_open);

        let store = store.reduce(OrderAction::AcknowledgeSuccess(1));
        assert_eq!(store.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_first_banner_timer_does_not_close_second_success() {
        let store = reduce_all(vec![
            OrderAction::SelectTable(TableNumber::new(3).ok()),
            OrderAction::Started(1),
            OrderAction::Finished(Ok(())),
            OrderAction::SelectTable(TableNumber::new(4).ok()),
            OrderAction::Started(2),
            OrderAction::Finished(Ok(())),
            OrderAction::AcknowledgeSuccess(1),
        ]);
        assert_eq!(store.submission, SubmissionState::Succeeded);

        let store = store.reduce(OrderAction::AcknowledgeSuccess(2));
        assert_eq!(store.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_failure_then_category_change_keeps_error() {
        let store = reduce_all(vec![
            OrderAction::SelectTable(TableNumber::new(2).ok()),
            OrderAction::Started(1),
            OrderAction::Finished(Err(NotificationError::Transport("offline".into()))),
            OrderAction::SelectCategory(CategoryFilter::from_id("soups")),
        ]);
        assert!(matches!(store.last_error(), Some(OrderError::Notification(_))));
        assert_eq!(store.category, CategoryFilter::Category("soups".into()));
        assert_eq!(store.table, TableNumber::new(2).ok());
    }

    #[test]
    fn test_reset_table_after_clear() {
        let store = reduce_all(vec![
            OrderAction::SelectTable(TableNumber::new(10).ok()),
            OrderAction::ResetTable,
        ]);
        assert_eq!(store.table, None);
    }
}
