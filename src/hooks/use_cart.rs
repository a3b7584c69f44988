// ============================================================================
// USE CART HOOK - CartStore dentro de Yew
// ============================================================================
// Reducer en lugar de use_state: una mutación siempre se aplica sobre el
// último estado, aunque el callback se haya creado en un render anterior.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::models::Dish;
use crate::services::{CartPersistence, LocalStorageCartPersistence};
use crate::stores::CartStore;

pub enum CartAction {
    Add(Dish),
    Remove(u32),
    Clear,
}

impl<P: CartPersistence + Clone> Reducible for CartStore<P> {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CartAction::Add(dish) => next.add_to_cart(&dish),
            CartAction::Remove(dish_id) => {
                next.remove_from_cart(dish_id);
            }
            CartAction::Clear => next.clear_cart(),
        }
        next.into()
    }
}

#[derive(Clone)]
pub struct UseCartHandle {
    pub state: UseReducerHandle<CartStore<LocalStorageCartPersistence>>,
    pub add: Callback<Dish>,
    pub remove: Callback<u32>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_cart() -> UseCartHandle {
    // Hidratación única desde localStorage
    let state = use_reducer(|| CartStore::hydrate(LocalStorageCartPersistence::default()));

    let add = {
        let state = state.clone();
        Callback::from(move |dish: Dish| {
            log::info!("➕ [CART] {}", dish.name());
            state.dispatch(CartAction::Add(dish));
        })
    };

    let remove = {
        let state = state.clone();
        Callback::from(move |dish_id: u32| state.dispatch(CartAction::Remove(dish_id)))
    };

    let clear = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(CartAction::Clear))
    };

    UseCartHandle {
        state,
        add,
        remove,
        clear,
    }
}
