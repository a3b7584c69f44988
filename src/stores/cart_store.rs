// ============================================================================
// CART STORE - Carrito + persistencia inyectada
// ============================================================================
// Cada mutación termina con el snapshot completo escrito en el slot: estado
// en memoria y persistido no divergen después de una mutación.
// ============================================================================

use crate::models::{Cart, Dish};
use crate::services::CartPersistence;

#[derive(Clone, Debug)]
pub struct CartStore<P> {
    cart: Cart,
    persistence: P,
}

impl<P: CartPersistence> CartStore<P> {
    /// Lee el slot una sola vez; ausente o ilegible ⇒ carrito vacío
    pub fn hydrate(persistence: P) -> Self {
        let cart = match persistence.load() {
            Ok(cart) => {
                if !cart.is_empty() {
                    log::info!("🛒 [CART] Carrito restaurado: {} líneas", cart.len());
                }
                cart
            }
            Err(e) => {
                log::warn!("⚠️ [CART] Snapshot descartado, carrito vacío: {}", e);
                Cart::new()
            }
        };
        Self { cart, persistence }
    }

    pub fn add_to_cart(&mut self, dish: &Dish) {
        if !self.cart.add(dish) {
            log::warn!("⚠️ [CART] {} ya está en el máximo por línea", dish.name());
            return;
        }
        self.persist();
    }

    /// No-op (con warning) si el plato no está en el carrito
    pub fn remove_from_cart(&mut self, dish_id: u32) -> bool {
        if !self.cart.remove(dish_id) {
            log::warn!("⚠️ [CART] remove_from_cart({}) sin línea, ignorado", dish_id);
            return false;
        }
        self.persist();
        true
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn quantity_of(&self, dish_id: u32) -> u32 {
        self.cart.quantity_of(dish_id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.cart) {
            log::error!("❌ [CART] Error guardando carrito: {}", e);
        }
    }
}
