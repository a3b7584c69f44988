// ============================================================================
// CART PERSISTENCE - Slot clave/valor del carrito
// ============================================================================
// El CartStore recibe la persistencia inyectada; en el navegador es
// localStorage, en los tests un slot en memoria.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use crate::config::CONFIG;
use crate::error::PersistenceError;
use crate::models::Cart;

/// Colaborador de persistencia del carrito
pub trait CartPersistence {
    /// Slot ausente ⇒ carrito vacío
    fn load(&self) -> Result<Cart, PersistenceError>;

    fn save(&self, cart: &Cart) -> Result<(), PersistenceError>;
}

/// Persistencia en localStorage bajo una clave fija
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageCartPersistence {
    key: String,
}

impl LocalStorageCartPersistence {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStorageCartPersistence {
    fn default() -> Self {
        Self::new(CONFIG.cart_storage_key.clone())
    }
}

impl CartPersistence for LocalStorageCartPersistence {
    fn load(&self) -> Result<Cart, PersistenceError> {
        match LocalStorage::get::<Cart>(&self.key) {
            Ok(cart) => Ok(cart),
            Err(StorageError::KeyNotFound(_)) => Ok(Cart::new()),
            Err(StorageError::SerdeError(e)) => Err(PersistenceError::Malformed(e.to_string())),
            Err(StorageError::JsError(e)) => Err(PersistenceError::Unavailable(e.to_string())),
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), PersistenceError> {
        LocalStorage::set(&self.key, cart).map_err(|e| PersistenceError::Write(e.to_string()))
    }
}

/// Slot en memoria con el mismo formato JSON que localStorage.
/// Los clones comparten el slot, como dos lecturas de la misma clave.
#[derive(Clone, Debug, Default)]
pub struct MemoryCartPersistence {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryCartPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot precargado con un snapshot crudo (posiblemente inválido)
    pub fn with_snapshot(json: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(json.into()))),
        }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CartPersistence for MemoryCartPersistence {
    fn load(&self) -> Result<Cart, PersistenceError> {
        match self.slot.borrow().as_deref() {
            None => Ok(Cart::new()),
            Some(json) => serde_json::from_str(json)
                .map_err(|e| PersistenceError::Malformed(e.to_string())),
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(cart)
            .map_err(|e| PersistenceError::Write(e.to_string()))?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dish;

    #[test]
    fn test_empty_slot_loads_empty_cart() {
        assert_eq!(MemoryCartPersistence::new().load(), Ok(Cart::new()));
    }

    #[test]
    fn test_malformed_slot() {
        let persistence = MemoryCartPersistence::with_snapshot("{not json");
        assert!(matches!(persistence.load(), Err(PersistenceError::Malformed(_))));
    }

    #[test]
    fn test_save_then_load() {
        let persistence = MemoryCartPersistence::new();
        let mut cart = Cart::new();
        cart.add(&Dish::new(1, "Суп", 180, "soup.jpg", "soups").unwrap());
        cart.add(&Dish::new(1, "Суп", 180, "soup.jpg", "soups").unwrap());
        persistence.save(&cart).unwrap();

        let shared = persistence.clone();
        assert_eq!(shared.load(), Ok(cart));
        assert!(persistence.snapshot().unwrap().contains(r#""quantity":2"#));
    }
}
