// ============================================================================
// CART - Líneas del pedido en curso
// ============================================================================
// Invariantes: una línea por plato, cantidad >= 1, orden = primer add.
// El total nunca se guarda, se recalcula en cada lectura.
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::error::ModelError;
use super::Dish;
use super::dish::deserialize_price;

/// Un plato y su cantidad dentro del carrito
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CartLineRecord", try_from = "CartLineRecord")]
pub struct CartLine {
    dish: Dish,
    quantity: u32,
}

impl CartLine {
    /// Tope por línea; un snapshot con más unidades se descarta
    pub const MAX_QUANTITY: u32 = 999;

    pub fn new(dish: Dish, quantity: u32) -> Result<Self, ModelError> {
        if quantity == 0 {
            return Err(ModelError::ZeroQuantity(dish.id()));
        }
        if quantity > Self::MAX_QUANTITY {
            return Err(ModelError::QuantityTooLarge { dish_id: dish.id(), quantity });
        }
        Ok(Self { dish, quantity })
    }

    pub fn dish(&self) -> &Dish {
        &self.dish
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.dish.price()) * u64::from(self.quantity)
    }
}

/// Registro plano del snapshot: `{ ...dish, quantity }`
#[derive(Serialize, Deserialize)]
struct CartLineRecord {
    id: u32,
    name: String,
    #[serde(deserialize_with = "deserialize_price")]
    price: u32,
    #[serde(rename = "imgSrc", alias = "image_url", default)]
    image_url: String,
    #[serde(rename = "itemId", alias = "category_id")]
    category_id: String,
    quantity: u32,
}

impl TryFrom<CartLineRecord> for CartLine {
    type Error = ModelError;

    fn try_from(record: CartLineRecord) -> Result<Self, Self::Error> {
        let dish = Dish::new(
            record.id,
            record.name,
            record.price,
            record.image_url,
            record.category_id,
        )?;
        CartLine::new(dish, record.quantity)
    }
}

impl From<CartLine> for CartLineRecord {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.dish.id(),
            name: line.dish.name().to_string(),
            price: line.dish.price(),
            image_url: line.dish.image_url().to_string(),
            category_id: line.dish.category_id().to_string(),
            quantity: line.quantity,
        }
    }
}

/// Carrito: secuencia ordenada de líneas
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<CartLine>", try_from = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Σ precio × cantidad
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Σ cantidades (badge del header)
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn quantity_of(&self, dish_id: u32) -> u32 {
        self.lines
            .iter()
            .find(|line| line.dish.id() == dish_id)
            .map_or(0, CartLine::quantity)
    }

    /// +1 a la línea existente o nueva línea al final.
    /// Devuelve `false` si la línea ya está en `CartLine::MAX_QUANTITY`.
    pub fn add(&mut self, dish: &Dish) -> bool {
        match self.lines.iter_mut().find(|line| line.dish.id() == dish.id()) {
            Some(line) if line.quantity >= CartLine::MAX_QUANTITY => false,
            Some(line) => {
                line.quantity += 1;
                true
            }
            None => {
                self.lines.push(CartLine {
                    dish: dish.clone(),
                    quantity: 1,
                });
                true
            }
        }
    }

    /// -1 a la línea; con cantidad 1 la línea desaparece.
    /// Devuelve `false` si el plato no estaba en el carrito.
    pub fn remove(&mut self, dish_id: u32) -> bool {
        let Some(index) = self.lines.iter().position(|line| line.dish.id() == dish_id) else {
            return false;
        };
        if self.lines[index].quantity == 1 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity -= 1;
        }
        true
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = ModelError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        let mut seen = std::collections::HashSet::new();
        for line in &lines {
            if !seen.insert(line.dish.id()) {
                return Err(ModelError::DuplicateCartLine(line.dish.id()));
            }
        }
        Ok(Self { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
