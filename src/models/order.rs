use std::fmt;
use std::str::FromStr;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::error::{ModelError, ValidationError};
use super::{Cart, CartLine};

/// Número de mesa (1..=10)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TableNumber(u8);

impl TableNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(number: u8) -> Result<Self, ModelError> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ModelError::TableOutOfRange(number))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Todas las mesas seleccionables, en orden
    pub fn all() -> impl Iterator<Item = TableNumber> {
        (Self::MIN..=Self::MAX).map(TableNumber)
    }
}

impl TryFrom<u8> for TableNumber {
    type Error = ModelError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        TableNumber::new(number)
    }
}

impl From<TableNumber> for u8 {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

impl FromStr for TableNumber {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u8>()
            .map_err(|_| ModelError::InvalidTable(s.to_string()))?;
        TableNumber::new(number)
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pedido listo para enviar. Efímero: solo existe durante el envío.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub table: TableNumber,
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub placed_at: NaiveDateTime,
}

impl Order {
    pub fn new(table: TableNumber, cart: &Cart, placed_at: NaiveDateTime) -> Result<Self, ValidationError> {
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        Ok(Self {
            table,
            lines: cart.lines().to_vec(),
            total: cart.total(),
            placed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dish;
    use chrono::NaiveDate;

    #[test]
    fn test_table_range() {
        assert!(TableNumber::new(0).is_err());
        assert!(TableNumber::new(11).is_err());
        assert_eq!(TableNumber::new(10).unwrap().get(), 10);
        assert_eq!(TableNumber::all().count(), 10);
    }

    #[test]
    fn test_table_from_select_value() {
        assert_eq!("3".parse::<TableNumber>(), Ok(TableNumber(3)));
        assert!("".parse::<TableNumber>().is_err());
        assert!("12".parse::<TableNumber>().is_err());
    }

    #[test]
    fn test_order_requires_lines() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let table = TableNumber::new(2).unwrap();
        assert_eq!(Order::new(table, &Cart::new(), now), Err(ValidationError::EmptyCart));

        let mut cart = Cart::new();
        cart.add(&Dish::new(1, "Суп", 180, "", "soups").unwrap());
        let order = Order::new(table, &cart, now).unwrap();
        assert_eq!(order.total, 180);
        assert_eq!(order.lines.len(), 1);
    }
}
