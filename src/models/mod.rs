pub mod dish;
pub mod category;
pub mod cart;
pub mod order;
pub mod catalog;

pub use dish::Dish;
pub use category::{Category, CategoryFilter, ALL_CATEGORIES_ID};
pub use cart::{Cart, CartLine};
pub use order::{Order, TableNumber};
pub use catalog::Catalog;
