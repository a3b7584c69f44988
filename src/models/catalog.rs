use std::collections::HashSet;
use serde::Deserialize;
use crate::error::CatalogError;
use super::{Category, CategoryFilter, Dish};

/// Menú estático: categorías y platos en orden de presentación
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "MenuDocument")]
pub struct Catalog {
    categories: Vec<Category>,
    dishes: Vec<Dish>,
}

#[derive(Deserialize)]
struct MenuDocument {
    categories: Vec<Category>,
    dishes: Vec<Dish>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, dishes: Vec<Dish>) -> Result<Self, CatalogError> {
        let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        let mut ids = HashSet::new();
        for dish in &dishes {
            if !ids.insert(dish.id()) {
                return Err(CatalogError::DuplicateDishId(dish.id()));
            }
            if !known.contains(dish.category_id()) {
                return Err(CatalogError::UnknownCategory {
                    dish_id: dish.id(),
                    category_id: dish.category_id().to_string(),
                });
            }
        }
        Ok(Self { categories, dishes })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Vista derivada del filtro; vacía si ningún plato coincide
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Dish> {
        self.dishes.iter().filter(|dish| filter.matches(dish)).collect()
    }
}

impl TryFrom<MenuDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: MenuDocument) -> Result<Self, Self::Error> {
        Catalog::new(document.categories, document.dishes)
    }
}
