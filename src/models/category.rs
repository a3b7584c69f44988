use serde::{Deserialize, Serialize};
use super::Dish;

/// Id reservado que significa "sin filtro"
pub const ALL_CATEGORIES_ID: &str = "all";

/// Categoría del menú
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "itemId", alias = "id")]
    pub id: String,
    pub name: String,
}

/// Filtro de categoría seleccionado en la barra superior
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORIES_ID {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(id.to_string())
        }
    }

    pub fn as_id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_ID,
            CategoryFilter::Category(id) => id,
        }
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => dish.category_id() == id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel() {
        assert_eq!(CategoryFilter::from_id("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.as_id(), "all");
        assert_eq!(CategoryFilter::from_id("drinks").as_id(), "drinks");
    }

    #[test]
    fn test_matches() {
        let tea = Dish::new(3, "Чай", 60, "", "drinks").unwrap();
        assert!(CategoryFilter::All.matches(&tea));
        assert!(CategoryFilter::from_id("drinks").matches(&tea));
        assert!(!CategoryFilter::from_id("soups").matches(&tea));
    }
}
