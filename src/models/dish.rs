use serde::{Deserialize, Deserializer, Serialize};
use crate::error::ModelError;

/// Plato del catálogo (validado en construcción)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DishRecord", try_from = "DishRecord")]
pub struct Dish {
    id: u32,
    name: String,
    price: u32,
    image_url: String,
    category_id: String,
}

impl Dish {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u32,
        image_url: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Result<Self, ModelError> {
        if id == 0 {
            return Err(ModelError::InvalidDishId);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyDishName(id));
        }
        Ok(Self {
            id,
            name,
            price,
            image_url: image_url.into(),
            category_id: category_id.into(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }
}

/// Forma serializada de un plato: la misma del menú JSON y del snapshot
/// histórico de localStorage (`imgSrc`, `itemId`)
#[derive(Serialize, Deserialize)]
struct DishRecord {
    id: u32,
    name: String,
    #[serde(deserialize_with = "deserialize_price")]
    price: u32,
    #[serde(rename = "imgSrc", alias = "image_url", default)]
    image_url: String,
    #[serde(rename = "itemId", alias = "category_id")]
    category_id: String,
}

impl TryFrom<DishRecord> for Dish {
    type Error = ModelError;

    fn try_from(record: DishRecord) -> Result<Self, Self::Error> {
        Dish::new(record.id, record.name, record.price, record.image_url, record.category_id)
    }
}

impl From<Dish> for DishRecord {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
            price: dish.price,
            image_url: dish.image_url,
            category_id: dish.category_id,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(u32),
    Text(String),
}

/// Acepta el precio como número o como string numérico ("350")
pub(crate) fn deserialize_price<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Number(price) => Ok(price),
        PriceRepr::Text(text) => text
            .trim()
            .parse::<u32>()
            .map_err(|e| serde::de::Error::custom(format!("invalid price {:?}: {}", text, e))),
    }
}
