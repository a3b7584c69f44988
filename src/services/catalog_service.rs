use crate::error::CatalogError;
use crate::models::Catalog;

/// Menú embebido en el bundle
const EMBEDDED_MENU: &str = include_str!("../../assets/menu.json");

/// Carga del catálogo estático
pub struct CatalogService;

impl CatalogService {
    pub fn parse(json: &str) -> Result<Catalog, CatalogError> {
        serde_json::from_str::<Catalog>(json).map_err(|e| CatalogError::Malformed(e.to_string()))
    }

    /// Catálogo embebido; si está roto se loguea y la UI muestra el estado vacío
    pub fn load_embedded() -> Catalog {
        match Self::parse(EMBEDDED_MENU) {
            Ok(catalog) => {
                log::info!(
                    "📋 [CATALOG] Menú cargado: {} categorías, {} platos",
                    catalog.categories().len(),
                    catalog.dishes().len()
                );
                catalog
            }
            Err(e) => {
                log::error!("❌ [CATALOG] Menú inválido: {}", e);
                Catalog::default()
            }
        }
    }
}
