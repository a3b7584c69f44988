// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "RU",
            Language::En => "EN",
        }
    }

    /// Código desconocido ⇒ RU
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "EN" => Language::En,
            _ => Language::Ru,
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Ru, Language::En]
    }
}

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: Language) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang {
        Language::Ru => {
            // Header + menú
            translations.insert("logo", "KhazhFood");
            translations.insert("category_all", "Все");
            translations.insert("no_dishes", "В этой категории пока нет блюд");
            translations.insert("currency", "₽");

            // Carrito
            translations.insert("cart_title", "Ваш заказ");
            translations.insert("table_label", "Номер стола");
            translations.insert("table_placeholder", "Выберите стол");
            translations.insert("cart_empty", "Корзина пуста");
            translations.insert("cart_total", "Итого");
            translations.insert("clear_cart", "Очистить");
            translations.insert("close_cart", "Закрыть");
            translations.insert("submit_order", "Отправить заказ");

            // Estado del envío
            translations.insert("loading", "Загрузка...");
            translations.insert("success_message", "Заказ отправлен! Официант скоро подойдёт.");
            translations.insert("error_validation", "Выберите стол и добавьте блюда в корзину");
            translations.insert("error_in_progress", "Заказ уже отправляется, подождите");
            translations.insert("error_notification", "Не удалось отправить заказ. Попробуйте ещё раз.");

            // Mensaje para el personal
            translations.insert("order_header", "Новый заказ");
            translations.insert("order_table", "Стол");
            translations.insert("order_dishes", "Блюда");
            translations.insert("order_total", "Итого");
            translations.insert("order_date", "Дата");
        }
        Language::En => {
            translations.insert("logo", "KhazhFood");
            translations.insert("category_all", "All");
            translations.insert("no_dishes", "No dishes in this category yet");
            translations.insert("currency", "₽");

            translations.insert("cart_title", "Your order");
            translations.insert("table_label", "Table number");
            translations.insert("table_placeholder", "Choose a table");
            translations.insert("cart_empty", "Your cart is empty");
            translations.insert("cart_total", "Total");
            translations.insert("clear_cart", "Clear");
            translations.insert("close_cart", "Close");
            translations.insert("submit_order", "Place order");

            translations.insert("loading", "Loading...");
            translations.insert("success_message", "Order sent! A waiter will be with you shortly.");
            translations.insert("error_validation", "Choose a table and add dishes to the cart");
            translations.insert("error_in_progress", "Your order is already being sent");
            translations.insert("error_notification", "Could not send the order. Please try again.");

            translations.insert("order_header", "New order");
            translations.insert("order_table", "Table");
            translations.insert("order_dishes", "Dishes");
            translations.insert("order_total", "Total");
            translations.insert("order_date", "Date");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave tal cual si no hay traducción
pub fn t(key: &str, lang: Language) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_fallback() {
        assert_eq!(t("order_table", Language::Ru), "Стол");
        assert_eq!(t("order_table", Language::En), "Table");
        assert_eq!(t("missing_key", Language::Ru), "missing_key");
    }

    #[test]
    fn test_languages_share_keys() {
        let ru = get_translations(Language::Ru);
        let en = get_translations(Language::En);
        let mut ru_keys: Vec<_> = ru.keys().collect();
        let mut en_keys: Vec<_> = en.keys().collect();
        ru_keys.sort();
        en_keys.sort();
        assert_eq!(ru_keys, en_keys);
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!(Language::parse_lossy("en"), Language::En);
        assert_eq!(Language::parse_lossy("RU"), Language::Ru);
        assert_eq!(Language::parse_lossy("fr"), Language::Ru);
    }
}
