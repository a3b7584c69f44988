use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::Dish;
use crate::utils::i18n::{t, Language};

const FALLBACK_ATTR: &str = "data-fallback";

/// `src` ya apunta a la imagen de reserva (el navegador la devuelve absoluta)
fn is_placeholder(src: &str, placeholder: &str) -> bool {
    let placeholder = placeholder.trim_start_matches("./");
    !placeholder.is_empty() && src.ends_with(placeholder)
}

/// Cambia a la imagen de reserva una sola vez (sin bucle si también falla)
pub fn image_fallback() -> Callback<Event> {
    Callback::from(|e: Event| {
        let Some(img) = e.target_dyn_into::<web_sys::HtmlImageElement>() else {
            return;
        };
        if img.get_attribute(FALLBACK_ATTR).is_some()
            || is_placeholder(&img.src(), &CONFIG.placeholder_image_url)
        {
            return;
        }
        if let Err(e) = img.set_attribute(FALLBACK_ATTR, "1") {
            log::warn!("⚠️ [MENU] No se pudo marcar la imagen de reserva: {:?}", e);
            return;
        }
        img.set_src(&CONFIG.placeholder_image_url);
    })
}

/// Contador visible solo con unidades; +/- bloqueados durante un envío
fn counter_controls(quantity: u32, submitting: bool) -> (bool, bool) {
    (quantity > 0, !submitting)
}

#[derive(Properties, PartialEq, Clone)]
pub struct DishCardProps {
    pub dish: Dish,
    pub quantity: u32,
    #[prop_or(false)]
    pub submitting: bool,
    pub language: Language,
    pub on_add: Callback<Dish>,
    pub on_remove: Callback<u32>,
}

#[function_component(DishCard)]
pub fn dish_card(props: &DishCardProps) -> Html {
    let dish = &props.dish;

    let add_click = {
        let cb = props.on_add.clone();
        let dish = dish.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(dish.clone()))
    };

    let remove_click = {
        let cb = props.on_remove.clone();
        let id = dish.id();
        Callback::from(move |_e: MouseEvent| cb.emit(id))
    };

    let (show_counter, enabled) = counter_controls(props.quantity, props.submitting);

    // Entrada escalonada
    let style = format!("animation-delay: {:.1}s", f64::from(dish.id()) * 0.1);

    html! {
        <div class="itemCard" style={style}>
            <div class="imgBox">
                <img src={dish.image_url().to_string()} alt={dish.name().to_string()} onerror={image_fallback()} />
            </div>
            <div class="itemContent">
                <h3 class="itemName">{dish.name()}</h3>
                <div class="bottom">
                    <h3 class="price">{format!("{} {}", dish.price(), t("currency", props.language))}</h3>
                    <div class="counter">
                        if show_counter {
                            <button class="minus" onclick={remove_click} disabled={!enabled}>{"−"}</button>
                            <span class="quantity">{props.quantity}</span>
                        }
                        <button class="plus" onclick={add_click} disabled={!enabled}>{"+"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_controls() {
        assert_eq!(counter_controls(0, false), (false, true));
        assert_eq!(counter_controls(2, false), (true, true));
        assert_eq!(counter_controls(2, true), (true, false));
    }

    #[test]
    fn test_placeholder_detection() {
        let placeholder = "https://via.placeholder.com/240x120";
        assert!(is_placeholder(placeholder, placeholder));
        assert!(is_placeholder("http://localhost:8080/img/none.png", "./img/none.png"));
        assert!(!is_placeholder("https://cdn.example/borsch.jpg", placeholder));
        assert!(!is_placeholder("https://cdn.example/borsch.jpg", ""));
    }
}
