use yew::prelude::*;
use crate::utils::i18n::{t, Language};

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub item_count: u64,
    pub language: Language,
    pub on_open_cart: Callback<()>,
    pub on_select_language: Callback<Language>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let lang = props.language;

    let open_click = {
        let cb = props.on_open_cart.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    // Badge oculto con carrito vacío
    let badge_class = if props.item_count > 0 {
        "cart_content"
    } else {
        "cart_content noCartItem"
    };

    html! {
        <header>
            <div class="logo">{t("logo", lang)}</div>
            <div class="language-toggle">
                { for Language::all().into_iter().map(|option| {
                    let on_click = {
                        let cb = props.on_select_language.clone();
                        Callback::from(move |_e: MouseEvent| cb.emit(option))
                    };
                    html! {
                        <button
                            class={if option == lang { "toggle-btn active" } else { "toggle-btn" }}
                            onclick={on_click}
                        >{option.as_str()}</button>
                    }
                }) }
            </div>
            <div class="shoppingCart" onclick={open_click}>
                <span class="cart-icon">{"🛒"}</span>
                <div class={badge_class}>
                    <p>{props.item_count}</p>
                </div>
            </div>
        </header>
    }
}
