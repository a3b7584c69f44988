use yew::prelude::*;
use crate::models::{Cart, Dish, TableNumber};
use crate::utils::i18n::{t, Language};
use super::dish_card::image_fallback;

#[derive(Properties, PartialEq, Clone)]
pub struct CartModalProps {
    pub cart: Cart,
    pub table: Option<TableNumber>,
    pub can_submit: bool,
    pub submitting: bool,
    pub language: Language,
    pub on_select_table: Callback<Option<TableNumber>>,
    pub on_add: Callback<Dish>,
    pub on_remove: Callback<u32>,
    pub on_clear: Callback<()>,
    pub on_close: Callback<()>,
    pub on_submit: Callback<()>,
}

#[function_component(CartModal)]
pub fn cart_modal(props: &CartModalProps) -> Html {
    let lang = props.language;
    let currency = t("currency", lang);

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let clear_click = {
        let cb = props.on_clear.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let submit_click = {
        let cb = props.on_submit.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    // Valor vacío o fuera de rango => sin mesa
    let table_change = {
        let cb = props.on_select_table.clone();
        Callback::from(move |e: Event| {
            let table = e
                .target_dyn_into::<web_sys::HtmlSelectElement>()
                .and_then(|select| select.value().parse::<TableNumber>().ok());
            cb.emit(table);
        })
    };

    let lines = props.cart.lines().iter().map(|line| {
        let dish = line.dish().clone();
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
        html! {
            <div key={dish.id().to_string()} class="cartItem">
                <div class="imgBox">
                    <img src={dish.image_url().to_string()} alt={dish.name().to_string()} onerror={image_fallback()} />
                </div>
                <div class="itemSection">
                    <h2 class="itemName">{dish.name()}</h2>
                    <div class="itemQuantity">
                        <button class="minus" onclick={remove_click} disabled={props.submitting}>{"−"}</button>
                        <span>{format!("x{}", line.quantity())}</span>
                        <button class="plus" onclick={add_click} disabled={props.submitting}>{"+"}</button>
                    </div>
                </div>
                <p class="itemPrice">{format!("{} {}", line.line_total(), currency)}</p>
            </div>
        }
    });

    html! {
        <div class="cart-backdrop" onclick={close_click.clone()}>
            <div class="rightMenu" onclick={stop}>
                <div class="cartCheckOutContainer">
                    <h3 class="cart-title">{t("cart_title", lang)}</h3>

                    <div class="table-select">
                        <label for="table-number">{t("table_label", lang)}</label>
                        <select id="table-number" onchange={table_change} disabled={props.submitting}>
                            <option value="" selected={props.table.is_none()}>
                                {t("table_placeholder", lang)}
                            </option>
                            { for TableNumber::all().map(|n| html! {
                                <option value={n.to_string()} selected={props.table == Some(n)}>
                                    {n.to_string()}
                                </option>
                            }) }
                        </select>
                    </div>

                    <div class="cartContainer">
                        if props.cart.is_empty() {
                            <p class="cart-empty">{t("cart_empty", lang)}</p>
                        } else {
                            { for lines }
                        }
                    </div>

                    <div class="totalSection">
                        <h3>{t("cart_total", lang)}</h3>
                        <p>
                            <span>{props.cart.total()}</span>
                            {" "}{currency.clone()}
                        </p>
                    </div>

                    <div class="cart-actions">
                        <button
                            class="button-clear"
                            onclick={clear_click}
                            disabled={props.cart.is_empty() || props.submitting}
                        >{t("clear_cart", lang)}</button>
                        <button class="button-close" onclick={close_click}>
                            {t("close_cart", lang)}
                        </button>
                        <button
                            class="checkOut"
                            onclick={submit_click}
                            disabled={!props.can_submit}
                        >
                            { if props.submitting { t("loading", lang) } else { t("submit_order", lang) } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
