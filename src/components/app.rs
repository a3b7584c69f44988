use yew::prelude::*;
use crate::hooks::{use_cart, use_language, use_order};
use crate::services::CatalogService;
use crate::utils::i18n::t;
use super::{CartModal, CategoryBar, DishCard, Header, StatusBanner};

#[function_component(App)]
pub fn app() -> Html {
    // Catálogo estático: se parsea una vez
    let catalog = use_memo((), |_| CatalogService::load_embedded());
    let language = use_language();
    let cart = use_cart();
    let order = use_order(&cart);

    let lang = *language.language;
    let store = &*order.state;
    let dishes = catalog.filter(&store.category);

    html! {
        <div class="App">
            <Header
                item_count={cart.state.item_count()}
                language={lang}
                on_open_cart={order.open_cart.clone()}
                on_select_language={language.set_language.clone()}
            />
            <main>
                <div class="mainContainer">
                    <StatusBanner submission={store.submission.clone()} language={lang} />
                    <CategoryBar
                        categories={catalog.categories().to_vec()}
                        selected={store.category.clone()}
                        on_select={order.select_category.clone()}
                        language={lang}
                    />
                    <div class="dishItemContainer">
                        if dishes.is_empty() {
                            <p class="empty-state">{t("no_dishes", lang)}</p>
                        } else {
                            { for dishes.into_iter().map(|dish| html! {
                                <DishCard
                                    key={dish.id().to_string()}
                                    dish={dish.clone()}
                                    quantity={cart.state.quantity_of(dish.id())}
                                    submitting={store.is_submitting()}
                                    language={lang}
                                    on_add={cart.add.clone()}
                                    on_remove={cart.remove.clone()}
                                />
                            }) }
                        }
                    </div>
                </div>
            </main>
            if store.cart_open {
                <CartModal
                    cart={cart.state.cart().clone()}
                    table={store.table}
                    can_submit={store.can_submit(cart.state.cart())}
                    submitting={store.is_submitting()}
                    language={lang}
                    on_select_table={order.select_table.clone()}
                    on_add={cart.add.clone()}
                    on_remove={cart.remove.clone()}
                    on_clear={order.clear_cart.clone()}
                    on_close={order.close_cart.clone()}
                    on_submit={order.submit.clone()}
                />
            }
        </div>
    }
}
