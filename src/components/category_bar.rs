use yew::prelude::*;
use crate::models::{Category, CategoryFilter};
use crate::utils::i18n::{t, Language};

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryBarProps {
    pub categories: Vec<Category>,
    pub selected: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
    pub language: Language,
}

#[function_component(CategoryBar)]
pub fn category_bar(props: &CategoryBarProps) -> Html {
    let chip = |filter: CategoryFilter, label: String| {
        let class = classes!("rowMenuCard", (filter == props.selected).then_some("active"));
        let on_click = {
            let cb = props.on_select.clone();
            let filter = filter.clone();
            Callback::from(move |_e: MouseEvent| cb.emit(filter.clone()))
        };
        html! {
            <div key={filter.as_id().to_string()} class={class} onclick={on_click}>
                <h3>{label}</h3>
            </div>
        }
    };

    html! {
        <div class="rowContainer">
            { chip(CategoryFilter::All, t("category_all", props.language)) }
            { for props.categories.iter().map(|category| {
                chip(CategoryFilter::from_id(&category.id), category.name.clone())
            }) }
        </div>
    }
}
