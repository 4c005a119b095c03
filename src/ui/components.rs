/// Reusable UI components

use crate::config::FilterKey;
use crate::website_data::{Category, Website};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WebsiteCardProps {
    pub website: Website,
    /// Absolute URL of the card image
    pub image_src: String,
}

#[function_component(WebsiteCard)]
pub fn website_card(props: &WebsiteCardProps) -> Html {
    let website = &props.website;

    html! {
        <div class="pf-v5-c-card website-card">
            <div class="website-card-image">
                <img src={props.image_src.clone()} alt={website.title.clone()} />
            </div>
            <div class="pf-v5-c-card__title">
                <span class="website-card-title">{&website.title}</span>
            </div>
            <div class="pf-v5-c-card__body">
                <p>{&website.description}</p>
            </div>
            <div class="pf-v5-c-card__footer">
                <a href={website.url.clone()} target="_blank" rel="noopener noreferrer">
                    {"Visit website"}
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    pub categories: Vec<Category>,
    pub active: Option<String>,
    /// Label of the leading "no filter" entry
    pub all_label: String,
    pub filter_key: FilterKey,
    /// Called with the filter value of the category, `None` for all
    pub on_select: Callback<Option<String>>,
}

#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryFilterProps) -> Html {
    let tab = |label: String, value: Option<String>| {
        let class = if props.active == value {
            "pf-v5-c-tabs__item pf-m-current"
        } else {
            "pf-v5-c-tabs__item"
        };
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(value.clone()));

        html! {
            <li class={class}>
                <button class="pf-v5-c-tabs__link" {onclick}>
                    <span class="pf-v5-c-tabs__item-text">{label}</span>
                </button>
            </li>
        }
    };

    html! {
        <div class="pf-v5-c-tabs category-tabs">
            <ul class="pf-v5-c-tabs__list">
                {tab(props.all_label.clone(), None)}
                {for props.categories.iter().map(|c| tab(c.name.clone(), Some(props.filter_key.value_of(c))))}
            </ul>
        </div>
    }
}

#[function_component(CategorySelect)]
pub fn category_select(props: &CategoryFilterProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                on_select.emit(if value.is_empty() { None } else { Some(value) });
            }
        })
    };

    let active = props.active.clone().unwrap_or_default();

    html! {
        <select class="pf-v5-c-form-control category-select" {onchange}>
            <option value="" selected={active.is_empty()}>{&props.all_label}</option>
            {for props.categories.iter().map(|c| {
                let value = props.filter_key.value_of(c);
                html! {
                    <option selected={active == value} value={value.clone()}>{&c.name}</option>
                }
            })}
        </select>
    }
}
