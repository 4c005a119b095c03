/// View state of the widget, updated through a Yew reducer

use crate::website_data::{Category, Website};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetView {
    pub cards: Vec<Website>,
    pub categories: Vec<Category>,
    pub suggestions: Vec<String>,
    pub panel_open: bool,
    pub busy: bool,
    pub url_value: String,
    pub category_value: String,
    /// Filter value (category name or id) in use, `None` for all
    pub active_category: Option<String>,
    pub toast: Option<Toast>,
}

pub enum ViewAction {
    ClearCards,
    AddCard(Website),
    SetCategories(Vec<Category>),
    SetSuggestions(Vec<String>),
    SetBusy(bool),
    ClearForm,
    SetPanelOpen(bool),
    UrlInput(String),
    CategoryInput(String),
    SelectCategory(Option<String>),
    ShowToast(Toast),
    DismissToast(u32),
}

impl Reducible for WidgetView {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ViewAction::ClearCards => next.cards.clear(),
            ViewAction::AddCard(website) => next.cards.push(website),
            ViewAction::SetCategories(categories) => next.categories = categories,
            ViewAction::SetSuggestions(names) => next.suggestions = names,
            ViewAction::SetBusy(busy) => next.busy = busy,
            ViewAction::ClearForm => {
                next.url_value.clear();
                next.category_value.clear();
            }
            ViewAction::SetPanelOpen(open) => next.panel_open = open,
            ViewAction::UrlInput(value) => next.url_value = value,
            ViewAction::CategoryInput(value) => next.category_value = value,
            ViewAction::SelectCategory(category) => next.active_category = category,
            ViewAction::ShowToast(toast) => next.toast = Some(toast),
            ViewAction::DismissToast(id) => {
                // A newer toast stays up until its own timer fires
                if next.toast.as_ref().is_some_and(|t| t.id == id) {
                    next.toast = None;
                }
            }
        }

        next.into()
    }
}
