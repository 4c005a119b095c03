/// Renderer backed by the widget's Yew reducer

use crate::flow::Renderer;
use crate::ui::state::{Toast, ViewAction, WidgetView};
use crate::website_data::{Category, Website};
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct YewRenderer {
    dispatcher: UseReducerDispatcher<WidgetView>,
    toast_duration_ms: u32,
    toast_counter: Cell<u32>,
}

impl YewRenderer {
    pub fn new(dispatcher: UseReducerDispatcher<WidgetView>, toast_duration_ms: u32) -> Self {
        YewRenderer {
            dispatcher,
            toast_duration_ms,
            toast_counter: Cell::new(0),
        }
    }

    fn dispatch(&self, action: ViewAction) {
        self.dispatcher.dispatch(action);
    }
}

impl Renderer for YewRenderer {
    fn show_busy(&self) {
        self.dispatch(ViewAction::SetBusy(true));
    }

    fn hide_busy(&self) {
        self.dispatch(ViewAction::SetBusy(false));
    }

    fn clear_form(&self) {
        self.dispatch(ViewAction::ClearForm);
    }

    fn open_panel(&self) {
        self.dispatch(ViewAction::SetPanelOpen(true));
    }

    fn close_panel(&self) {
        self.dispatch(ViewAction::SetPanelOpen(false));
    }

    fn clear_cards(&self) {
        self.dispatch(ViewAction::ClearCards);
    }

    fn render_card(&self, website: &Website) {
        self.dispatch(ViewAction::AddCard(website.clone()));
    }

    fn render_category_options(&self, categories: &[Category]) {
        self.dispatch(ViewAction::SetCategories(categories.to_vec()));
    }

    fn seed_autocomplete(&self, names: &[String]) {
        self.dispatch(ViewAction::SetSuggestions(names.to_vec()));
    }

    fn notify_failure(&self, message: &str) {
        let id = self.toast_counter.get();
        self.toast_counter.set(id.wrapping_add(1));

        self.dispatch(ViewAction::ShowToast(Toast {
            id,
            message: message.to_string(),
        }));

        let dispatcher = self.dispatcher.clone();
        let duration = self.toast_duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            dispatcher.dispatch(ViewAction::DismissToast(id));
        });
    }
}
