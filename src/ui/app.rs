/// Website board: listing, category filter and creation panel

use crate::api::{Endpoints, HttpListingService};
use crate::config::{CategoryFilterMode, WidgetConfig};
use crate::flow::SubmissionFlow;
use crate::ui::components::{CategorySelect, CategoryTabs, WebsiteCard};
use crate::ui::renderer::YewRenderer;
use crate::ui::state::{ViewAction, WidgetView};
use crate::website_data::Draft;
use patternfly_yew::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

type BoardFlow = SubmissionFlow<HttpListingService, YewRenderer>;

#[derive(Properties, PartialEq)]
pub struct WebsiteBoardProps {
    pub config: WidgetConfig,
    pub endpoints: Endpoints,
}

#[function_component(WebsiteBoard)]
pub fn website_board(props: &WebsiteBoardProps) -> Html {
    let view = use_reducer(WidgetView::default);

    let flow: Rc<BoardFlow> = {
        let dispatcher = view.dispatcher();
        use_memo(
            (props.config.clone(), props.endpoints.clone()),
            move |(config, endpoints)| {
                let renderer = YewRenderer::new(dispatcher, config.toast_duration_ms);
                SubmissionFlow::new(
                    HttpListingService::new(endpoints.clone()),
                    renderer,
                    config.clone(),
                )
            },
        )
    };

    // Initial listing and categories on mount
    {
        let flow = flow.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(e) = flow.initialize().await {
                    log::warn!("Initial load failed: {}", e);
                }
            });
            || ()
        });
    }

    let on_open = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| flow.open_panel())
    };

    let on_close = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            flow.close_panel();
        })
    };

    let on_url_input = {
        let view = view.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                view.dispatch(ViewAction::UrlInput(input.value()));
            }
        })
    };

    let on_category_input = {
        let view = view.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                view.dispatch(ViewAction::CategoryInput(input.value()));
            }
        })
    };

    let on_submit = {
        let flow = flow.clone();
        let view = view.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = Draft::new(view.url_value.clone(), Some(view.category_value.as_str()));
            let flow = flow.clone();
            spawn_local(async move {
                if let Err(e) = flow.submit(draft).await {
                    log::debug!("Submission ended without a record: {}", e);
                }
            });
        })
    };

    let on_filter = {
        let flow = flow.clone();
        let view = view.clone();
        Callback::from(move |category: Option<String>| {
            view.dispatch(ViewAction::SelectCategory(category.clone()));

            let flow = flow.clone();
            spawn_local(async move {
                let _ = flow.render_listing(category.as_deref()).await;
            });
        })
    };

    let config = &props.config;
    let busy = view.busy;

    let filter = match config.category_filter_mode {
        CategoryFilterMode::Tabs => html! {
            <CategoryTabs
                categories={view.categories.clone()}
                active={view.active_category.clone()}
                all_label={config.all_label.clone()}
                filter_key={config.filter_key}
                on_select={on_filter}
            />
        },
        CategoryFilterMode::Select => html! {
            <CategorySelect
                categories={view.categories.clone()}
                active={view.active_category.clone()}
                all_label={config.all_label.clone()}
                filter_key={config.filter_key}
                on_select={on_filter}
            />
        },
    };

    html! {
        <div class="website-board">
            <header class="board-header">
                <h1 class="board-title">{"Websites"}</h1>
                {filter}
            </header>

            if let Some(toast) = view.toast.clone() {
                <div class="board-toast">
                    <Alert r#type={AlertType::Danger} title={toast.message} inline={true}>
                    </Alert>
                </div>
            }

            <div class="websites-grid">
                {for view.cards.iter().map(|website| html! {
                    <WebsiteCard
                        website={website.clone()}
                        image_src={props.endpoints.image(&website.image)}
                    />
                })}
            </div>

            <div class={classes!("creation-area", view.panel_open.then_some("open"))}>
                <div class={classes!("close-creation-area", busy.then_some("loading"))}>
                    if busy {
                        <Spinner />
                    } else {
                        <Button onclick={on_close} variant={ButtonVariant::Plain}>
                            {"×"}
                        </Button>
                    }
                </div>

                <form class="create-website-form" onsubmit={on_submit}>
                    <input
                        id="url-website"
                        type="text"
                        placeholder="https://example.com"
                        class={classes!("pf-v5-c-form-control", (!busy).then_some("validate"))}
                        value={view.url_value.clone()}
                        disabled={busy}
                        oninput={on_url_input}
                    />
                    <input
                        id="category-input"
                        type="text"
                        list="category-suggestions"
                        placeholder="Category"
                        class="pf-v5-c-form-control"
                        value={view.category_value.clone()}
                        oninput={on_category_input}
                    />
                    <datalist id="category-suggestions">
                        {for view.suggestions.iter().map(|name| html! {
                            <option value={name.clone()} />
                        })}
                    </datalist>
                    <button
                        type="submit"
                        class={classes!("pf-v5-c-button", "pf-m-primary", busy.then_some("pf-m-disabled"))}
                        disabled={busy}
                    >
                        {"Save website"}
                    </button>
                </form>
            </div>

            <div class="action-btn">
                <Button onclick={on_open} variant={ButtonVariant::Primary}>
                    {"+"}
                </Button>
            </div>
        </div>
    }
}
