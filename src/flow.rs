/// Website submission flow: validation, busy state, creation and re-rendering

use crate::api::{CreateReply, ListingService, STATUS_CREATED};
use crate::config::{ResponseShape, WidgetConfig};
use crate::error::{FlowError, Result};
use crate::operations::{autocomplete_names, make_categories_unique, resolve_category};
use crate::validator::is_valid_url;
use crate::website_data::{Category, CreateWebsiteRequest, Draft, Website};
use std::cell::{Cell, RefCell};

/// Where the creation form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Failure,
}

/// Presentation layer driven by the flow.
///
/// Implementations own every visual detail; the flow only says what happened.
pub trait Renderer {
    /// Disable the URL input and submit control, mark the close control busy
    /// and drop the "validate" marker from the input.
    fn show_busy(&self);

    /// Undo everything `show_busy` did.
    fn hide_busy(&self);

    /// Empty the URL and category inputs.
    fn clear_form(&self);

    fn open_panel(&self);

    fn close_panel(&self);

    fn clear_cards(&self);

    fn render_card(&self, website: &Website);

    /// Fill the tab strip or dropdown used to filter by category.
    fn render_category_options(&self, categories: &[Category]);

    fn seed_autocomplete(&self, names: &[String]);

    fn notify_failure(&self, message: &str);
}

pub struct SubmissionFlow<S, R> {
    service: S,
    renderer: R,
    config: WidgetConfig,
    state: Cell<SubmissionState>,
    panel_open: Cell<bool>,
    /// Filter of the last listing request, `None` when unfiltered
    active_filter: RefCell<Option<String>>,
}

impl<S: ListingService, R: Renderer> SubmissionFlow<S, R> {
    pub fn new(service: S, renderer: R, config: WidgetConfig) -> Self {
        SubmissionFlow {
            service,
            renderer,
            config,
            state: Cell::new(SubmissionState::Idle),
            panel_open: Cell::new(false),
            active_filter: RefCell::new(None),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open.get()
    }

    pub fn active_filter(&self) -> Option<String> {
        self.active_filter.borrow().clone()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn open_panel(&self) {
        self.panel_open.set(true);
        self.renderer.open_panel();
    }

    /// Close the creation panel and clear the form.
    ///
    /// Ignored while a submission is in flight; returns whether the panel closed.
    pub fn close_panel(&self) -> bool {
        if self.state.get() == SubmissionState::Submitting {
            log::debug!("Close ignored, submission in flight");
            return false;
        }

        self.reset_to_idle();
        true
    }

    /// Render the unfiltered listing, then the category filter.
    pub async fn initialize(&self) -> Result<()> {
        self.render_listing(None).await?;
        self.refresh_categories().await?;
        Ok(())
    }

    /// Validate and send a draft, then render the created record.
    ///
    /// Any request failure notifies once and returns the flow to idle.
    pub async fn submit(&self, draft: Draft) -> Result<Website> {
        if self.state.get() == SubmissionState::Submitting {
            return Err(FlowError::SubmissionInFlight);
        }

        if !is_valid_url(&draft.url) {
            log::debug!("Rejected URL {:?}", draft.url);
            return Err(FlowError::ValidationRejected { url: draft.url });
        }

        self.transition(SubmissionState::Submitting);
        self.renderer.show_busy();

        let request = CreateWebsiteRequest {
            category: resolve_category(draft.category.as_deref(), &self.config),
            url: draft.url,
        };

        let created = match self.service.create_website(&request).await {
            Ok(reply) => self.created_record(reply),
            Err(e) => Err(e),
        };

        match created {
            Ok(website) => {
                self.transition(SubmissionState::Success);
                self.reset_to_idle();
                log::info!("Created website {}", website.url);

                // Under a filter the record may not belong; let the server decide.
                match self.active_filter() {
                    None => self.renderer.render_card(&website),
                    Some(filter) => {
                        let _ = self.render_listing(Some(&filter)).await;
                    }
                }
                // Failures here are reported on their own.
                let _ = self.refresh_categories().await;
                Ok(website)
            }
            Err(e) => {
                self.transition(SubmissionState::Failure);
                self.fail(&e);
                Err(e)
            }
        }
    }

    /// Replace the rendered cards with the listing for `category`.
    pub async fn render_listing(&self, category: Option<&str>) -> Result<usize> {
        log::debug!("Rendering cards for {:?}", category);
        self.active_filter.replace(category.map(str::to_string));
        self.renderer.clear_cards();

        match self.service.list_websites(category).await {
            Ok(websites) => {
                for website in &websites {
                    self.renderer.render_card(website);
                }
                Ok(websites.len())
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    /// Fetch categories and feed both the filter control and autocomplete.
    pub async fn refresh_categories(&self) -> Result<Vec<Category>> {
        match self.service.list_categories().await {
            Ok(categories) => {
                let categories = make_categories_unique(categories);
                self.renderer.seed_autocomplete(&autocomplete_names(&categories));
                self.renderer.render_category_options(&categories);
                Ok(categories)
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    fn created_record(&self, reply: CreateReply) -> Result<Website> {
        if reply.status != STATUS_CREATED {
            return Err(FlowError::request_failed(format!(
                "Unexpected status {}",
                reply.status
            )));
        }

        let record = match self.config.created_response {
            ResponseShape::Object => reply.body,
            ResponseShape::FirstOfCollection => reply
                .body
                .as_array()
                .and_then(|items| items.first())
                .cloned()
                .ok_or_else(|| FlowError::request_failed("Empty creation response"))?,
        };

        Ok(serde_json::from_value(record)?)
    }

    /// Shared failure channel for creation, listing and category requests.
    fn fail(&self, err: &FlowError) {
        log::warn!("{}", err);
        // A listing failure must not unlock a submission that is still in flight.
        if self.state.get() != SubmissionState::Submitting {
            self.reset_to_idle();
        }
        self.renderer.notify_failure(&self.config.failure_message);
    }

    fn reset_to_idle(&self) {
        self.transition(SubmissionState::Idle);
        self.renderer.hide_busy();
        self.renderer.clear_form();
        self.panel_open.set(false);
        self.renderer.close_panel();
    }

    fn transition(&self, next: SubmissionState) {
        let previous = self.state.replace(next);
        if previous != next {
            log::debug!("Submission state {:?} -> {:?}", previous, next);
        }
    }
}
