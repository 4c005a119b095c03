/// Widget configuration, passed in from JavaScript at startup
use crate::error::ConfigError;
use crate::website_data::Category;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong with your request";

/// How the creation endpoint returns the created record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ResponseShape {
    /// The body is the record itself
    #[default]
    Object,
    /// The body is a collection whose first element is the record
    FirstOfCollection,
}

/// How the category filter is presented
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CategoryFilterMode {
    #[default]
    Tabs,
    Select,
}

/// Which category field the filter sends as `?category=`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    #[default]
    Name,
    Id,
}

impl FilterKey {
    pub fn value_of(self, category: &Category) -> String {
        match self {
            FilterKey::Name => category.name.clone(),
            FilterKey::Id => category.id.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub base_url: String,
    /// Upper-case the first character of a supplied category
    pub normalize_category: bool,
    /// Sent when the user leaves the category empty
    pub default_category: Option<String>,
    pub created_response: ResponseShape,
    pub category_filter_mode: CategoryFilterMode,
    pub filter_key: FilterKey,
    /// Label of the unfiltered entry in the category filter
    pub all_label: String,
    pub failure_message: String,
    pub toast_duration_ms: u32,
}

impl WidgetConfig {
    /// Tab filter keyed by category id, capitalized categories, record
    /// returned as an object.
    pub fn tabs_variant() -> Self {
        WidgetConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            normalize_category: true,
            default_category: Some("All".to_string()),
            created_response: ResponseShape::Object,
            category_filter_mode: CategoryFilterMode::Tabs,
            filter_key: FilterKey::Id,
            all_label: "All".to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            toast_duration_ms: 4000,
        }
    }

    /// Dropdown filter keyed by category name, raw categories, record
    /// returned inside a collection.
    pub fn select_variant() -> Self {
        WidgetConfig {
            normalize_category: false,
            default_category: None,
            created_response: ResponseShape::FirstOfCollection,
            category_filter_mode: CategoryFilterMode::Select,
            filter_key: FilterKey::Name,
            ..Self::tabs_variant()
        }
    }

    /// The base URL is checked later, by `Endpoints::new`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Decode(e.to_string()))
    }

    /// `undefined` or `null` yields the default configuration.
    pub fn from_js_value(value: JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Decode(format!("{:?}", e)))
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::tabs_variant()
    }
}
