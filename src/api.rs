/// Listing service: endpoint layout and the HTTP client behind it

use crate::error::{ConfigError, Result};
use crate::website_data::{Category, CategoryList, CreateWebsiteRequest, Website, WebsiteList};
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::RequestMode;

/// Status the creation endpoint answers with on success
pub const STATUS_CREATED: u16 = 201;

/// URLs of the listing service, all relative to one base origin
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> std::result::Result<Self, ConfigError> {
        url::Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Endpoints {
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/website/list`, with `?category=NAME` when filtering
    pub fn list(&self, category: Option<&str>) -> String {
        match category {
            Some(name) => {
                let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
                format!("{}/website/list?category={}", self.base, encoded)
            }
            None => format!("{}/website/list", self.base),
        }
    }

    pub fn categories(&self) -> String {
        format!("{}/website/categories", self.base)
    }

    pub fn create(&self) -> String {
        format!("{}/website/create", self.base)
    }

    /// Where a record's `image` is served from
    pub fn image(&self, image: &str) -> String {
        format!("{}/{}", self.base, image.trim_start_matches('/'))
    }
}

/// Raw answer of the creation endpoint; interpreting it is up to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReply {
    pub status: u16,
    /// Parsed JSON body, `Value::Null` when the body is empty or not JSON
    pub body: Value,
}

/// The remote API the widget lists from and submits to
#[allow(async_fn_in_trait)]
pub trait ListingService {
    async fn list_websites(&self, category: Option<&str>) -> Result<Vec<Website>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn create_website(&self, request: &CreateWebsiteRequest) -> Result<CreateReply>;
}

/// Listing service reached over `fetch`
#[derive(Debug, Clone)]
pub struct HttpListingService {
    endpoints: Endpoints,
}

impl HttpListingService {
    pub fn new(endpoints: Endpoints) -> Self {
        HttpListingService { endpoints }
    }
}

impl ListingService for HttpListingService {
    async fn list_websites(&self, category: Option<&str>) -> Result<Vec<Website>> {
        let url = self.endpoints.list(category);
        log::debug!("GET {}", url);

        let envelope: WebsiteList = Request::get(&url).send().await?.json().await?;
        Ok(envelope.list)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let url = self.endpoints.categories();
        log::debug!("GET {}", url);

        let envelope: CategoryList = Request::get(&url).send().await?.json().await?;
        Ok(envelope.categories)
    }

    async fn create_website(&self, request: &CreateWebsiteRequest) -> Result<CreateReply> {
        let url = self.endpoints.create();
        log::debug!("POST {} ({})", url, request.url);

        let response = Request::post(&url)
            .mode(RequestMode::Cors)
            .header("Content-Type", "application/json")
            .json(request)?
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(CreateReply { status, body })
    }
}
