/// Error types for the submission flow and widget configuration
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("URL rejected by validator: {url:?}")]
    ValidationRejected { url: String },

    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    #[error("A submission is already in flight")]
    SubmissionInFlight,
}

impl FlowError {
    pub fn request_failed(message: impl std::fmt::Display) -> FlowError {
        FlowError::RequestFailed {
            message: message.to_string(),
        }
    }
}

impl From<gloo_net::Error> for FlowError {
    fn from(err: gloo_net::Error) -> Self {
        FlowError::request_failed(err)
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(err: serde_json::Error) -> Self {
        FlowError::request_failed(format!("Malformed response body: {}", err))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid widget config: {0}")]
    Decode(String),
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message() {
        let err = FlowError::request_failed("status 500");
        assert_eq!(err.to_string(), "Request failed: status 500");
    }

    #[test]
    fn test_json_errors_become_request_failures() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FlowError = json_err.into();
        assert!(matches!(err, FlowError::RequestFailed { .. }));
    }
}
