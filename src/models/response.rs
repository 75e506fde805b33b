use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{AppError, AppResult};

pub const PROXY_PROVIDER: &str = "Fixie";
const SUCCESS_MESSAGE: &str = "Request successful via Fixie static IP";
const SUCCESS_NOTE: &str = "The IP address shown is your Fixie static IP";
const REQUEST_FAILED: &str = "Failed to make request";
const MISSING_CONFIG_HINT: &str = "Please set FIXIE_URL in your environment variables";
const NO_RESPONSE_DATA: &str = "No response data";

/// Body of a successful invocation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuccessBody {
    pub message: String,
    /// Upstream `origin` as received; absent when the body has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_ip: Option<Value>,
    pub proxied_through: String,
    pub note: String,
    pub full_response: Value,
}

impl SuccessBody {
    /// Wrap the upstream body; `static_ip` is its `origin` field
    pub fn from_upstream(full_response: Value) -> Self {
        let static_ip = full_response.get("origin").cloned();

        Self {
            message: SUCCESS_MESSAGE.to_string(),
            static_ip,
            proxied_through: PROXY_PROVIDER.to_string(),
            note: SUCCESS_NOTE.to_string(),
            full_response,
        }
    }
}

/// `details` of a failure body: the upstream response, or a fixed marker string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FailureDetails {
    Response { status: u16, data: Value },
    Message(String),
}

impl FailureDetails {
    pub fn no_response() -> Self {
        FailureDetails::Message(NO_RESPONSE_DATA.to_string())
    }
}

/// Body of a failed invocation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailureBody {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FailureDetails>,
}

impl FailureBody {
    pub fn from_error(err: &AppError) -> Self {
        match err {
            AppError::MissingProxyUrl => Self {
                error: err.to_string(),
                message: MISSING_CONFIG_HINT.to_string(),
                details: None,
            },
            _ => Self {
                error: REQUEST_FAILED.to_string(),
                message: err.to_string(),
                details: Some(err.failure_details()),
            },
        }
    }
}

/// Response object handed back to the function runtime
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    pub body: String,
}

impl HandlerResponse {
    pub fn success(body: &SuccessBody) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status_code: 200,
            headers: Some(headers),
            body: encode_body(body, true),
        }
    }

    pub fn failure(err: &AppError) -> Self {
        // The missing-config body is compact; request failures are pretty-printed
        let pretty = !matches!(err, AppError::MissingProxyUrl);
        Self {
            status_code: 500,
            headers: None,
            body: encode_body(&FailureBody::from_error(err), pretty),
        }
    }

    pub fn from_result(result: &AppResult<SuccessBody>) -> Self {
        match result {
            Ok(body) => Self::success(body),
            Err(err) => Self::failure(err),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

fn encode_body<T: Serialize>(value: &T, pretty: bool) -> String {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    encoded.unwrap_or_else(|e| {
        tracing::error!("Failed to serialize response body: {}", e);
        serde_json::json!({ "error": REQUEST_FAILED }).to_string()
    })
}
