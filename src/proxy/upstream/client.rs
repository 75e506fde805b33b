// Upstream client
// One GET to the IP-echo endpoint through the Fixie proxy

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::error::Error as StdError;

use crate::error::{AppError, AppResult};
use crate::proxy::config::ProxyEndpoint;

pub struct UpstreamClient {
    http_client: Client,
}

impl UpstreamClient {
    pub fn new(endpoint: &ProxyEndpoint, timeout_ms: u64) -> AppResult<Self> {
        let http_client = crate::utils::http::create_client_with_proxy(timeout_ms, endpoint)?;
        Ok(Self { http_client })
    }

    /// Fetch the target and return its decoded body
    ///
    /// Transport failures surface as [`AppError::Network`]; a non-2xx
    /// answer from the target or the proxy surfaces as
    /// [`AppError::Upstream`] carrying that response.
    pub async fn fetch_origin(&self, target_url: &str) -> AppResult<Value> {
        let response = self
            .http_client
            .get(target_url)
            .send()
            .await
            .map_err(classify_send_error)?;
        let status = response.status();
        let text = response.text().await?;
        let data = decode_body(&text);

        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                data,
            });
        }

        Ok(data)
    }
}

/// Map a failed send, recovering a proxy 407 from a rejected CONNECT
///
/// HTTPS targets are tunnelled, and the connector reports a tunnel the
/// proxy refused for credentials as a connect error instead of a response.
/// Other tunnel refusals carry no status and stay network errors.
fn classify_send_error(err: reqwest::Error) -> AppError {
    if proxy_auth_rejected(&err) {
        let status = StatusCode::PROXY_AUTHENTICATION_REQUIRED;
        return AppError::Upstream {
            status: status.as_u16(),
            data: Value::String(status.canonical_reason().unwrap_or_default().to_string()),
        };
    }

    AppError::Network(err)
}

/// Whether any error in the source chain is a proxy-auth tunnel refusal
fn proxy_auth_rejected(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if mentions_proxy_auth(&e.to_string()) || mentions_proxy_auth(&format!("{:?}", e)) {
            return true;
        }
        current = e.source();
    }
    false
}

fn mentions_proxy_auth(text: &str) -> bool {
    let normalized: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    ["proxyauthrequired", "proxyauthorizationrequired", "proxyauthenticationrequired"]
        .iter()
        .any(|marker| normalized.contains(marker))
}

/// JSON when the body parses as JSON, otherwise the raw text as a JSON string
fn decode_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
