use crate::error::AppResult;
use crate::proxy::config::ProxyEndpoint;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Create an HTTP client that sends every request through the given proxy
///
/// Credentials go out as `Proxy-Authorization: Basic ...`.
pub fn create_client_with_proxy(timeout_ms: u64, endpoint: &ProxyEndpoint) -> AppResult<Client> {
    let proxy =
        Proxy::all(endpoint.proxy_url())?.basic_auth(&endpoint.username, &endpoint.password);
    tracing::debug!("HTTP client upstream proxy enabled: {}", endpoint);

    let client = Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .proxy(proxy)
        .build()?;

    Ok(client)
}
