use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{HandlerConfig, HandlerResponse, SuccessBody};
use crate::proxy::config::ProxyEndpoint;
use crate::proxy::upstream::client::UpstreamClient;

pub type InvocationResult = AppResult<SuccessBody>;

/// Function entry point
///
/// The event is only logged. Every failure is folded into a 500 response,
/// so this never returns an error.
pub async fn handle(event: &Value, config: &HandlerConfig) -> HandlerResponse {
    info!("Function invoked");
    info!(
        "Event: {}",
        serde_json::to_string_pretty(event).unwrap_or_else(|_| event.to_string())
    );

    let result = invoke(config).await;
    match &result {
        Ok(body) => match &body.static_ip {
            Some(ip) => info!("Static IP: {}", ip),
            None => warn!("Upstream response carried no origin"),
        },
        Err(e @ AppError::MissingProxyUrl) => warn!("Rejecting invocation: {}", e),
        Err(e) => {
            error!("Error making request: {}", e);
            debug!("Error details: {:?}", e);
        }
    }

    HandlerResponse::from_result(&result)
}

/// Parse the proxy, make the proxied GET and shape the success body
pub async fn invoke(config: &HandlerConfig) -> InvocationResult {
    let connection_string = config.proxy_url().ok_or(AppError::MissingProxyUrl)?;

    let endpoint = ProxyEndpoint::parse(connection_string)?;
    info!("Using Fixie proxy: {}", endpoint);

    let client = UpstreamClient::new(&endpoint, config.timeout_ms)?;

    info!("Making request to: {}", config.target_url);
    let data = client.fetch_origin(&config.target_url).await?;

    info!("Request successful");
    debug!("Response data: {}", data);

    Ok(SuccessBody::from_upstream(data))
}
