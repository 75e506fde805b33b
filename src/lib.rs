pub mod error;
pub mod models;
pub mod modules;
pub mod proxy; // Fixie proxy hop and upstream client
mod utils;

use anyhow::Context;
use serde_json::Value;
use std::io::Read;

pub use error::{AppError, AppResult};
pub use models::{HandlerConfig, HandlerResponse};
pub use modules::{handle, load_handler_config};

/// Local bootstrap: stands in for the function runtime for one invocation
///
/// Reads the event from stdin and prints the response object to stdout.
pub fn run() -> anyhow::Result<()> {
    modules::logger::init_logger();

    // Sourced once, before any invocation
    let config = load_handler_config();

    let event = read_event(std::io::stdin().lock())?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let response = runtime.block_on(handle(&event, &config));

    let output =
        serde_json::to_string_pretty(&response).context("Failed to serialize response")?;
    println!("{}", output);

    Ok(())
}

/// Read one invocation event; empty input becomes `{}`
fn read_event<R: Read>(mut reader: R) -> anyhow::Result<Value> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("Failed to read invocation event")?;

    if raw.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_str(&raw).context("Invocation event is not valid JSON")
}
