pub mod config;
pub mod response;

pub use config::HandlerConfig;
pub use response::{FailureBody, FailureDetails, HandlerResponse, SuccessBody};
