pub mod config;
pub mod handler;
pub mod logger;

pub use config::load_handler_config;
pub use handler::{handle, invoke};
