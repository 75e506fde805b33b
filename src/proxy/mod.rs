// proxy module - Fixie proxy hop and the upstream IP-echo client

pub mod config;
pub mod upstream;

pub use config::ProxyEndpoint;
