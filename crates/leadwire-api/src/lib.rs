// leadwire-api: Async Rust client for the Leadwire engagement backend.

pub mod agents;
pub mod analytics;
pub mod automation;
pub mod campaign;
pub mod chat;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod leads;
pub mod numbers;
pub mod transport;
pub mod types;

pub use client::GatewayClient;
pub use error::Error;
pub use transport::TransportConfig;
