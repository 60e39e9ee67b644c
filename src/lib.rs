//! # Alert Route Client
//!
//! A Rust client for managing notification receivers (routes) through the
//! channel API of an [Alertmanager](https://prometheus.io/docs/alerting/latest/alertmanager/)
//! deployment.
//!
//! ## Features
//!
//! - Create, replace and delete receivers with `POST`, `PUT` and `DELETE`
//! - Builder pattern for constructing receivers
//! - Channel URL resolved once from explicit values, environment or defaults
//! - Every failure reported as a single internal error kind
//!
//! ## Example
//!
//! ```rust,no_run
//! use alert_route_client::{Receiver, RouteClient, RouteClientConfig};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RouteClient::from_config(RouteClientConfig::from_env())?;
//!
//!     let receiver = Receiver::new("oncall-email")
//!         .with_email_config(json!({
//!             "to": "oncall@example.com",
//!             "send_resolved": true
//!         }));
//!
//!     client.add_route(&receiver).await?;
//!     client.edit_route(&receiver).await?;
//!     client.delete_route("oncall-email").await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod errors;
mod manager;
mod types;

pub use client::{channel_api_url, RouteClient};
pub use config::{RouteClientConfig, DEFAULT_API_PREFIX, DEFAULT_CHANNEL_PATH, DEFAULT_TIMEOUT};
pub use errors::{ErrorKind, Result, RouteError};
pub use manager::RouteManager;
pub use types::Receiver;
