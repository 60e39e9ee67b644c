use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

use crate::config::RouteClientConfig;
use crate::errors::{Result, RouteError};
use crate::types::{DeleteRouteRequest, Receiver};

const CONTENT_TYPE_JSON: &str = "application/json";

/// Client for managing notification routes through Alertmanager's channel API
///
/// The channel URL is composed once at construction. The client holds no
/// per-call state and can be cloned and shared freely.
///
/// # Example
///
/// ```rust,no_run
/// use alert_route_client::{Receiver, RouteClient};
/// use serde_json::json;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RouteClient::new(
///         "http://localhost:9093/api/",
///         "/v1/routes",
///         Duration::from_secs(10),
///     )?;
///
///     let receiver = Receiver::new("ops-webhook")
///         .with_webhook_config(json!({ "url": "http://hooks.internal/alerts" }));
///
///     client.add_route(&receiver).await?;
///     client.delete_route("ops-webhook").await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct RouteClient {
    client: ClientWithMiddleware,
    channel_url: Url,
}

impl RouteClient {
    /// Create a new route client
    ///
    /// # Arguments
    ///
    /// * `api_prefix` - Alertmanager API prefix (e.g., `http://localhost:9093/api/`).
    ///   An empty string falls back to `ALERTMANAGER_API_PREFIX`, then to the default.
    /// * `channel_path` - Channel API path relative to the prefix (e.g., `v1/routes`)
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(api_prefix: &str, channel_path: &str, timeout: Duration) -> Result<Self> {
        Self::from_config(RouteClientConfig {
            api_prefix: api_prefix.to_owned(),
            channel_path: channel_path.to_owned(),
            timeout,
        })
    }

    /// Create a new route client from configuration
    ///
    /// Unset fields are resolved from the environment and defaults first.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn from_config(config: RouteClientConfig) -> Result<Self> {
        let config = config.resolve();
        let channel_url = channel_api_url(&config.api_prefix, &config.channel_path)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RouteError::BuildHttpClient)?;

        let client = ClientBuilder::new(client).build();

        debug!(url = %channel_url, "Route client configured");
        Ok(Self {
            client,
            channel_url,
        })
    }

    /// Create a new client with a custom reqwest middleware client
    ///
    /// `channel_url` is used verbatim as the target of every request.
    pub fn with_client(client: ClientWithMiddleware, channel_url: Url) -> Self {
        Self {
            client,
            channel_url,
        }
    }

    /// Register a new receiver with Alertmanager
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The receiver cannot be serialized
    /// - The HTTP request fails
    /// - Alertmanager returns a non-success status code
    #[instrument(
        name = "RouteClient::add_route",
        skip_all,
        fields(receiver = %receiver.name)
    )]
    pub async fn add_route(&self, receiver: &Receiver) -> Result<()> {
        self.send(Method::POST, receiver).await
    }

    /// Replace an existing receiver definition
    ///
    /// Uses the same URL as [`add_route`](Self::add_route) with `PUT`.
    ///
    /// # Errors
    ///
    /// Same as [`add_route`](Self::add_route).
    #[instrument(
        name = "RouteClient::edit_route",
        skip_all,
        fields(receiver = %receiver.name)
    )]
    pub async fn edit_route(&self, receiver: &Receiver) -> Result<()> {
        self.send(Method::PUT, receiver).await
    }

    /// Remove a receiver by name
    ///
    /// The body is `{"name": "<name>"}`.
    ///
    /// # Errors
    ///
    /// Same as [`add_route`](Self::add_route).
    #[instrument(name = "RouteClient::delete_route", skip(self))]
    pub async fn delete_route(&self, name: &str) -> Result<()> {
        self.send(Method::DELETE, &DeleteRouteRequest { name }).await
    }

    /// Get the composed channel API URL
    pub fn channel_url(&self) -> &Url {
        &self.channel_url
    }

    async fn send<T: Serialize + ?Sized>(&self, method: Method, body: &T) -> Result<()> {
        let body = serde_json::to_vec(body).map_err(|err| {
            error!(method = %method, error = %err, "Failed to encode request body");
            RouteError::Serialize(err)
        })?;

        debug!(method = %method, url = %self.channel_url, "Calling Alertmanager channel API");

        let response = self
            .client
            .request(method.clone(), self.channel_url.clone())
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await
            .map_err(|err| {
                error!(
                    method = %method,
                    url = %self.channel_url,
                    error = %err,
                    "Error in API call to Alertmanager"
                );
                RouteError::Request(err)
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(
                method = %method,
                url = %self.channel_url,
                status = status.as_u16(),
                "Alertmanager did not return a 2xx response"
            );
            return Err(RouteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), "Alertmanager accepted request");
        Ok(())
    }
}

/// Join the API prefix and the channel path
///
/// A single leading `/` is stripped from `channel_path` so the two parts
/// compose without a doubled separator. Nothing else is normalised.
///
/// # Errors
///
/// Returns [`RouteError::InvalidUrl`] if the result is not an absolute URL.
pub fn channel_api_url(api_prefix: &str, channel_path: &str) -> Result<Url> {
    let channel_path = channel_path.strip_prefix('/').unwrap_or(channel_path);
    let url = format!("{api_prefix}{channel_path}");

    Url::parse(&url).map_err(|source| RouteError::InvalidUrl { url, source })
}
