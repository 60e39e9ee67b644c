use async_trait::async_trait;

use crate::client::RouteClient;
use crate::errors::Result;
use crate::types::Receiver;

/// Route management operations against the alert-routing service
///
/// Lets callers hold an `Arc<dyn RouteManager>` and substitute their own
/// implementation in tests.
#[async_trait]
pub trait RouteManager: Send + Sync {
    /// Create a receiver.
    async fn add_route(&self, receiver: &Receiver) -> Result<()>;

    /// Replace an existing receiver.
    async fn edit_route(&self, receiver: &Receiver) -> Result<()>;

    /// Delete a receiver by name.
    async fn delete_route(&self, name: &str) -> Result<()>;
}

#[async_trait]
impl RouteManager for RouteClient {
    async fn add_route(&self, receiver: &Receiver) -> Result<()> {
        RouteClient::add_route(self, receiver).await
    }

    async fn edit_route(&self, receiver: &Receiver) -> Result<()> {
        RouteClient::edit_route(self, receiver).await
    }

    async fn delete_route(&self, name: &str) -> Result<()> {
        RouteClient::delete_route(self, name).await
    }
}
