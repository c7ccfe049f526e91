use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientDetails;
use crate::domain::client::models::ClientId;

/// Port for client domain service operations.
#[async_trait]
pub trait ClientServicePort: Send + Sync + 'static {
    /// Register a new client.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn add_client(&self, details: ClientDetails) -> Result<Client, ClientError>;

    /// Replace the editable fields of an existing client.
    ///
    /// # Errors
    /// * `NotFound` - Client does not exist
    /// * `DatabaseError` - Database operation failed
    async fn edit_client(&self, id: ClientId, details: ClientDetails)
        -> Result<Client, ClientError>;

    /// List all clients.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_clients(&self) -> Result<Vec<Client>, ClientError>;
}

/// Persistence operations for clients.
#[async_trait]
pub trait ClientRepository: Send + Sync + 'static {
    /// Persist a new client.
    ///
    /// # Returns
    /// Created client with its assigned identifier
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, details: ClientDetails) -> Result<Client, ClientError>;

    /// Update an existing client.
    ///
    /// # Returns
    /// Optional updated client (None if no client has this identifier)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        id: ClientId,
        details: ClientDetails,
    ) -> Result<Option<Client>, ClientError>;

    /// Retrieve all clients ordered by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Client>, ClientError>;
}
