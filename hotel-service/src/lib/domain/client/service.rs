use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientDetails;
use crate::domain::client::models::ClientId;
use crate::domain::client::ports::ClientRepository;
use crate::domain::client::ports::ClientServicePort;

/// Domain service implementation for client operations.
pub struct ClientService<CR>
where
    CR: ClientRepository,
{
    repository: Arc<CR>,
}

impl<CR> ClientService<CR>
where
    CR: ClientRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ClientServicePort for ClientService<CR>
where
    CR: ClientRepository,
{
    async fn add_client(&self, details: ClientDetails) -> Result<Client, ClientError> {
        let client = self.repository.create(details).await?;
        tracing::info!(client_id = %client.id, "Client added");
        Ok(client)
    }

    async fn edit_client(
        &self,
        id: ClientId,
        details: ClientDetails,
    ) -> Result<Client, ClientError> {
        self.repository
            .update(id, details)
            .await?
            .ok_or(ClientError::NotFound(id.to_string()))
    }

    async fn list_clients(&self) -> Result<Vec<Client>, ClientError> {
        self.repository.list_all().await
    }
}
