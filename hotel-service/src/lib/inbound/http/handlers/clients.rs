use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::client::errors::EmailError;
use crate::domain::client::errors::FullNameError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientDetails;
use crate::domain::client::models::EmailAddress;
use crate::domain::client::models::FullName;
use crate::inbound::http::handlers::ApiError;

pub mod add_client;
pub mod edit_client;
pub mod list_clients;

/// Editable client fields as sent by the front end (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientFields {
    full_name: String,
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Clone, Error)]
pub enum ParseClientFieldsError {
    #[error("Invalid full name: {0}")]
    FullName(#[from] FullNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl ClientFields {
    fn try_into_details(self) -> Result<ClientDetails, ParseClientFieldsError> {
        let full_name = FullName::new(self.full_name)?;
        let email = EmailAddress::new(self.email)?;
        Ok(ClientDetails::new(full_name, email, self.phone, self.notes))
    }
}

impl From<ParseClientFieldsError> for ApiError {
    fn from(err: ParseClientFieldsError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientData {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Client> for ClientData {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.0,
            full_name: client.full_name.as_str().to_string(),
            email: client.email.as_str().to_string(),
            phone: client.phone.clone(),
            notes: client.notes.clone(),
            created_at: client.created_at,
        }
    }
}
