//! Client service
//!
//! Validates client records and delegates persistence to the repository.

use std::sync::Arc;

use crate::domain::entities::{Client, ClientId, NewClient};
use crate::domain::ports::ClientRepository;
use crate::domain::validation::validate_client;
use crate::error::{AppError, DomainError};

/// Service for client operations
pub struct ClientService<R>
where
    R: ClientRepository + ?Sized,
{
    clients: Arc<R>,
}

impl<R> ClientService<R>
where
    R: ClientRepository + ?Sized,
{
    pub fn new(clients: Arc<R>) -> Self {
        Self { clients }
    }

    pub async fn create(&self, input: &NewClient) -> Result<Client, AppError> {
        validate_client(input)?;

        let client = self.clients.create(input).await?;
        tracing::info!(client_id = %client.id, cpf = %client.cpf, "Client created");
        Ok(client)
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        Ok(self.clients.find_all().await?)
    }

    pub async fn get(&self, id: ClientId) -> Result<Client, AppError> {
        self.clients
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Client {} not found", id)).into())
    }

    pub async fn get_by_cpf(&self, cpf: &str) -> Result<Client, AppError> {
        self.clients
            .find_by_cpf(cpf)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Client with CPF {} not found", cpf)).into()
            })
    }

    /// Clients whose name starts with `prefix`, ignoring case
    pub async fn search_by_name(&self, prefix: &str) -> Result<Vec<Client>, AppError> {
        Ok(self.clients.find_by_name_prefix(prefix).await?)
    }

    pub async fn update(&self, id: ClientId, input: &NewClient) -> Result<Client, AppError> {
        validate_client(input)?;

        let client = self.clients.update(id, input).await?;
        tracing::info!(client_id = %id, "Client updated");
        Ok(client)
    }

    pub async fn delete(&self, id: ClientId) -> Result<(), AppError> {
        self.clients.delete(id).await?;
        tracing::info!(client_id = %id, "Client deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(self.clients.count().await?)
    }
}
