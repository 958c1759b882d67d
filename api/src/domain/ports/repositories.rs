//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Lookups by id return `Ok(None)` when nothing matches; updates and deletes
//! of a missing id return `DomainError::NotFound`.

use async_trait::async_trait;

use crate::domain::entities::{
    Client, ClientId, Delivery, DeliveryId, NewClient, NewDelivery, OrderStatus,
};
use crate::error::DomainError;

/// Repository for Client entities
///
/// Every client returned carries its deliveries (matched by CPF).
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert a new client. Duplicate CPF or CNPJ yields `UniqueViolation`.
    async fn create(&self, client: &NewClient) -> Result<Client, DomainError>;

    /// All clients, ordered by id
    async fn find_all(&self) -> Result<Vec<Client>, DomainError>;

    /// Find a client by ID
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError>;

    /// Find a client by exact CPF
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Client>, DomainError>;

    /// Clients whose name starts with `prefix`, ignoring case
    async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Client>, DomainError>;

    /// Overwrite the stored fields of an existing client
    async fn update(&self, id: ClientId, client: &NewClient) -> Result<Client, DomainError>;

    /// Delete a client by ID
    async fn delete(&self, id: ClientId) -> Result<(), DomainError>;

    /// Total number of clients
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for Delivery entities
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// Insert a new delivery
    async fn create(&self, delivery: &NewDelivery) -> Result<Delivery, DomainError>;

    /// All deliveries, ordered by id
    async fn find_all(&self) -> Result<Vec<Delivery>, DomainError>;

    /// Find a delivery by ID
    async fn find_by_id(&self, id: DeliveryId) -> Result<Option<Delivery>, DomainError>;

    /// Deliveries addressed to the exact CPF
    async fn find_by_client_cpf(&self, cpf: &str) -> Result<Vec<Delivery>, DomainError>;

    /// Deliveries whose client name equals the name of a client matching
    /// `prefix` (case-insensitive prefix on the clients table)
    async fn find_by_client_name_prefix(&self, prefix: &str)
        -> Result<Vec<Delivery>, DomainError>;

    /// Deliveries whose city starts with `prefix`, ignoring case
    async fn find_by_city_prefix(&self, prefix: &str) -> Result<Vec<Delivery>, DomainError>;

    /// Overwrite the stored fields of an existing delivery
    async fn update(&self, id: DeliveryId, delivery: &NewDelivery)
        -> Result<Delivery, DomainError>;

    /// Delete a delivery by ID
    async fn delete(&self, id: DeliveryId) -> Result<(), DomainError>;

    /// Write only the order status column
    async fn update_order_status(
        &self,
        id: DeliveryId,
        status: OrderStatus,
    ) -> Result<(), DomainError>;
}
