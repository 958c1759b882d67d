//! Mock implementations of port traits
//!
//! In-memory repositories backed by one shared store, so deliveries attach to
//! clients and the client-name search sees the clients table the way the
//! PostgreSQL adapters do.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Client, ClientId, Delivery, DeliveryId, NewClient, NewDelivery, OrderStatus,
};
use crate::domain::ports::{ClientRepository, DeliveryRepository};
use crate::error::DomainError;

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value.to_lowercase().starts_with(&prefix.to_lowercase())
}

#[derive(Default)]
struct Tables {
    clients: BTreeMap<i64, NewClient>,
    deliveries: BTreeMap<i64, NewDelivery>,
    next_client_id: i64,
    next_delivery_id: i64,
}

impl Tables {
    fn client_with_deliveries(&self, id: i64, data: &NewClient) -> Client {
        let mut client = Client::from_parts(ClientId(id), data.clone());
        client.deliveries = self
            .deliveries
            .iter()
            .filter(|(_, d)| d.client_cpf == data.cpf)
            .map(|(id, d)| Delivery::from_parts(DeliveryId(*id), d.clone()))
            .collect();
        client
    }

    fn check_unique(&self, client: &NewClient, skip: Option<i64>) -> Result<(), DomainError> {
        for (id, existing) in &self.clients {
            if Some(*id) == skip {
                continue;
            }
            if existing.cpf == client.cpf {
                return Err(DomainError::UniqueViolation(format!(
                    "cpf {} already exists",
                    client.cpf
                )));
            }
            if existing.cnpj == client.cnpj {
                return Err(DomainError::UniqueViolation(format!(
                    "cnpj {} already exists",
                    client.cnpj
                )));
            }
        }
        Ok(())
    }
}

/// Store shared by the in-memory client and delivery repositories
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_repository(&self) -> InMemoryClientRepository {
        InMemoryClientRepository { db: self.clone() }
    }

    pub fn delivery_repository(&self) -> InMemoryDeliveryRepository {
        InMemoryDeliveryRepository { db: self.clone() }
    }
}

// ============================================================================
// In-Memory Client Repository
// ============================================================================

pub struct InMemoryClientRepository {
    db: InMemoryDatabase,
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn create(&self, client: &NewClient) -> Result<Client, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        tables.check_unique(client, None)?;

        tables.next_client_id += 1;
        let id = tables.next_client_id;
        tables.clients.insert(id, client.clone());
        Ok(tables.client_with_deliveries(id, client))
    }

    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables
            .clients
            .iter()
            .map(|(id, c)| tables.client_with_deliveries(*id, c))
            .collect())
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables
            .clients
            .get(&id.0)
            .map(|c| tables.client_with_deliveries(id.0, c)))
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Client>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables
            .clients
            .iter()
            .find(|(_, c)| c.cpf == cpf)
            .map(|(id, c)| tables.client_with_deliveries(*id, c)))
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Client>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables
            .clients
            .iter()
            .filter(|(_, c)| starts_with_ignore_case(&c.name, prefix))
            .map(|(id, c)| tables.client_with_deliveries(*id, c))
            .collect())
    }

    async fn update(&self, id: ClientId, client: &NewClient) -> Result<Client, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if !tables.clients.contains_key(&id.0) {
            return Err(DomainError::NotFound(format!("Client {} not found", id)));
        }
        tables.check_unique(client, Some(id.0))?;

        tables.clients.insert(id.0, client.clone());
        Ok(tables.client_with_deliveries(id.0, client))
    }

    async fn delete(&self, id: ClientId) -> Result<(), DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        tables
            .clients
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Client {} not found", id)))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables.clients.len() as u64)
    }
}

// ============================================================================
// In-Memory Delivery Repository
// ============================================================================

pub struct InMemoryDeliveryRepository {
    db: InMemoryDatabase,
}

impl InMemoryDeliveryRepository {
    fn select(&self, keep: impl Fn(&NewDelivery) -> bool) -> Vec<Delivery> {
        let tables = self.db.tables.read().unwrap();
        tables
            .deliveries
            .iter()
            .filter(|(_, d)| keep(d))
            .map(|(id, d)| Delivery::from_parts(DeliveryId(*id), d.clone()))
            .collect()
    }
}

#[async_trait]
impl DeliveryRepository for InMemoryDeliveryRepository {
    async fn create(&self, delivery: &NewDelivery) -> Result<Delivery, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        tables.next_delivery_id += 1;
        let id = tables.next_delivery_id;
        tables.deliveries.insert(id, delivery.clone());
        Ok(Delivery::from_parts(DeliveryId(id), delivery.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Delivery>, DomainError> {
        Ok(self.select(|_| true))
    }

    async fn find_by_id(&self, id: DeliveryId) -> Result<Option<Delivery>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables
            .deliveries
            .get(&id.0)
            .map(|d| Delivery::from_parts(id, d.clone())))
    }

    async fn find_by_client_cpf(&self, cpf: &str) -> Result<Vec<Delivery>, DomainError> {
        Ok(self.select(|d| d.client_cpf == cpf))
    }

    async fn find_by_client_name_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<Delivery>, DomainError> {
        let names: HashSet<String> = {
            let tables = self.db.tables.read().unwrap();
            tables
                .clients
                .values()
                .filter(|c| starts_with_ignore_case(&c.name, prefix))
                .map(|c| c.name.clone())
                .collect()
        };
        Ok(self.select(|d| names.contains(&d.client_name)))
    }

    async fn find_by_city_prefix(&self, prefix: &str) -> Result<Vec<Delivery>, DomainError> {
        Ok(self.select(|d| starts_with_ignore_case(&d.address.city, prefix)))
    }

    async fn update(
        &self,
        id: DeliveryId,
        delivery: &NewDelivery,
    ) -> Result<Delivery, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        match tables.deliveries.get_mut(&id.0) {
            Some(existing) => {
                *existing = delivery.clone();
                Ok(Delivery::from_parts(id, delivery.clone()))
            }
            None => Err(DomainError::NotFound(format!("Delivery {} not found", id))),
        }
    }

    async fn delete(&self, id: DeliveryId) -> Result<(), DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        tables
            .deliveries
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Delivery {} not found", id)))
    }

    async fn update_order_status(
        &self,
        id: DeliveryId,
        status: OrderStatus,
    ) -> Result<(), DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        match tables.deliveries.get_mut(&id.0) {
            Some(existing) => {
                existing.order_status = status;
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Delivery {} not found", id))),
        }
    }
}
