//! PostgreSQL adapter for ClientRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::filters::lower_starts_with;
use crate::domain::entities::{Client, ClientId, Delivery, NewClient};
use crate::domain::ports::ClientRepository;
use crate::entity::{clients, deliveries};
use crate::error::DomainError;

/// PostgreSQL implementation of ClientRepository
pub struct PostgresClientRepository {
    db: DatabaseConnection,
}

impl PostgresClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Convert rows to clients and attach their deliveries with one extra query
    async fn with_deliveries(&self, rows: Vec<clients::Model>) -> Result<Vec<Client>, DomainError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let cpfs: Vec<String> = rows.iter().map(|m| m.cpf.clone()).collect();
        let delivery_rows = deliveries::Entity::find()
            .filter(deliveries::Column::ClientCpf.is_in(cpfs))
            .order_by_asc(deliveries::Column::Id)
            .all(&self.db)
            .await?;

        let mut by_cpf: HashMap<String, Vec<Delivery>> = HashMap::new();
        for row in delivery_rows {
            let delivery = Delivery::try_from(row)?;
            by_cpf
                .entry(delivery.client_cpf.clone())
                .or_default()
                .push(delivery);
        }

        Ok(rows
            .into_iter()
            .map(|m| {
                let mut client = Client::from(m);
                client.deliveries = by_cpf.remove(&client.cpf).unwrap_or_default();
                client
            })
            .collect())
    }

    async fn with_deliveries_one(&self, row: clients::Model) -> Result<Client, DomainError> {
        let mut clients = self.with_deliveries(vec![row]).await?;
        clients
            .pop()
            .ok_or_else(|| DomainError::Database("client row vanished while loading".to_string()))
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn create(&self, client: &NewClient) -> Result<Client, DomainError> {
        let model = clients::ActiveModel {
            id: NotSet,
            name: Set(client.name.clone()),
            cpf: Set(client.cpf.clone()),
            cnpj: Set(client.cnpj.clone()),
            birth_date: Set(client.birth_date),
            email: Set(client.email.clone()),
            phone: Set(client.phone.clone()),
        };

        let result = model.insert(&self.db).await?;

        // Deliveries may already reference this CPF
        self.with_deliveries_one(result).await
    }

    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        let results = clients::Entity::find()
            .order_by_asc(clients::Column::Id)
            .all(&self.db)
            .await?;

        self.with_deliveries(results).await
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError> {
        let result = clients::Entity::find_by_id(id.0).one(&self.db).await?;

        match result {
            Some(row) => Ok(Some(self.with_deliveries_one(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Client>, DomainError> {
        let result = clients::Entity::find()
            .filter(clients::Column::Cpf.eq(cpf))
            .one(&self.db)
            .await?;

        match result {
            Some(row) => Ok(Some(self.with_deliveries_one(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Client>, DomainError> {
        let results = clients::Entity::find()
            .filter(lower_starts_with(
                (clients::Entity, clients::Column::Name),
                prefix,
            ))
            .order_by_asc(clients::Column::Id)
            .all(&self.db)
            .await?;

        self.with_deliveries(results).await
    }

    async fn update(&self, id: ClientId, client: &NewClient) -> Result<Client, DomainError> {
        let existing = clients::Entity::find_by_id(id.0)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Client {} not found", id)))?;

        let mut active_model = existing.into_active_model();
        active_model.name = Set(client.name.clone());
        active_model.cpf = Set(client.cpf.clone());
        active_model.cnpj = Set(client.cnpj.clone());
        active_model.birth_date = Set(client.birth_date);
        active_model.email = Set(client.email.clone());
        active_model.phone = Set(client.phone.clone());

        let result = active_model.update(&self.db).await?;

        self.with_deliveries_one(result).await
    }

    async fn delete(&self, id: ClientId) -> Result<(), DomainError> {
        let result = clients::Entity::delete_by_id(id.0).exec(&self.db).await?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Client {} not found", id)))
        } else {
            Ok(())
        }
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let total = clients::Entity::find().count(&self.db).await?;
        Ok(total)
    }
}

/// Convert SeaORM model to domain entity
impl From<clients::Model> for Client {
    fn from(model: clients::Model) -> Self {
        Client::from_parts(
            ClientId(model.id),
            NewClient {
                name: model.name,
                cpf: model.cpf,
                cnpj: model.cnpj,
                birth_date: model.birth_date,
                email: model.email,
                phone: model.phone,
            },
        )
    }
}
