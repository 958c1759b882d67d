//! PostgreSQL adapter for DeliveryRepository

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::filters::lower_starts_with;
use crate::domain::entities::{Address, Delivery, DeliveryId, NewDelivery, OrderStatus};
use crate::domain::ports::DeliveryRepository;
use crate::entity::{clients, deliveries};
use crate::error::DomainError;

/// PostgreSQL implementation of DeliveryRepository
pub struct PostgresDeliveryRepository {
    db: DatabaseConnection,
}

impl PostgresDeliveryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn into_deliveries(rows: Vec<deliveries::Model>) -> Result<Vec<Delivery>, DomainError> {
    rows.into_iter().map(Delivery::try_from).collect()
}

fn apply(model: &mut deliveries::ActiveModel, delivery: &NewDelivery) {
    model.client_cpf = Set(delivery.client_cpf.clone());
    model.client_name = Set(delivery.client_name.clone());
    model.test_name = Set(delivery.test_name.clone());
    model.weight = Set(delivery.weight);
    model.street = Set(delivery.address.street.clone());
    model.number = Set(delivery.address.number.clone());
    model.neighborhood = Set(delivery.address.neighborhood.clone());
    model.complement = Set(delivery.address.complement.clone());
    model.city = Set(delivery.address.city.clone());
    model.state = Set(delivery.address.state.clone());
    model.country = Set(delivery.address.country.clone());
    model.latitude = Set(delivery.address.latitude);
    model.longitude = Set(delivery.address.longitude);
    model.order_status = Set(delivery.order_status.to_string());
}

/// Insertable row; the id is left to the database
fn new_active_model(delivery: &NewDelivery) -> deliveries::ActiveModel {
    let mut model = deliveries::ActiveModel {
        id: NotSet,
        ..Default::default()
    };
    apply(&mut model, delivery);
    model
}

#[async_trait]
impl DeliveryRepository for PostgresDeliveryRepository {
    async fn create(&self, delivery: &NewDelivery) -> Result<Delivery, DomainError> {
        let result = new_active_model(delivery).insert(&self.db).await?;

        Delivery::try_from(result)
    }

    async fn find_all(&self) -> Result<Vec<Delivery>, DomainError> {
        let results = deliveries::Entity::find()
            .order_by_asc(deliveries::Column::Id)
            .all(&self.db)
            .await?;

        into_deliveries(results)
    }

    async fn find_by_id(&self, id: DeliveryId) -> Result<Option<Delivery>, DomainError> {
        let result = deliveries::Entity::find_by_id(id.0).one(&self.db).await?;

        result.map(Delivery::try_from).transpose()
    }

    async fn find_by_client_cpf(&self, cpf: &str) -> Result<Vec<Delivery>, DomainError> {
        let results = deliveries::Entity::find()
            .filter(deliveries::Column::ClientCpf.eq(cpf))
            .order_by_asc(deliveries::Column::Id)
            .all(&self.db)
            .await?;

        into_deliveries(results)
    }

    async fn find_by_client_name_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<Delivery>, DomainError> {
        let matching_names = Query::select()
            .column(clients::Column::Name)
            .from(clients::Entity)
            .and_where(lower_starts_with(
                (clients::Entity, clients::Column::Name),
                prefix,
            ))
            .to_owned();

        let results = deliveries::Entity::find()
            .filter(deliveries::Column::ClientName.in_subquery(matching_names))
            .order_by_asc(deliveries::Column::Id)
            .all(&self.db)
            .await?;

        into_deliveries(results)
    }

    async fn find_by_city_prefix(&self, prefix: &str) -> Result<Vec<Delivery>, DomainError> {
        let results = deliveries::Entity::find()
            .filter(lower_starts_with(
                (deliveries::Entity, deliveries::Column::City),
                prefix,
            ))
            .order_by_asc(deliveries::Column::Id)
            .all(&self.db)
            .await?;

        into_deliveries(results)
    }

    async fn update(
        &self,
        id: DeliveryId,
        delivery: &NewDelivery,
    ) -> Result<Delivery, DomainError> {
        let existing = deliveries::Entity::find_by_id(id.0)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Delivery {} not found", id)))?;

        let mut active_model = existing.into_active_model();
        apply(&mut active_model, delivery);

        let result = active_model.update(&self.db).await?;

        Delivery::try_from(result)
    }

    async fn delete(&self, id: DeliveryId) -> Result<(), DomainError> {
        let result = deliveries::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Delivery {} not found", id)))
        } else {
            Ok(())
        }
    }

    async fn update_order_status(
        &self,
        id: DeliveryId,
        status: OrderStatus,
    ) -> Result<(), DomainError> {
        let result = deliveries::Entity::update_many()
            .col_expr(
                deliveries::Column::OrderStatus,
                Expr::value(status.to_string()),
            )
            .filter(deliveries::Column::Id.eq(id.0))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Delivery {} not found", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<deliveries::Model> for Delivery {
    type Error = DomainError;

    fn try_from(model: deliveries::Model) -> Result<Self, Self::Error> {
        let order_status = model.order_status.parse().map_err(|e| {
            DomainError::Database(format!("delivery {} has {}", model.id, e))
        })?;

        Ok(Delivery {
            id: DeliveryId(model.id),
            client_cpf: model.client_cpf,
            client_name: model.client_name,
            test_name: model.test_name,
            weight: model.weight,
            address: Address {
                street: model.street,
                number: model.number,
                neighborhood: model.neighborhood,
                complement: model.complement,
                city: model.city,
                state: model.state,
                country: model.country,
                latitude: model.latitude,
                longitude: model.longitude,
            },
            order_status,
        })
    }
}
