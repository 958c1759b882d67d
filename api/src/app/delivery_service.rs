//! Delivery service
//!
//! Validates delivery records and delegates persistence to the repository.
//! The referenced CPF is not checked against the clients table.

use std::sync::Arc;

use crate::domain::entities::{Delivery, DeliveryId, DeliveryInput};
use crate::domain::ports::DeliveryRepository;
use crate::domain::validation::{parse_order_status, validate_delivery};
use crate::error::{AppError, DomainError};

/// Service for delivery operations
pub struct DeliveryService<R>
where
    R: DeliveryRepository + ?Sized,
{
    deliveries: Arc<R>,
}

impl<R> DeliveryService<R>
where
    R: DeliveryRepository + ?Sized,
{
    pub fn new(deliveries: Arc<R>) -> Self {
        Self { deliveries }
    }

    pub async fn create(&self, input: &DeliveryInput) -> Result<Delivery, AppError> {
        let new_delivery = validate_delivery(input)?;

        let delivery = self.deliveries.create(&new_delivery).await?;
        tracing::info!(
            delivery_id = %delivery.id,
            client_cpf = %delivery.client_cpf,
            status = %delivery.order_status,
            "Delivery created"
        );
        Ok(delivery)
    }

    pub async fn list(&self) -> Result<Vec<Delivery>, AppError> {
        Ok(self.deliveries.find_all().await?)
    }

    pub async fn get(&self, id: DeliveryId) -> Result<Delivery, AppError> {
        self.deliveries
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Delivery {} not found", id)).into())
    }

    pub async fn by_client_cpf(&self, cpf: &str) -> Result<Vec<Delivery>, AppError> {
        Ok(self.deliveries.find_by_client_cpf(cpf).await?)
    }

    /// Deliveries for clients whose name starts with `prefix`
    pub async fn by_client_name(&self, prefix: &str) -> Result<Vec<Delivery>, AppError> {
        Ok(self.deliveries.find_by_client_name_prefix(prefix).await?)
    }

    pub async fn by_city(&self, prefix: &str) -> Result<Vec<Delivery>, AppError> {
        Ok(self.deliveries.find_by_city_prefix(prefix).await?)
    }

    pub async fn update(&self, id: DeliveryId, input: &DeliveryInput) -> Result<Delivery, AppError> {
        let new_delivery = validate_delivery(input)?;

        let delivery = self.deliveries.update(id, &new_delivery).await?;
        tracing::info!(delivery_id = %id, "Delivery updated");
        Ok(delivery)
    }

    pub async fn delete(&self, id: DeliveryId) -> Result<(), AppError> {
        self.deliveries.delete(id).await?;
        tracing::info!(delivery_id = %id, "Delivery deleted");
        Ok(())
    }

    /// Change only the order status and return the stored delivery.
    /// Any status may follow any other.
    pub async fn update_status(&self, id: DeliveryId, status: &str) -> Result<Delivery, AppError> {
        let status = parse_order_status(status)?;

        self.deliveries.update_order_status(id, status).await?;
        tracing::info!(delivery_id = %id, status = %status, "Delivery status changed");

        self.get(id).await
    }
}
