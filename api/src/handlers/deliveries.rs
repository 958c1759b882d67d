//! Delivery handlers
//!
//! Endpoints for deliveries, their filters and the status-only update.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{Delivery, DeliveryId, DeliveryInput};
use crate::error::AppError;
use crate::AppState;

/// Body of `PATCH /deliveries/:id/status`
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    #[serde(alias = "order_status")]
    pub status: String,
}

/// POST /deliveries
pub async fn create_delivery(
    State(state): State<AppState>,
    payload: Result<Json<DeliveryInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Delivery>), AppError> {
    let Json(input) = payload?;
    let delivery = state.delivery_service.create(&input).await?;
    Ok((StatusCode::CREATED, Json(delivery)))
}

/// GET /deliveries
pub async fn list_deliveries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Delivery>>, AppError> {
    Ok(Json(state.delivery_service.list().await?))
}

/// GET /deliveries/:id
pub async fn get_delivery(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Delivery>, AppError> {
    let Path(id) = id?;
    Ok(Json(state.delivery_service.get(DeliveryId(id)).await?))
}

/// PUT /deliveries/:id
pub async fn update_delivery(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<DeliveryInput>, JsonRejection>,
) -> Result<Json<Delivery>, AppError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(
        state.delivery_service.update(DeliveryId(id), &input).await?,
    ))
}

/// DELETE /deliveries/:id
pub async fn delete_delivery(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.delivery_service.delete(DeliveryId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /deliveries/client/cpf/:cpf
pub async fn deliveries_by_client_cpf(
    State(state): State<AppState>,
    cpf: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Delivery>>, AppError> {
    let Path(cpf) = cpf?;
    Ok(Json(state.delivery_service.by_client_cpf(&cpf).await?))
}

/// GET /deliveries/client/name/:name
pub async fn deliveries_by_client_name(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Delivery>>, AppError> {
    let Path(name) = name?;
    Ok(Json(state.delivery_service.by_client_name(&name).await?))
}

/// GET /deliveries/city/:city
pub async fn deliveries_by_city(
    State(state): State<AppState>,
    city: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Delivery>>, AppError> {
    let Path(city) = city?;
    Ok(Json(state.delivery_service.by_city(&city).await?))
}

/// PATCH /deliveries/:id/status
///
/// Writes only the order status; every other field is left as stored.
pub async fn update_delivery_status(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StatusUpdateRequest>, JsonRejection>,
) -> Result<Json<Delivery>, AppError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    Ok(Json(
        state
            .delivery_service
            .update_status(DeliveryId(id), &request.status)
            .await?,
    ))
}
