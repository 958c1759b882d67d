//! Client handlers
//!
//! Endpoints for client registration and lookup.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::domain::entities::{Client, ClientId, NewClient};
use crate::error::AppError;
use crate::AppState;

/// Response for the client count
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total_clients: u64,
}

/// POST /clients
pub async fn create_client(
    State(state): State<AppState>,
    payload: Result<Json<NewClient>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), AppError> {
    let Json(input) = payload?;
    let client = state.client_service.create(&input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /clients
///
/// All clients with their deliveries.
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    Ok(Json(state.client_service.list().await?))
}

/// GET /clients/:id
pub async fn get_client(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Client>, AppError> {
    let Path(id) = id?;
    Ok(Json(state.client_service.get(ClientId(id)).await?))
}

/// PUT /clients/:id
pub async fn update_client(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewClient>, JsonRejection>,
) -> Result<Json<Client>, AppError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.client_service.update(ClientId(id), &input).await?))
}

/// DELETE /clients/:id
pub async fn delete_client(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.client_service.delete(ClientId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /clients/cpf/:cpf
pub async fn get_client_by_cpf(
    State(state): State<AppState>,
    cpf: Result<Path<String>, PathRejection>,
) -> Result<Json<Client>, AppError> {
    let Path(cpf) = cpf?;
    Ok(Json(state.client_service.get_by_cpf(&cpf).await?))
}

/// GET /clients/name/:name
///
/// Case-insensitive name prefix search.
pub async fn search_clients_by_name(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Client>>, AppError> {
    let Path(name) = name?;
    Ok(Json(state.client_service.search_by_name(&name).await?))
}

/// GET /clients/count
pub async fn count_clients(State(state): State<AppState>) -> Result<Json<CountResponse>, AppError> {
    let total_clients = state.client_service.count().await?;
    Ok(Json(CountResponse { total_clients }))
}
